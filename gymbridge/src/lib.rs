//! # gymbridge
//!
//! Copies the state of a stateful simulator object into a flat record that a
//! functional, stateless `step` can pick up from. Run it once per reset.
//!
//! ## The Crates
//!
//! -   **`gymbridge`:** The crate you are currently viewing. It holds the
//!     command line front-end and re-exports the others.
//! -   **[`adapter`]:** The closed set of supported environments, the
//!     [`SourceEnv`](adapter::SourceEnv) trait simulators implement, and the
//!     per-environment field tables behind [`adapter::translate`].
//! -   **[`record`]:** The immutable [`Record`](record::Record) and
//!     [`Value`](record::Value) types the adapter produces.
//! -   **[`snapshot`]:** A JSON-backed [`SourceEnv`](adapter::SourceEnv) for
//!     simulators that can dump their attributes but cannot be linked in.
//!
//! ## Supported environments
//!
//! Classic control (`Pendulum-v0`, `CartPole-v0`, `MountainCar-v0`,
//! `MountainCarContinuous-v0`, `Acrobot-v1`), bsuite (`Catch`, `DeepSea`,
//! `DiscountingChain`, `MemoryChain`, `UmbrellaChain`, `MNISTBandit`,
//! `SimpleBandit`) and `MinAtar` (`Asterix`, `Breakout`, `Freeway`,
//! `Seaquest`, `SpaceInvaders`). Run `gymbridge list` for the exact fields.
//!
//! `Seaquest-MinAtar` has no field mapping yet and translates to an empty
//! record.

pub mod app;
pub mod cli;
pub mod watcher;

pub use adapter;
pub use record;
pub use snapshot;
