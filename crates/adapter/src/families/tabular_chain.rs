//! bsuite tabular and chain tasks.
//!
//! These objects keep their state in underscore-prefixed private attributes.
//! The chain tasks count steps themselves, so their `time` field is read from
//! `_timestep` instead of being reset to zero.

use super::{Field, TERMINAL, TIME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabularChain {
    Catch,
    DeepSea,
    DiscountingChain,
    MemoryChain,
    UmbrellaChain,
    MnistBandit,
    SimpleBandit,
}

const STEP_COUNTER: Field = Field::attr("time", "_timestep");

const CATCH: &[Field] = &[
    Field::attr("ball_x", "_ball_x"),
    Field::attr("ball_y", "_ball_y"),
    Field::attr("paddle_x", "_paddle_x"),
    Field::attr("paddle_y", "_paddle_y"),
    Field::attr("prev_done", "_reset_next_step"),
    TIME,
    TERMINAL,
];

const DEEP_SEA: &[Field] = &[
    Field::attr("row", "_row"),
    Field::attr("column", "_column"),
    Field::attr("bad_episode", "_bad_episode"),
    Field::attr("total_bad_episodes", "_total_bad_episodes"),
    Field::attr("denoised_return", "_denoised_return"),
    Field::attr("optimal_return", "_optimal_return"),
    Field::attr("action_mapping", "_action_mapping"),
    TIME,
    TERMINAL,
];

const DISCOUNTING_CHAIN: &[Field] = &[
    Field::attr("rewards", "_rewards"),
    Field::attr("context", "_context"),
    STEP_COUNTER,
    TERMINAL,
];

const MEMORY_CHAIN: &[Field] = &[
    Field::attr("context", "_context"),
    Field::attr("query", "_query"),
    Field::attr("total_perfect", "_total_perfect"),
    Field::attr("total_regret", "_total_regret"),
    STEP_COUNTER,
    TERMINAL,
];

const UMBRELLA_CHAIN: &[Field] = &[
    Field::attr("need_umbrella", "_need_umbrella"),
    Field::attr("has_umbrella", "_has_umbrella"),
    Field::attr("total_regret", "_total_regret"),
    STEP_COUNTER,
    TERMINAL,
];

// The record key is `regret`, not `total_regret`.
const MNIST_BANDIT: &[Field] = &[
    Field::attr("correct_label", "_correct_label"),
    Field::attr("regret", "_total_regret"),
    TIME,
    TERMINAL,
];

const SIMPLE_BANDIT: &[Field] = &[
    Field::attr("rewards", "_rewards"),
    Field::attr("total_regret", "_total_regret"),
    TIME,
    TERMINAL,
];

impl TabularChain {
    pub const ALL: [Self; 7] = [
        Self::Catch,
        Self::DeepSea,
        Self::DiscountingChain,
        Self::MemoryChain,
        Self::UmbrellaChain,
        Self::MnistBandit,
        Self::SimpleBandit,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Catch => "Catch-bsuite",
            Self::DeepSea => "DeepSea-bsuite",
            Self::DiscountingChain => "DiscountingChain-bsuite",
            Self::MemoryChain => "MemoryChain-bsuite",
            Self::UmbrellaChain => "UmbrellaChain-bsuite",
            Self::MnistBandit => "MNISTBandit-bsuite",
            Self::SimpleBandit => "SimpleBandit-bsuite",
        }
    }

    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::Catch => CATCH,
            Self::DeepSea => DEEP_SEA,
            Self::DiscountingChain => DISCOUNTING_CHAIN,
            Self::MemoryChain => MEMORY_CHAIN,
            Self::UmbrellaChain => UMBRELLA_CHAIN,
            Self::MnistBandit => MNIST_BANDIT,
            Self::SimpleBandit => SIMPLE_BANDIT,
        }
    }
}
