//! The closed set of supported environment identifiers.

use crate::error::TranslateError;
use crate::families::{ArcadeGrid, ClassicControl, Field, TabularChain};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    ClassicControl,
    TabularChain,
    ArcadeGrid,
}

impl Family {
    pub const ALL: [Self; 3] = [Self::ClassicControl, Self::TabularChain, Self::ArcadeGrid];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClassicControl => "classic-control",
            Self::TabularChain => "bsuite",
            Self::ArcadeGrid => "MinAtar",
        }
    }

    /// Identifiers of this family, in table order.
    pub fn envs(self) -> impl Iterator<Item = EnvId> {
        EnvId::ALL.into_iter().filter(move |id| id.family() == self)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A supported environment, keyed by family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvId {
    ClassicControl(ClassicControl),
    TabularChain(TabularChain),
    ArcadeGrid(ArcadeGrid),
}

impl EnvId {
    pub const ALL: [Self; 17] = [
        Self::ClassicControl(ClassicControl::Pendulum),
        Self::ClassicControl(ClassicControl::CartPole),
        Self::ClassicControl(ClassicControl::MountainCar),
        Self::ClassicControl(ClassicControl::MountainCarContinuous),
        Self::ClassicControl(ClassicControl::Acrobot),
        Self::TabularChain(TabularChain::Catch),
        Self::TabularChain(TabularChain::DeepSea),
        Self::TabularChain(TabularChain::DiscountingChain),
        Self::TabularChain(TabularChain::MemoryChain),
        Self::TabularChain(TabularChain::UmbrellaChain),
        Self::TabularChain(TabularChain::MnistBandit),
        Self::TabularChain(TabularChain::SimpleBandit),
        Self::ArcadeGrid(ArcadeGrid::Asterix),
        Self::ArcadeGrid(ArcadeGrid::Breakout),
        Self::ArcadeGrid(ArcadeGrid::Freeway),
        Self::ArcadeGrid(ArcadeGrid::Seaquest),
        Self::ArcadeGrid(ArcadeGrid::SpaceInvaders),
    ];

    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::ClassicControl(_) => Family::ClassicControl,
            Self::TabularChain(_) => Family::TabularChain,
            Self::ArcadeGrid(_) => Family::ArcadeGrid,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClassicControl(env) => env.as_str(),
            Self::TabularChain(env) => env.as_str(),
            Self::ArcadeGrid(env) => env.as_str(),
        }
    }

    /// The field table this environment translates with.
    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::ClassicControl(env) => env.fields(),
            Self::TabularChain(env) => env.fields(),
            Self::ArcadeGrid(env) => env.fields(),
        }
    }
}

impl fmt::Display for EnvId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvId {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| TranslateError::UnsupportedEnv(s.to_string()))
    }
}

impl From<ClassicControl> for EnvId {
    fn from(env: ClassicControl) -> Self {
        Self::ClassicControl(env)
    }
}

impl From<TabularChain> for EnvId {
    fn from(env: TabularChain) -> Self {
        Self::TabularChain(env)
    }
}

impl From<ArcadeGrid> for EnvId {
    fn from(env: ArcadeGrid) -> Self {
        Self::ArcadeGrid(env)
    }
}
