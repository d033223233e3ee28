//! Classic control tasks. The simulator keeps its whole state in one flat
//! `state` vector; each record field is one element of it.

use super::{Field, TERMINAL, TIME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassicControl {
    Pendulum,
    CartPole,
    MountainCar,
    MountainCarContinuous,
    Acrobot,
}

const PENDULUM: &[Field] = &[
    Field::element("theta", "state", 0),
    Field::element("theta_dot", "state", 1),
    TIME,
    TERMINAL,
];

const CART_POLE: &[Field] = &[
    Field::element("x", "state", 0),
    Field::element("x_dot", "state", 1),
    Field::element("theta", "state", 2),
    Field::element("theta_dot", "state", 3),
    TIME,
    TERMINAL,
];

// Shared by the discrete and continuous variants.
const MOUNTAIN_CAR: &[Field] = &[
    Field::element("position", "state", 0),
    Field::element("velocity", "state", 1),
    TIME,
    TERMINAL,
];

const ACROBOT: &[Field] = &[
    Field::element("joint_angle1", "state", 0),
    Field::element("joint_angle2", "state", 1),
    Field::element("velocity_1", "state", 2),
    Field::element("velocity_2", "state", 3),
    TIME,
    TERMINAL,
];

impl ClassicControl {
    pub const ALL: [Self; 5] = [
        Self::Pendulum,
        Self::CartPole,
        Self::MountainCar,
        Self::MountainCarContinuous,
        Self::Acrobot,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendulum => "Pendulum-v0",
            Self::CartPole => "CartPole-v0",
            Self::MountainCar => "MountainCar-v0",
            Self::MountainCarContinuous => "MountainCarContinuous-v0",
            Self::Acrobot => "Acrobot-v1",
        }
    }

    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::Pendulum => PENDULUM,
            Self::CartPole => CART_POLE,
            Self::MountainCar | Self::MountainCarContinuous => MOUNTAIN_CAR,
            Self::Acrobot => ACROBOT,
        }
    }
}
