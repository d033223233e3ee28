//! `MinAtar` arcade games.
//!
//! The gym wrapper holds the actual game in its `env` attribute, so every
//! path here starts with `env.`. Record keys reuse the game's attribute names.

use super::{Field, TERMINAL, TIME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcadeGrid {
    Asterix,
    Breakout,
    Freeway,
    Seaquest,
    SpaceInvaders,
}

const ASTERIX: &[Field] = &[
    Field::attr("player_x", "env.player_x"),
    Field::attr("player_y", "env.player_y"),
    Field::attr("shot_timer", "env.shot_timer"),
    Field::attr("spawn_speed", "env.spawn_speed"),
    Field::attr("spawn_timer", "env.spawn_timer"),
    Field::attr("move_speed", "env.move_speed"),
    Field::attr("move_timer", "env.move_timer"),
    Field::attr("ramp_timer", "env.ramp_timer"),
    Field::attr("ramp_index", "env.ramp_index"),
    Field::attr("entities", "env.entities"),
    TIME,
    TERMINAL,
];

const BREAKOUT: &[Field] = &[
    Field::attr("ball_y", "env.ball_y"),
    Field::attr("ball_x", "env.ball_x"),
    Field::attr("ball_dir", "env.ball_dir"),
    Field::attr("pos", "env.pos"),
    Field::attr("brick_map", "env.brick_map"),
    Field::attr("strike", "env.strike"),
    Field::attr("last_y", "env.last_y"),
    Field::attr("last_x", "env.last_x"),
    TIME,
    TERMINAL,
];

const FREEWAY: &[Field] = &[
    Field::attr("pos", "env.pos"),
    Field::attr("cars", "env.cars"),
    Field::attr("move_timer", "env.move_timer"),
    Field::attr("terminate_timer", "env.terminate_timer"),
    TIME,
    TERMINAL,
];

// Not mapped yet: Seaquest translates to an empty record.
const SEAQUEST: &[Field] = &[];

const SPACE_INVADERS: &[Field] = &[
    Field::attr("pos", "env.pos"),
    Field::attr("f_bullet_map", "env.f_bullet_map"),
    Field::attr("e_bullet_map", "env.e_bullet_map"),
    Field::attr("alien_map", "env.alien_map"),
    Field::attr("alien_dir", "env.alien_dir"),
    Field::attr("enemy_move_interval", "env.enemy_move_interval"),
    Field::attr("alien_move_timer", "env.alien_move_timer"),
    Field::attr("alien_shot_timer", "env.alien_shot_timer"),
    Field::attr("ramp_index", "env.ramp_index"),
    Field::attr("shot_timer", "env.shot_timer"),
    Field::attr("ramping", "env.ramping"),
    TIME,
    TERMINAL,
];

impl ArcadeGrid {
    pub const ALL: [Self; 5] = [
        Self::Asterix,
        Self::Breakout,
        Self::Freeway,
        Self::Seaquest,
        Self::SpaceInvaders,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asterix => "Asterix-MinAtar",
            Self::Breakout => "Breakout-MinAtar",
            Self::Freeway => "Freeway-MinAtar",
            Self::Seaquest => "Seaquest-MinAtar",
            Self::SpaceInvaders => "SpaceInvaders-MinAtar",
        }
    }

    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::Asterix => ASTERIX,
            Self::Breakout => BREAKOUT,
            Self::Freeway => FREEWAY,
            Self::Seaquest => SEAQUEST,
            Self::SpaceInvaders => SPACE_INVADERS,
        }
    }
}
