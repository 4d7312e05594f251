//! Team, Pokemon, and move usage model for Showdown replay analysis.
//!
//! This crate holds the in-memory roster entities that the replay
//! interpreter populates and that usage-statistics tooling consumes:
//!
//! ```text
//! terascope-protocol (wire format)
//!        │
//!        ▼
//! terascope-replay (interpreter) ──mutates──> terascope-roster ← THIS CRATE
//!        ▲
//! terascope-team (decklist import) ──builds──┘
//! ```
//!
//! # Invariants
//!
//! - A [`Team`] holds at most 6 pokemon, unique by species, in reveal order.
//! - A [`Pokemon`] holds at most 4 distinct moves, plus the shared
//!   "Struggle" sentinel that exists on every pokemon from construction and
//!   never counts against capacity.
//! - A [`BroughtLog`] records species in first-switch-in order and never
//!   duplicates on re-switch.

use thiserror::Error;

pub mod brought;
pub mod moves;
pub mod pokemon;
pub mod team;

pub use brought::BroughtLog;
pub use moves::{Move, STRUGGLE, canonical_move_name};
pub use pokemon::Pokemon;
pub use team::Team;

/// Maximum pokemon on one team
pub const MAX_TEAM_SIZE: usize = 6;

/// Maximum distinct moves on one pokemon, Struggle excluded
pub const MAX_MOVES: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("a team can hold at most {MAX_TEAM_SIZE} pokemon")]
    TeamFull,

    #[error("{species} already has {MAX_MOVES} moves")]
    MoveSlotsFull { species: String },

    #[error("duplicate species in team: {0}")]
    DuplicateSpecies(String),
}
