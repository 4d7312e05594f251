//! Replay interpretation for Pokemon Showdown battle logs.
//!
//! This crate reconstructs per-player battle data (team composition, move
//! usage, leads, brought-to-battle status, terastallization, winner) from a
//! raw battle log in a single ordered pass:
//!
//! ```text
//! raw text ──parse_log──> Commands ──ReplayInterpreter──> Replay
//!                                      │
//!                                      ├─ reveal_mode (Open Team Sheets?)
//!                                      ├─ showteam decoder (OTS path)
//!                                      └─ roster mutation (terascope-roster)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use terascope_replay::parse_replay;
//! use terascope_replay::source::{ReplaySource, resolve_source};
//!
//! let source = resolve_source("https://replay.pokemonshowdown.com/gen9vgc2024regg-1")?;
//! let log = source.retrieve("https://replay.pokemonshowdown.com/gen9vgc2024regg-1")?;
//! let replay = parse_replay(&log)?;
//! println!("winner: player {}", replay.winner);
//! # Ok::<(), anyhow::Error>(())
//! ```

use thiserror::Error;

pub mod batch;
pub mod interpreter;
pub mod model;
pub mod showteam;
pub mod source;

pub use batch::parse_replays;
pub use interpreter::{ReplayInterpreter, parse_replay, reveal_mode};
pub use model::{PlayerInfo, Replay};

use terascope_roster::RosterError;

/// Why a replay could not be parsed.
///
/// Both kinds are final for the replay at hand; there is no partial output.
/// Batch callers isolate failures per replay instead of aborting.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// A command referenced a pokemon the roster never revealed, or the log
    /// is truncated/structurally broken
    #[error("malformed battle log: {0}")]
    MalformedLog(String),

    /// More than 6 team members, or more than 4 distinct moves on one pokemon
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),
}

impl From<RosterError> for ReplayError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::TeamFull | RosterError::MoveSlotsFull { .. } => {
                ReplayError::CapacityExceeded(err.to_string())
            }
            RosterError::DuplicateSpecies(_) => ReplayError::MalformedLog(err.to_string()),
        }
    }
}
