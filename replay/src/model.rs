//! Assembled, immutable replay result

use serde::{Deserialize, Serialize};
use terascope_roster::{Pokemon, Team};

/// One player's reconstructed battle data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Username bound from the log
    pub player_name: String,
    /// Full revealed team, reveal order
    pub team: Team,
    /// Species switched in at least once, first-appearance order
    pub brought_to_battle: Vec<String>,
    /// Species of the terastallized pokemon, if any
    pub tera_species: Option<String>,
    /// Whether this player won
    pub is_winner: bool,
}

impl PlayerInfo {
    /// The pokemon present at battle start: brought-to-battle truncated to
    /// the two lead slots of the doubles convention. Fewer than two entries
    /// is valid but incomplete.
    pub fn leads(&self) -> &[String] {
        &self.brought_to_battle[..self.brought_to_battle.len().min(2)]
    }

    /// The terastallized pokemon, resolved against the team
    pub fn tera_pokemon(&self) -> Option<&Pokemon> {
        let species = self.tera_species.as_deref()?;
        self.team.members().iter().find(|p| p.species == species)
    }
}

/// A fully parsed replay. Frozen once assembled; no field mutates afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub player1_info: PlayerInfo,
    pub player2_info: PlayerInfo,
    /// 1 or 2
    pub winner: u8,
    /// Whether the log used the Open Team Sheets regime
    pub is_ots: bool,
}

impl Replay {
    /// The winning player's info
    pub fn winner_info(&self) -> &PlayerInfo {
        if self.winner == 2 {
            &self.player2_info
        } else {
            &self.player1_info
        }
    }
}
