//! Pokemon roster entry

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::moves::{Move, STRUGGLE};
use crate::{MAX_MOVES, RosterError};

/// One revealed pokemon and everything the log taught us about it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pokemon {
    /// Species name including forme (e.g. "Urshifu-Rapid-Strike"), set once
    pub species: String,
    /// Nickname, assigned on first switch-in
    pub nickname: Option<String>,
    /// Tera type, if revealed
    pub tera_type: Option<String>,
    /// Revealed moves in reveal order, unique by name, Struggle excluded
    pub moves: Vec<Move>,
    /// The shared fallback move, present from construction
    pub struggle: Move,
    /// Switched in at least once
    pub was_brought: bool,
    /// Present at battle start
    pub was_lead: bool,
    /// Terastallized during the battle
    pub was_terastallized: bool,
}

impl Pokemon {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            nickname: None,
            tera_type: None,
            moves: Vec::new(),
            struggle: Move::new(STRUGGLE),
            was_brought: false,
            was_lead: false,
            was_terastallized: false,
        }
    }

    /// Species text before the first hyphenated suffix ("Urshifu-Rapid-Strike" -> "Urshifu")
    pub fn base_species(&self) -> &str {
        base_form(&self.species)
    }

    /// Find a known move by exact canonical name.
    ///
    /// "Struggle" resolves to the shared sentinel.
    pub fn find_move(&mut self, name: &str) -> Option<&mut Move> {
        if name == STRUGGLE {
            return Some(&mut self.struggle);
        }
        self.moves.iter_mut().find(|m| m.name == name)
    }

    /// Attach a new move with zero uses.
    ///
    /// Fails if the pokemon already knows [`MAX_MOVES`] distinct moves.
    /// Attaching "Struggle" is a no-op; the sentinel already exists.
    pub fn add_move(&mut self, name: impl Into<String>) -> Result<(), RosterError> {
        let name = name.into();
        if name == STRUGGLE {
            return Ok(());
        }
        if self.moves.len() == MAX_MOVES {
            return Err(RosterError::MoveSlotsFull {
                species: self.species.clone(),
            });
        }
        self.moves.push(Move::new(name));
        Ok(())
    }

    /// Record one use of a move, creating it first if it was not yet revealed.
    pub fn use_move(&mut self, name: &str) -> Result<(), RosterError> {
        if self.find_move(name).is_none() {
            self.add_move(name)?;
        }
        // The sentinel and freshly added moves are both reachable now
        if let Some(m) = self.find_move(name) {
            m.increment_count();
        }
        Ok(())
    }
}

/// Text before the first hyphen
pub(crate) fn base_form(name: &str) -> &str {
    name.split('-').next().unwrap_or(name)
}
