//! Move identity and usage counting

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The shared fallback move every pokemon knows
pub const STRUGGLE: &str = "Struggle";

/// A move and how many times it was used in battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    /// Canonical name, space/hyphen form (e.g. "Icy Wind", "U-turn")
    pub name: String,
    /// Times the move was used
    pub times_used: u32,
}

impl Move {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            times_used: 0,
        }
    }

    pub fn increment_count(&mut self) {
        self.times_used += 1;
    }
}

/// Canonicalize a packed team-sheet move token.
///
/// Open Team Sheet records concatenate move words with no separator
/// ("DragonEnergy"). The generic rule inserts a space at every
/// lowercase-to-uppercase boundary; a few hyphenated names the rule cannot
/// derive are special-cased. Already-canonical names pass through unchanged.
pub fn canonical_move_name(raw: &str) -> String {
    match raw {
        "FreezeDry" => return "Freeze-Dry".to_string(),
        "WillOWisp" => return "Will-O-Wisp".to_string(),
        "Uturn" => return "U-turn".to_string(),
        _ => {}
    }

    let mut name = String::with_capacity(raw.len() + 2);
    let mut prev_lowercase = false;

    for c in raw.chars() {
        if prev_lowercase && c.is_ascii_uppercase() {
            name.push(' ');
        }
        prev_lowercase = c.is_ascii_lowercase();
        name.push(c);
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_splits_word_runs() {
        assert_eq!(canonical_move_name("DragonEnergy"), "Dragon Energy");
        assert_eq!(canonical_move_name("BleakwindStorm"), "Bleakwind Storm");
        assert_eq!(canonical_move_name("IcyWind"), "Icy Wind");
        assert_eq!(canonical_move_name("Protect"), "Protect");
    }

    #[test]
    fn test_canonical_exceptions() {
        assert_eq!(canonical_move_name("FreezeDry"), "Freeze-Dry");
        assert_eq!(canonical_move_name("WillOWisp"), "Will-O-Wisp");
        assert_eq!(canonical_move_name("Uturn"), "U-turn");
    }

    #[test]
    fn test_canonical_idempotent() {
        for name in ["Dragon Energy", "Freeze-Dry", "Will-O-Wisp", "U-turn", "Protect"] {
            assert_eq!(canonical_move_name(name), name);
        }
    }

    #[test]
    fn test_increment_count() {
        let mut m = Move::new("Thunderbolt");
        m.increment_count();
        m.increment_count();

        assert_eq!(m.times_used, 2);
    }
}
