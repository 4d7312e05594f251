//! Showdown team export parsing.
//!
//! Turns the plain-text team format ("the text of a pokepaste") into a
//! pre-populated [`Team`]. This is the decklist counterpart to replay
//! interpretation and is entirely decoupled from it: usage tooling can
//! aggregate either source through the shared roster model.
//!
//! ```text
//! Sparky (Pikachu) (F) @ Light Ball
//! Ability: Static
//! Level: 50
//! Tera Type: Electric
//! - Thunderbolt
//! - Fake Out
//! ```

use terascope_roster::{Pokemon, RosterError, Team};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamParseError {
    #[error("export text contained no pokemon")]
    EmptyTeam,

    #[error("malformed team entry: {0}")]
    MalformedEntry(String),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Parse a full team export: blocks separated by blank lines, one pokemon
/// per block. Roster capacity and uniqueness invariants apply on insert.
pub fn parse_export(text: &str) -> Result<Team, TeamParseError> {
    let mut team = Team::new();

    for block in text.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
        team.add(parse_entry(block)?)?;
    }

    if team.is_empty() {
        return Err(TeamParseError::EmptyTeam);
    }
    Ok(team)
}

/// Parse one export block into a pokemon with zero-use moves
fn parse_entry(block: &str) -> Result<Pokemon, TeamParseError> {
    let mut lines = block.lines().map(str::trim);
    let header = lines
        .next()
        .ok_or_else(|| TeamParseError::MalformedEntry(block.to_string()))?;

    let (species, nickname) = parse_header(header)?;
    let mut pokemon = Pokemon::new(species);
    pokemon.nickname = Some(nickname);

    for line in lines {
        if let Some(move_name) = line.strip_prefix("- ") {
            pokemon.add_move(move_name.trim())?;
        } else if let Some(tera) = line.strip_prefix("Tera Type:") {
            pokemon.tera_type = Some(tera.trim().to_string());
        }
        // Ability / Level / EVs / IVs / Nature lines carry no roster state
    }

    Ok(pokemon)
}

/// Parse "Nickname (Species) (F) @ Item" down to (species, nickname); the
/// item and gender marker are not part of the roster model.
fn parse_header(header: &str) -> Result<(String, String), TeamParseError> {
    let mut name_part = header.split(" @ ").next().unwrap_or(header).trim();

    for gender in ["(M)", "(F)"] {
        if let Some(stripped) = name_part.strip_suffix(gender) {
            name_part = stripped.trim_end();
        }
    }

    if name_part.is_empty() {
        return Err(TeamParseError::MalformedEntry(header.to_string()));
    }

    match name_part.rsplit_once(" (") {
        Some((nickname, species)) => {
            let species = species
                .strip_suffix(')')
                .ok_or_else(|| TeamParseError::MalformedEntry(header.to_string()))?;
            Ok((species.to_string(), nickname.trim().to_string()))
        }
        None => Ok((name_part.to_string(), name_part.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
Magmar @ Eject Button
Ability: Vital Spirit
Level: 50
Tera Type: Grass
EVs: 252 HP / 4 SpA / 252 SpD
Calm Nature
- Protect
- Follow Me
- Helping Hand
- Flamethrower

Kingambit @ Black Glasses
Ability: Defiant
Level: 50
Tera Type: Dragon
- Kowtow Cleave
- Sucker Punch
- Iron Head
- Low Kick";

    #[test]
    fn test_parse_export() {
        let team = parse_export(EXPORT).unwrap();

        assert_eq!(team.len(), 2);
        let magmar = &team.members()[0];
        assert_eq!(magmar.species, "Magmar");
        assert_eq!(magmar.nickname.as_deref(), Some("Magmar"));
        assert_eq!(magmar.tera_type.as_deref(), Some("Grass"));
        let moves: Vec<&str> = magmar.moves.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(moves, ["Protect", "Follow Me", "Helping Hand", "Flamethrower"]);
        assert!(magmar.moves.iter().all(|m| m.times_used == 0));
    }

    #[test]
    fn test_parse_header_with_nickname_and_gender() {
        let block = "\
Sparky (Pikachu) (F) @ Light Ball
Ability: Static
Tera Type: Electric
- Thunderbolt";

        let pokemon = parse_entry(block).unwrap();

        assert_eq!(pokemon.species, "Pikachu");
        assert_eq!(pokemon.nickname.as_deref(), Some("Sparky"));
    }

    #[test]
    fn test_parse_header_without_item() {
        let pokemon = parse_entry("Tornadus (M)\n- Tailwind").unwrap();

        assert_eq!(pokemon.species, "Tornadus");
        assert_eq!(pokemon.nickname.as_deref(), Some("Tornadus"));
    }

    #[test]
    fn test_parse_export_empty_is_an_error() {
        assert!(matches!(parse_export("\n\n"), Err(TeamParseError::EmptyTeam)));
    }

    #[test]
    fn test_fifth_move_violates_capacity() {
        let block = "\
Magmar
- Protect
- Follow Me
- Helping Hand
- Flamethrower
- Fire Punch";

        assert!(matches!(
            parse_entry(block),
            Err(TeamParseError::Roster(RosterError::MoveSlotsFull { .. }))
        ));
    }
}
