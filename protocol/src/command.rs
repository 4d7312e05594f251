//! Command types shared by every stage of replay parsing
//!
//! A battle log line looks like `|TAG|FIELD1|FIELD2|...`. Commands form a
//! closed variant set; lines with a tag we do not track become
//! [`Command::Other`] and are ignored downstream.

use crate::ParseError;
use anyhow::Result;

/// Side in a two-player battle (p1, p2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(PlayerId::P1),
            "p2" => Some(PlayerId::P2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerId::P1 => "p1",
            PlayerId::P2 => "p2",
        }
    }
}

/// Pokemon position token in the form "POSITION: NICKNAME" (e.g., "p1a: Sparky")
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonRef {
    /// Side the pokemon belongs to
    pub player: PlayerId,
    /// Active slot letter (a or b in doubles)
    pub slot: Option<char>,
    /// Nickname as shown in the log
    pub nickname: String,
}

impl PokemonRef {
    /// Parse a position token like "p1a: Sparky" or "p2: Rocky"
    pub fn parse(s: &str) -> Option<Self> {
        let (pos_part, nickname) = s.split_once(": ")?;
        let player = PlayerId::parse(pos_part.get(..2)?)?;
        let slot = pos_part.chars().nth(2);

        Some(PokemonRef {
            player,
            slot,
            nickname: nickname.to_string(),
        })
    }
}

/// Pokemon details field (species, level, gender, tera)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PokemonDetails {
    pub species: String,
    pub level: Option<u8>,
    pub gender: Option<char>,
    pub tera_type: Option<String>,
}

impl PokemonDetails {
    /// Parse a details string like "Pikachu, L50, M" or "Ogerpon-Hearthflame-Tera, L50, F, tera:Fire"
    pub fn parse(s: &str) -> Self {
        let mut details = PokemonDetails::default();
        let parts: Vec<&str> = s.split(", ").collect();

        if let Some(species) = parts.first() {
            details.species = species.to_string();
        }

        for part in parts.iter().skip(1) {
            if let Some(level_str) = part.strip_prefix('L') {
                details.level = level_str.parse().ok();
            } else if *part == "M" {
                details.gender = Some('M');
            } else if *part == "F" {
                details.gender = Some('F');
            } else if let Some(tera) = part.strip_prefix("tera:") {
                details.tera_type = Some(tera.to_string());
            }
        }

        details
    }
}

/// One parsed battle log line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// |player|PLAYER|USERNAME|AVATAR|RATING
    Player { player: PlayerId, username: String },
    /// |poke|PLAYER|DETAILS|ITEM — incremental team reveal
    Poke {
        player: PlayerId,
        details: PokemonDetails,
    },
    /// |showteam|PLAYER|PACKED... — full team reveal (Open Team Sheets)
    ///
    /// The packed record reuses `|` as its internal delimiter, so the raw
    /// fields after the side are carried as-is for the decoder.
    ShowTeam {
        player: PlayerId,
        fields: Vec<String>,
    },
    /// |switch|POKEMON|DETAILS|HP STATUS
    Switch {
        pokemon: PokemonRef,
        details: PokemonDetails,
    },
    /// |move|POKEMON|MOVE|TARGET
    Move {
        pokemon: PokemonRef,
        move_name: String,
    },
    /// |-terastallize|POKEMON|TYPE
    Terastallize {
        pokemon: PokemonRef,
        tera_type: String,
    },
    /// |win|USERNAME
    Win(String),
    /// Any line we do not track
    Other(String),
}

/// Parse a single battle log line into a [`Command`]
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();

    if !line.contains('|') {
        return Ok(Command::Other(line.to_string()));
    }

    let parts: Vec<&str> = line.split('|').collect();

    if parts.len() < 2 {
        return Ok(Command::Other(line.to_string()));
    }

    match parts[1] {
        "player" => parse_player(&parts),
        "poke" => parse_poke(&parts),
        "showteam" => parse_showteam(&parts),
        "switch" | "drag" => parse_switch(&parts),
        "move" => parse_move(&parts),
        "-terastallize" => parse_terastallize(&parts),
        "win" => parse_win(&parts),
        _ => Ok(Command::Other(line.to_string())),
    }
}

/// Parse |player|PLAYER|USERNAME|AVATAR|RATING
fn parse_player(parts: &[&str]) -> Result<Command> {
    let player = parse_player_id(parts)?;
    let username = parts
        .get(3)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::MissingField("player username".to_string()))?
        .to_string();

    Ok(Command::Player { player, username })
}

/// Parse |poke|PLAYER|DETAILS|ITEM
fn parse_poke(parts: &[&str]) -> Result<Command> {
    let player = parse_player_id(parts)?;
    let details = parts
        .get(3)
        .map(|s| PokemonDetails::parse(s))
        .ok_or_else(|| ParseError::MissingField("poke details".to_string()))?;

    Ok(Command::Poke { player, details })
}

/// Parse |showteam|PLAYER|PACKED...
///
/// The packed team sheet chains records with `]` and reuses `|` internally,
/// so everything after the side field is kept verbatim.
fn parse_showteam(parts: &[&str]) -> Result<Command> {
    let player = parse_player_id(parts)?;

    if parts.len() < 4 {
        return Err(ParseError::MissingField("showteam record".to_string()).into());
    }

    let fields = parts[3..].iter().map(|s| s.to_string()).collect();

    Ok(Command::ShowTeam { player, fields })
}

/// Parse |switch|POKEMON|DETAILS|HP STATUS (also |drag|)
fn parse_switch(parts: &[&str]) -> Result<Command> {
    let pokemon = parse_pokemon_ref(parts)?;
    let details = parts
        .get(3)
        .map(|s| PokemonDetails::parse(s))
        .ok_or_else(|| ParseError::MissingField("switch details".to_string()))?;

    Ok(Command::Switch { pokemon, details })
}

/// Parse |move|POKEMON|MOVE|TARGET
fn parse_move(parts: &[&str]) -> Result<Command> {
    let pokemon = parse_pokemon_ref(parts)?;
    let move_name = parts
        .get(3)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::MissingField("move name".to_string()))?
        .to_string();

    Ok(Command::Move { pokemon, move_name })
}

/// Parse |-terastallize|POKEMON|TYPE
fn parse_terastallize(parts: &[&str]) -> Result<Command> {
    let pokemon = parse_pokemon_ref(parts)?;
    let tera_type = parts.get(3).unwrap_or(&"").to_string();

    Ok(Command::Terastallize { pokemon, tera_type })
}

/// Parse |win|USERNAME
fn parse_win(parts: &[&str]) -> Result<Command> {
    let user = parts
        .get(2)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::MissingField("winner name".to_string()))?
        .to_string();

    Ok(Command::Win(user))
}

fn parse_player_id(parts: &[&str]) -> Result<PlayerId> {
    parts
        .get(2)
        .and_then(|s| PlayerId::parse(s.get(..2).unwrap_or(s)))
        .ok_or_else(|| ParseError::InvalidFormat("invalid player side".to_string()).into())
}

fn parse_pokemon_ref(parts: &[&str]) -> Result<PokemonRef> {
    parts
        .get(2)
        .and_then(|s| PokemonRef::parse(s))
        .ok_or_else(|| ParseError::MissingField("pokemon position".to_string()).into())
}
