//! Replay interpretation state machine
//!
//! Consumes [`Command`]s in log order and mutates one roster/brought-log
//! pair per side, plus the player-name and winner bindings. Any reference to
//! a pokemon must be preceded by the command that created its roster entry;
//! a dangling reference fails the whole parse.

use terascope_protocol::{Command, PlayerId, parse_log};
use terascope_roster::{BroughtLog, Pokemon, Team};
use tracing::debug;

use crate::ReplayError;
use crate::model::{PlayerInfo, Replay};
use crate::showteam::decode_team_sheet;

/// Everything tracked for one side during the scan
#[derive(Debug, Default)]
struct SideState {
    name: Option<String>,
    team: Team,
    brought: BroughtLog,
    /// Species of the terastallized pokemon. One per side is expected; a
    /// re-occurrence overwrites, matching observed logs.
    tera_species: Option<String>,
}

/// Single-pass state machine over an ordered command sequence
#[derive(Debug)]
pub struct ReplayInterpreter {
    sides: [SideState; 2],
    winner_name: Option<String>,
    is_ots: bool,
}

/// Whether the log discloses teams via Open Team Sheets.
///
/// Decided once, over the whole command sequence, before interpretation:
/// the regime gates which of the two team-population commands is honored.
pub fn reveal_mode(commands: &[Command]) -> bool {
    commands
        .iter()
        .any(|c| matches!(c, Command::ShowTeam { .. }))
}

impl ReplayInterpreter {
    pub fn new(is_ots: bool) -> Self {
        Self {
            sides: [SideState::default(), SideState::default()],
            winner_name: None,
            is_ots,
        }
    }

    /// Apply one command. Unrecognized commands are no-ops.
    pub fn apply(&mut self, command: &Command) -> Result<(), ReplayError> {
        match command {
            Command::Player { player, username } => {
                // First binding for a side wins
                let side = self.side_mut(*player);
                if side.name.is_none() {
                    side.name = Some(username.clone());
                }
            }

            Command::Poke { player, details } => {
                // Incremental reveal; superseded entirely by the team sheet
                if self.is_ots {
                    return Ok(());
                }
                self.side_mut(*player)
                    .team
                    .add(Pokemon::new(&details.species))?;
            }

            Command::ShowTeam { player, fields } => {
                if !self.is_ots {
                    return Ok(());
                }
                let side = self.side_mut(*player);
                for pokemon in decode_team_sheet(fields)? {
                    side.team.add(pokemon)?;
                }
            }

            Command::Switch { pokemon, details } => {
                // Terastallized formes report under a "-Tera" suffixed species
                let species = details
                    .species
                    .split("-Tera")
                    .next()
                    .unwrap_or(&details.species);
                let side = self.side_mut(pokemon.player);
                let entry = side.team.find_by_species(species).ok_or_else(|| {
                    ReplayError::MalformedLog(format!("switch-in of unknown species {species}"))
                })?;
                entry.nickname = Some(pokemon.nickname.clone());
                let species = entry.species.clone();
                side.brought.record(&species);
            }

            Command::Move { pokemon, move_name } => {
                self.resolve_nickname(pokemon.player, &pokemon.nickname)?
                    .use_move(move_name)?;
            }

            Command::Terastallize { pokemon, tera_type } => {
                let entry = self.resolve_nickname(pokemon.player, &pokemon.nickname)?;
                entry.was_terastallized = true;
                if entry.tera_type.is_none() && !tera_type.is_empty() {
                    entry.tera_type = Some(tera_type.clone());
                }
                let species = entry.species.clone();
                self.side_mut(pokemon.player).tera_species = Some(species);
            }

            Command::Win(name) => {
                self.winner_name = Some(name.clone());
            }

            Command::Other(_) => {}
        }

        Ok(())
    }

    /// Derive the final bindings and freeze the result.
    ///
    /// Requires both player names and a winner; anything less is a
    /// truncated log.
    pub fn finish(self) -> Result<Replay, ReplayError> {
        let winner_name = self
            .winner_name
            .ok_or_else(|| ReplayError::MalformedLog("log ended without a winner".into()))?;

        let [side1, side2] = self.sides;
        let player2_name = side2
            .name
            .as_deref()
            .ok_or_else(|| ReplayError::MalformedLog("player 2 was never bound".into()))?;
        let winner = if winner_name == player2_name { 2 } else { 1 };

        Ok(Replay {
            player1_info: assemble_side(side1, &winner_name)?,
            player2_info: assemble_side(side2, &winner_name)?,
            winner,
            is_ots: self.is_ots,
        })
    }

    fn side_mut(&mut self, player: PlayerId) -> &mut SideState {
        match player {
            PlayerId::P1 => &mut self.sides[0],
            PlayerId::P2 => &mut self.sides[1],
        }
    }

    fn resolve_nickname(
        &mut self,
        player: PlayerId,
        nickname: &str,
    ) -> Result<&mut Pokemon, ReplayError> {
        self.side_mut(player)
            .team
            .find_by_nickname(nickname)
            .ok_or_else(|| {
                ReplayError::MalformedLog(format!("reference to unknown nickname {nickname}"))
            })
    }
}

fn assemble_side(mut side: SideState, winner_name: &str) -> Result<PlayerInfo, ReplayError> {
    let player_name = side
        .name
        .take()
        .ok_or_else(|| ReplayError::MalformedLog("player was never bound".into()))?;

    for (i, species) in side.brought.species().iter().enumerate() {
        // Brought species came from the roster, so the lookup cannot miss
        if let Some(pokemon) = side.team.find_by_species(species) {
            pokemon.was_brought = true;
            pokemon.was_lead = i < 2;
        }
    }

    let is_winner = player_name == winner_name;
    Ok(PlayerInfo {
        player_name,
        team: side.team,
        brought_to_battle: side.brought.species().to_vec(),
        tera_species: side.tera_species,
        is_winner,
    })
}

/// Parse one raw battle log into a [`Replay`] in a single synchronous pass.
pub fn parse_replay(log: &str) -> Result<Replay, ReplayError> {
    let commands = parse_log(log).map_err(|e| ReplayError::MalformedLog(e.to_string()))?;

    let is_ots = reveal_mode(&commands);
    debug!(is_ots, commands = commands.len(), "interpreting battle log");

    let mut interpreter = ReplayInterpreter::new(is_ots);
    for command in &commands {
        interpreter.apply(command)?;
    }
    interpreter.finish()
}
