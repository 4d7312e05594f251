//! Open Team Sheets decoder
//!
//! A `|showteam|` command packs an entire team into one chained record with
//! no pokemon-count prefix:
//!
//! ```text
//! |showteam|p1|Species||Item|Ability|Move1,Move2,Move3,Move4|||G|||50|,,,,,Tera]NextSpecies||...
//! ```
//!
//! Records are chained with `]` inside the tera field, so the decoder walks
//! fixed-width field groups until no next species remains. The first group
//! is one field narrower than the rest because the side field already
//! consumed one slot; the width correction applies once, after the first
//! record.

use crate::ReplayError;
use terascope_roster::{MAX_MOVES, Pokemon, canonical_move_name};

// Field offsets within a record's remainder, before the one-field correction.
const MOVES_OFFSET: usize = 3;
const TERA_OFFSET: usize = 10;
const RECORD_WIDTH: usize = 12;

/// Decode every pokemon of one packed team sheet.
///
/// `fields` are the `|`-separated fields after the side field; the first is
/// the first species. Decoding stops at the first empty next-species chain
/// segment. Any structural problem (missing fields, more than 4 moves) is a
/// [`ReplayError::MalformedLog`]; this decoder never truncates silently.
pub fn decode_team_sheet(fields: &[String]) -> Result<Vec<Pokemon>, ReplayError> {
    let fields: Vec<&str> = fields.iter().map(String::as_str).collect();

    let mut next_species = fields
        .first()
        .copied()
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let mut rest: &[&str] = fields.get(1..).unwrap_or(&[]);
    let mut correction = 0;
    let mut team = Vec::new();

    while let Some(species) = next_species {
        let moves_field = record_field(rest, MOVES_OFFSET - correction, &species)?;
        let tera_field = record_field(rest, TERA_OFFSET - correction, &species)?;

        // The tera field's last comma segment carries "Tera]NextSpecies"
        let tail = tera_field.rsplit(',').next().unwrap_or(tera_field);
        let (tera_type, chained) = match tail.split_once(']') {
            Some((tera, next)) => (tera, Some(next)),
            None => (tail, None),
        };

        let mut pokemon = Pokemon::new(&species);
        pokemon.nickname = Some(pokemon.base_species().to_string());
        pokemon.tera_type = Some(tera_type.to_string()).filter(|t| !t.is_empty());

        let moves: Vec<&str> = moves_field.split(',').collect();
        if moves.len() > MAX_MOVES {
            return Err(ReplayError::MalformedLog(format!(
                "team sheet lists {} moves for {species}",
                moves.len()
            )));
        }
        for raw in moves.into_iter().filter(|m| !m.is_empty()) {
            pokemon
                .add_move(canonical_move_name(raw))
                .map_err(|e| ReplayError::MalformedLog(e.to_string()))?;
        }

        team.push(pokemon);

        next_species = chained.filter(|s| !s.is_empty()).map(str::to_string);
        rest = rest.get(RECORD_WIDTH - correction..).unwrap_or(&[]);
        correction = 1;
    }

    Ok(team)
}

fn record_field<'a>(rest: &[&'a str], offset: usize, species: &str) -> Result<&'a str, ReplayError> {
    rest.get(offset).copied().ok_or_else(|| {
        ReplayError::MalformedLog(format!("truncated team sheet record for {species}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(packed: &str) -> Vec<String> {
        packed.split('|').map(str::to_string).collect()
    }

    #[test]
    fn test_decode_single_record() {
        let team = decode_team_sheet(&fields(
            "Regidrago||DragonFang|DragonsMaw|DragonEnergy,DracoMeteor,EarthPower,Protect||||||50|,,,,,Steel",
        ))
        .unwrap();

        assert_eq!(team.len(), 1);
        let regidrago = &team[0];
        assert_eq!(regidrago.species, "Regidrago");
        assert_eq!(regidrago.nickname.as_deref(), Some("Regidrago"));
        assert_eq!(regidrago.tera_type.as_deref(), Some("Steel"));
        let names: Vec<&str> = regidrago.moves.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            ["Dragon Energy", "Draco Meteor", "Earth Power", "Protect"]
        );
    }

    #[test]
    fn test_decode_chained_records() {
        let team = decode_team_sheet(&fields(
            "Flutter Mane||BoosterEnergy|Protosynthesis|Protect,Moonblast,ShadowBall,DazzlingGleam||||||50|,,,,,Fairy]Tornadus||FocusSash|Prankster|Protect,BleakwindStorm,Tailwind,RainDance|||M|||50|,,,,,Ghost",
        ))
        .unwrap();

        assert_eq!(team.len(), 2);
        assert_eq!(team[0].species, "Flutter Mane");
        assert_eq!(team[0].tera_type.as_deref(), Some("Fairy"));
        assert_eq!(team[1].species, "Tornadus");
        assert_eq!(team[1].tera_type.as_deref(), Some("Ghost"));
        let names: Vec<&str> = team[1].moves.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            ["Protect", "Bleakwind Storm", "Tailwind", "Rain Dance"]
        );
    }

    #[test]
    fn test_decode_forme_nickname_defaults_to_base() {
        let team = decode_team_sheet(&fields(
            "Urshifu-Rapid-Strike||ChoiceScarf|UnseenFist|CloseCombat,SurgingStrikes,AquaJet,Uturn|||M|||50|,,,,,Water",
        ))
        .unwrap();

        assert_eq!(team[0].species, "Urshifu-Rapid-Strike");
        assert_eq!(team[0].nickname.as_deref(), Some("Urshifu"));
        assert_eq!(team[0].moves[3].name, "U-turn");
    }

    #[test]
    fn test_decode_every_pokemon_gets_four_moves_plus_struggle() {
        let team = decode_team_sheet(&fields(
            "Regidrago||DragonFang|DragonsMaw|DragonEnergy,DracoMeteor,EarthPower,Protect||||||50|,,,,,Steel",
        ))
        .unwrap();

        assert_eq!(team[0].moves.len(), 4);
        assert_eq!(team[0].struggle.name, "Struggle");
        assert_eq!(team[0].struggle.times_used, 0);
    }

    #[test]
    fn test_decode_rejects_overlong_move_list() {
        let result = decode_team_sheet(&fields(
            "Regidrago||DragonFang|DragonsMaw|A,B,C,D,E||||||50|,,,,,Steel",
        ));

        assert!(matches!(result, Err(ReplayError::MalformedLog(_))));
    }

    #[test]
    fn test_decode_truncated_record() {
        let result = decode_team_sheet(&fields("Regidrago||DragonFang"));

        assert!(matches!(result, Err(ReplayError::MalformedLog(_))));
    }
}
