//! Team container with capacity and uniqueness invariants

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pokemon::{Pokemon, base_form};
use crate::{MAX_TEAM_SIZE, RosterError};

/// An ordered team of pokemon, insertion order = reveal order
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team {
    pokemon: Vec<Pokemon>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pokemon in reveal order.
    ///
    /// Fails when the team is full or the species is already present.
    pub fn add(&mut self, pokemon: Pokemon) -> Result<(), RosterError> {
        if self.pokemon.len() == MAX_TEAM_SIZE {
            return Err(RosterError::TeamFull);
        }
        if self.pokemon.iter().any(|p| p.species == pokemon.species) {
            return Err(RosterError::DuplicateSpecies(pokemon.species));
        }
        self.pokemon.push(pokemon);
        Ok(())
    }

    /// Find by exact species, falling back to the base form before a
    /// hyphenated suffix.
    ///
    /// The fallback handles forme changes the log reports under a different
    /// name than the reveal ("Ogerpon-Hearthflame-Tera" vs "Ogerpon"). With
    /// two teammates sharing a base species the first reveal wins; a
    /// pragmatic heuristic, not a guarantee.
    pub fn find_by_species(&mut self, species: &str) -> Option<&mut Pokemon> {
        if let Some(i) = self.pokemon.iter().position(|p| p.species == species) {
            return self.pokemon.get_mut(i);
        }
        let i = self
            .pokemon
            .iter()
            .position(|p| base_form(&p.species) == species)?;
        self.pokemon.get_mut(i)
    }

    /// Find by exact nickname, falling back to the nickname's base form.
    pub fn find_by_nickname(&mut self, nickname: &str) -> Option<&mut Pokemon> {
        let i = self.pokemon.iter().position(|p| {
            p.nickname
                .as_deref()
                .is_some_and(|n| n == nickname || base_form(n) == nickname)
        })?;
        self.pokemon.get_mut(i)
    }

    pub fn members(&self) -> &[Pokemon] {
        &self.pokemon
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_capacity() {
        let mut team = Team::new();
        for species in ["A", "B", "C", "D", "E", "F"] {
            team.add(Pokemon::new(species)).unwrap();
        }

        assert_eq!(team.add(Pokemon::new("G")), Err(RosterError::TeamFull));
    }

    #[test]
    fn test_team_rejects_duplicate_species() {
        let mut team = Team::new();
        team.add(Pokemon::new("Pikachu")).unwrap();

        assert_eq!(
            team.add(Pokemon::new("Pikachu")),
            Err(RosterError::DuplicateSpecies("Pikachu".into()))
        );
    }

    #[test]
    fn test_find_by_species_exact_before_base_form() {
        let mut team = Team::new();
        team.add(Pokemon::new("Ogerpon-Hearthflame")).unwrap();
        team.add(Pokemon::new("Urshifu-Rapid-Strike")).unwrap();

        assert_eq!(
            team.find_by_species("Ogerpon-Hearthflame").unwrap().species,
            "Ogerpon-Hearthflame"
        );
        // Forme suffix not present in the log line resolves via base form
        assert_eq!(
            team.find_by_species("Urshifu").unwrap().species,
            "Urshifu-Rapid-Strike"
        );
    }

    #[test]
    fn test_find_by_nickname() {
        let mut team = Team::new();
        let mut sparky = Pokemon::new("Pikachu");
        sparky.nickname = Some("Sparky".into());
        team.add(sparky).unwrap();

        assert!(team.find_by_nickname("Sparky").is_some());
        assert!(team.find_by_nickname("Rocky").is_none());
    }
}
