//! Family Roster Store - owns the roster and mediates every read and write

use tracing::{debug, info};

use crate::components::{Member, Roster, PLACEHOLDER_IMAGE};
use crate::error::{Result, RosterError};
use crate::seed;

pub struct RosterStore {
    roster: Roster,
    next_member_id: u64,
    placeholder_image: String,
}

impl RosterStore {
    /// Empty store
    pub fn new() -> Self {
        Self::with_roster(Roster::new())
    }

    /// Store holding the initial family dataset
    pub fn seeded() -> Self {
        Self::with_roster(seed::initial_roster())
    }

    /// Adopt an existing roster. The id counter resumes past the largest
    /// numeric id already present so ids are never re-issued. An id of
    /// `u64::MAX` has no successor and is left to the collision check.
    pub fn with_roster(roster: Roster) -> Self {
        let next_member_id = roster
            .members()
            .filter_map(|member| member.id.parse::<u64>().ok())
            .filter(|&id| id < u64::MAX)
            .max()
            .map_or(1, |max| max + 1);

        Self {
            roster,
            next_member_id,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Image reference given to members created by this store
    pub fn with_placeholder_image(mut self, image_url: impl Into<String>) -> Self {
        self.placeholder_image = image_url.into();
        self
    }

    /// Add a member to the end of `generation`, creating the generation if
    /// it does not exist yet. Every field is required and stored trimmed;
    /// on error the roster is left untouched.
    pub fn add_member(
        &mut self,
        generation: &str,
        name: &str,
        role: &str,
        year_range: &str,
    ) -> Result<Member> {
        let generation = require("generation", generation)?;
        let name = require("name", name)?;
        let role = require("role", role)?;
        let year_range = require("yearRange", year_range)?;

        let id = self.allocate_id()?;
        let member = Member::new(id, name, role, year_range).with_image(&self.placeholder_image);
        self.roster.push(generation, member.clone());

        info!(
            "Added member {} ({}) to {}; roster now holds {} members",
            member.id,
            member.name,
            generation,
            self.roster.member_count()
        );
        Ok(member)
    }

    /// Read-only view of the live roster
    pub fn get_all(&self) -> &Roster {
        &self.roster
    }

    /// Owned copy of the roster as it is right now
    pub fn snapshot(&self) -> Roster {
        self.roster.clone()
    }

    /// Member details lookup
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.roster.find(id)
    }

    pub fn member_count(&self) -> usize {
        self.roster.member_count()
    }

    pub fn generation_count(&self) -> usize {
        self.roster.generation_count()
    }

    /// Next counter value not already used as an id in the roster
    fn allocate_id(&mut self) -> Result<String> {
        loop {
            let candidate = self.next_member_id.to_string();
            self.next_member_id = self
                .next_member_id
                .checked_add(1)
                .ok_or(RosterError::IdsExhausted)?;
            if !self.roster.contains_id(&candidate) {
                return Ok(candidate);
            }
            debug!("Skipping member id {} already present in roster", candidate);
        }
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RosterError::InvalidInput { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_member_appends_to_generation() {
        let mut store = RosterStore::seeded();
        let before = store.get_all().generation("generation2").unwrap().len();

        let member = store
            .add_member("generation2", "Zainab Raza", "Daughter", "2001 - Present")
            .unwrap();

        let members = store.get_all().generation("generation2").unwrap();
        assert_eq!(members.len(), before + 1);
        assert_eq!(members.last(), Some(&member));
        assert_eq!(member.image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_add_member_rejects_empty_fields() {
        let mut store = RosterStore::seeded();
        let before = store.snapshot();

        let cases = [
            ("", "Name", "Role", "Years", "generation"),
            ("generation1", "", "Role", "Years", "name"),
            ("generation1", "Name", "   ", "Years", "role"),
            ("generation1", "Name", "Role", "", "yearRange"),
        ];
        for (generation, name, role, years, expected) in cases {
            match store.add_member(generation, name, role, years) {
                Err(RosterError::InvalidInput { field }) => assert_eq!(field, expected),
                other => panic!("expected InvalidInput for {}, got {:?}", expected, other),
            }
        }

        assert_eq!(store.get_all(), &before);
    }

    #[test]
    fn test_ids_skip_existing_numeric_ids() {
        let mut roster = Roster::new();
        roster.push("generation1", Member::new("seed", "S", "Father", "1950 - Death"));
        let mut store = RosterStore::with_roster(roster);
        // Counter starts at 1 because no numeric ids exist
        let first = store.add_member("generation1", "A", "Son", "1980").unwrap();
        assert_eq!(first.id, "1");

        let mut roster = Roster::new();
        roster.push("generation1", Member::new("1730000000000", "T", "Mother", "1955"));
        let mut store = RosterStore::with_roster(roster);
        let next = store.add_member("generation1", "B", "Son", "1981").unwrap();
        assert_eq!(next.id, "1730000000001");
    }

    #[test]
    fn test_largest_possible_id_does_not_overflow() {
        let mut roster = Roster::new();
        roster.push("generation1", Member::new(u64::MAX.to_string(), "M", "Father", "1"));
        let mut store = RosterStore::with_roster(roster);

        let member = store.add_member("generation1", "B", "Son", "2").unwrap();
        assert_eq!(member.id, "1");
        assert_eq!(store.member_count(), 2);
    }

    #[test]
    fn test_exhausted_counter_is_an_error() {
        let mut store = RosterStore::seeded();
        store.next_member_id = u64::MAX;

        let err = store.add_member("generation1", "B", "Son", "2").unwrap_err();
        assert!(matches!(err, RosterError::IdsExhausted));
        assert_eq!(store.member_count(), 6);
    }

    #[test]
    fn test_add_member_trims_fields() {
        let mut store = RosterStore::new();
        let member = store
            .add_member(" generation2 ", "  Ada ", "Daughter\t", " 1815-1852 ")
            .unwrap();

        assert_eq!(member.name, "Ada");
        assert_eq!(member.role, "Daughter");
        assert_eq!(member.year_range, "1815-1852");
        assert_eq!(store.get_all().keys().collect::<Vec<_>>(), vec!["generation2"]);
    }

    #[test]
    fn test_custom_placeholder_image() {
        let mut store = RosterStore::new().with_placeholder_image("/avatar.png");
        let member = store.add_member("generation1", "A", "Son", "1980").unwrap();
        assert_eq!(member.image_url, "/avatar.png");
    }
}
