//! Roster data model
//!
//! A roster is an ordered mapping from generation key to the members shown
//! in that generation. Both levels keep insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Image reference given to every member until a real picture exists
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=120&width=120";

// ============================================================================
// Member
// ============================================================================

/// One person's record. Field order is the serialized field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    /// Relationship descriptor, e.g. "Father"
    pub role: String,
    /// Free text life span or status, e.g. "1960 - Death"
    pub year_range: String,
    pub image_url: String,
}

impl Member {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        year_range: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            year_range: year_range.into(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}

// ============================================================================
// Roster
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    generations: IndexMap<String, Vec<Member>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generations in display order (first use of each key)
    pub fn generations(&self) -> impl Iterator<Item = (&str, &[Member])> {
        self.generations
            .iter()
            .map(|(key, members)| (key.as_str(), members.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.generations.keys().map(String::as_str)
    }

    pub fn generation(&self, key: &str) -> Option<&[Member]> {
        self.generations.get(key).map(Vec::as_slice)
    }

    pub fn generation_count(&self) -> usize {
        self.generations.len()
    }

    /// Total number of members across all generations
    pub fn member_count(&self) -> usize {
        self.generations.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.member_count() == 0
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.generations.values().flatten()
    }

    pub fn find(&self, id: &str) -> Option<&Member> {
        self.members().find(|member| member.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Append to the end of a generation, creating the bucket on first use.
    /// Id uniqueness is the caller's job.
    pub(crate) fn push(&mut self, generation: &str, member: Member) {
        self.generations
            .entry(generation.to_string())
            .or_default()
            .push(member);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_creates_bucket_lazily() {
        let mut roster = Roster::new();
        assert!(roster.generation("generation2").is_none());

        roster.push("generation2", Member::new("a", "A", "Son", "2000 - Present"));
        roster.push("generation1", Member::new("b", "B", "Father", "1970 - Present"));
        roster.push("generation2", Member::new("c", "C", "Daughter", "2002 - Present"));

        let keys: Vec<&str> = roster.keys().collect();
        assert_eq!(keys, vec!["generation2", "generation1"]);
        let ids: Vec<&str> = roster
            .generation("generation2")
            .unwrap()
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(roster.member_count(), 3);
    }

    #[test]
    fn test_member_serializes_camel_case_in_order() {
        let member = Member::new("7", "Ada Lovelace", "Daughter", "1815-1852");
        let json = serde_json::to_string(&member).unwrap();
        assert_eq!(
            json,
            r#"{"id":"7","name":"Ada Lovelace","role":"Daughter","yearRange":"1815-1852","imageUrl":"/placeholder.svg?height=120&width=120"}"#
        );
    }

    #[test]
    fn test_find_searches_every_generation() {
        let mut roster = Roster::new();
        roster.push("generation1", Member::new("x", "X", "Mother", "1950 - Death"));
        roster.push("generation3", Member::new("y", "Y", "Son", "2010 - Present"));

        assert_eq!(roster.find("y").map(|m| m.name.as_str()), Some("Y"));
        assert!(roster.contains_id("x"));
        assert!(!roster.contains_id("z"));
    }
}
