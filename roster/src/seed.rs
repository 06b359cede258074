//! Initial family dataset loaded at session start

use crate::components::{Member, Roster};

/// (generation, id, name, role, year range)
const INITIAL_FAMILY_MEMBERS: &[(&str, &str, &str, &str, &str)] = &[
    ("generation1", "grandfather", "Akhter Hussain", "Grandfather", "1984 - Death"),
    ("generation1", "grandmother", "Shakira Bibi", "Grandmother", "1960 - Death"),
    ("generation2", "father", "S.Qasim Raza", "Father", "2020 1st July - Death"),
    ("generation2", "mother", "Sakina Raza", "Mother", "2024 6th June - Present"),
    ("generation3", "child1", "Syed Mohammad Raza Rizvi", "Son", "1974 - Present"),
    (
        "generation3",
        "child2",
        "Sobia Fatima",
        "Wife of Syed Mohammad Raza Rizvi",
        "1983 - Present",
    ),
];

/// Build the seeded roster: three generations, two members each
pub fn initial_roster() -> Roster {
    let mut roster = Roster::new();
    for &(generation, id, name, role, year_range) in INITIAL_FAMILY_MEMBERS {
        roster.push(generation, Member::new(id, name, role, year_range));
    }
    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PLACEHOLDER_IMAGE;

    #[test]
    fn test_initial_roster_shape() {
        let roster = initial_roster();

        let keys: Vec<&str> = roster.keys().collect();
        assert_eq!(keys, vec!["generation1", "generation2", "generation3"]);
        for (_, members) in roster.generations() {
            assert_eq!(members.len(), 2);
        }
        assert!(roster.members().all(|m| m.image_url == PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_initial_roster_is_verbatim() {
        let roster = initial_roster();
        let father = roster.find("father").unwrap();
        assert_eq!(father.name, "S.Qasim Raza");
        assert_eq!(father.year_range, "2020 1st July - Death");

        let second = &roster.generation("generation3").unwrap()[1];
        assert_eq!(second.id, "child2");
        assert_eq!(second.role, "Wife of Syed Mohammad Raza Rizvi");
    }
}
