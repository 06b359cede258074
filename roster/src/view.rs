//! Pure presentation rules shared by every front end

use serde::Serialize;

/// Heading for a generation key: "generation2" -> "Generation 2".
/// Only the first occurrence is replaced; other keys pass through.
pub fn generation_title(key: &str) -> String {
    key.replacen("generation", "Generation ", 1)
}

/// Colour family a member card is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTone {
    Blue,
    Pink,
}

impl CardTone {
    /// Blue when the role mentions "father" or "son" in any case
    pub fn for_role(role: &str) -> Self {
        let role = role.to_lowercase();
        if role.contains("father") || role.contains("son") {
            CardTone::Blue
        } else {
            CardTone::Pink
        }
    }
}
