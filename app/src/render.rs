//! Plain-text rendering of the roster view for the terminal

use roster::CardTone;
use std::fmt::Write;

use crate::state::{GenerationView, MemberCard};

fn tone_marker(tone: CardTone) -> &'static str {
    match tone {
        CardTone::Blue => "[blue]",
        CardTone::Pink => "[pink]",
    }
}

pub fn render_card(card: &MemberCard) -> String {
    format!(
        "{} {} ({}) {}  #{}",
        tone_marker(card.tone),
        card.name,
        card.role,
        card.year_range,
        card.id
    )
}

pub fn render_roster(view: &[GenerationView]) -> String {
    let mut out = String::from("Family Tree\n");
    for generation in view {
        let _ = writeln!(out, "\n{}", generation.title);
        for card in &generation.members {
            let _ = writeln!(out, "  {}", render_card(card));
        }
    }
    out
}

/// Member details, as shown when a card is selected
pub fn render_details(card: &MemberCard) -> String {
    format!(
        "Member Details\n  {}\n  {}\n  {}\n  image: {}",
        card.name, card.role, card.year_range, card.image_url
    )
}
