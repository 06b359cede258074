//! Add-member form model
//!
//! Holds what the user has typed so far. A successful submit hands the
//! fields to the store and clears the form; a rejected one keeps them.

use serde::{Deserialize, Serialize};

use crate::components::Member;
use crate::error::Result;
use crate::store::RosterStore;

/// Generation preselected in a fresh form
pub const DEFAULT_GENERATION: &str = "generation1";

/// Generations offered by the form's selector. The store accepts any key.
pub const GENERATION_OPTIONS: &[&str] = &["generation1", "generation2", "generation3", "generation4"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMemberForm {
    pub name: String,
    pub role: String,
    pub year_range: String,
    pub generation: String,
}

impl Default for NewMemberForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            year_range: String::new(),
            generation: DEFAULT_GENERATION.to_string(),
        }
    }
}

impl NewMemberForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every required field has content
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.role, &self.year_range, &self.generation]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add the member to `store`, clearing the form on success
    pub fn submit(&mut self, store: &mut RosterStore) -> Result<Member> {
        let member = store.add_member(&self.generation, &self.name, &self.role, &self.year_range)?;
        self.reset();
        Ok(member)
    }
}
