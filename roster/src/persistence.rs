//! Export/import of the roster as a JSON document
//!
//! The document is the roster itself: top-level keys are generation keys in
//! roster order, each holding its ordered list of members. It is written
//! pretty-printed with two-space indentation.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::components::Roster;
use crate::error::{Result, RosterError};
use crate::store::RosterStore;

/// File name the export is offered under
pub const EXPORT_FILE_NAME: &str = "family-tree.json";

/// Serialize a roster to the export document
pub fn export_document(roster: &Roster) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec_pretty(roster)?;
    debug!(
        "Exported {} generations / {} members ({} bytes)",
        roster.generation_count(),
        roster.member_count(),
        bytes.len()
    );
    Ok(bytes)
}

/// Parse an export document back into a roster.
/// Member ids must be unique across the whole document.
pub fn import_document(bytes: &[u8]) -> Result<Roster> {
    let roster: Roster = serde_json::from_slice(bytes)?;

    let mut seen = HashSet::new();
    for member in roster.members() {
        if !seen.insert(member.id.as_str()) {
            return Err(RosterError::DuplicateId(member.id.clone()));
        }
    }

    Ok(roster)
}

/// Result of writing the export document to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveStats {
    pub generations: usize,
    pub members: usize,
    pub file_bytes: u64,
}

impl RosterStore {
    /// Export the full roster as it is at call time
    pub fn export_as_document(&self) -> Result<Vec<u8>> {
        export_document(self.get_all())
    }

    /// Build a store from a previously exported document
    pub fn from_document(bytes: &[u8]) -> Result<Self> {
        Ok(Self::with_roster(import_document(bytes)?))
    }

    /// Write the export document to `path`.
    /// The bytes go to a temporary sibling first and are renamed over the
    /// target; on any failure the temporary file is removed and an existing
    /// target is left as it was.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<SaveStats> {
        let path = path.as_ref();
        let bytes = self.export_as_document()?;

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = Path::new(&tmp_name);

        let written = fs::write(tmp_path, &bytes).and_then(|()| fs::rename(tmp_path, path));
        if let Err(err) = written {
            if tmp_path.exists() {
                if let Err(cleanup_err) = fs::remove_file(tmp_path) {
                    warn!("Failed to remove {}: {}", tmp_path.display(), cleanup_err);
                }
            }
            return Err(err.into());
        }

        let stats = SaveStats {
            generations: self.generation_count(),
            members: self.member_count(),
            file_bytes: bytes.len() as u64,
        };
        info!(
            "Saved {} members in {} generations to {} ({} bytes)",
            stats.members,
            stats.generations,
            path.display(),
            stats.file_bytes
        );
        Ok(stats)
    }

    /// Load a store from an export document on disk
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let store = Self::from_document(&bytes)?;
        info!(
            "Loaded {} members in {} generations from {}",
            store.member_count(),
            store.generation_count(),
            path.display()
        );
        Ok(store)
    }
}
