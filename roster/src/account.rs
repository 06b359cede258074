//! Saving the roster to an external account
//!
//! No integration exists yet. `UnlinkedAccount` stands in for one and only
//! reports that to the user.

use serde::Serialize;
use tracing::warn;

use crate::components::Roster;
use crate::error::Result;

/// Notice shown when no account integration is configured
pub const UNLINKED_ACCOUNT_NOTICE: &str =
    "Save to Google Account functionality requires Google API integration.";

/// Outcome of an account save, surfaced to the user as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveNotice {
    pub saved: bool,
    pub message: String,
}

/// Capability to push a roster to a user's external account
pub trait AccountSaver: Send + Sync {
    fn save(&self, roster: &Roster) -> Result<SaveNotice>;
}

/// Account saver with no backing integration
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlinkedAccount;

impl AccountSaver for UnlinkedAccount {
    fn save(&self, roster: &Roster) -> Result<SaveNotice> {
        warn!(
            "Account save requested for {} members but no account integration is configured",
            roster.member_count()
        );
        Ok(SaveNotice {
            saved: false,
            message: UNLINKED_ACCOUNT_NOTICE.to_string(),
        })
    }
}
