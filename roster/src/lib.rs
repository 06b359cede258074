//! Family Roster
//!
//! In-memory family tree grouped by generation: add members through a
//! form model, export the whole roster as a JSON document.

pub mod account;
pub mod components;
pub mod error;
pub mod form;
pub mod persistence;
pub mod seed;
pub mod store;
pub mod view;

pub use account::{AccountSaver, SaveNotice, UnlinkedAccount};
pub use components::{Member, Roster, PLACEHOLDER_IMAGE};
pub use error::{Result, RosterError};
pub use form::{NewMemberForm, DEFAULT_GENERATION, GENERATION_OPTIONS};
pub use persistence::{export_document, import_document, SaveStats, EXPORT_FILE_NAME};
pub use store::RosterStore;
pub use view::{generation_title, CardTone};
