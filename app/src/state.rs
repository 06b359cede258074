use roster::{generation_title, AccountSaver, CardTone, Member, Roster, RosterStore};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::AppConfig;

/// Application state shared by every command
pub struct AppState {
    pub store: Arc<Mutex<RosterStore>>,
    pub config: AppConfig,
    pub account: Box<dyn AccountSaver>,
}

impl AppState {
    pub fn new(
        store: RosterStore,
        config: AppConfig,
        account: Box<dyn AccountSaver>,
    ) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config,
            account,
        }
    }

    pub fn lock_store(&self) -> Result<MutexGuard<'_, RosterStore>, String> {
        self.store
            .lock()
            .map_err(|_| "roster store lock poisoned".to_string())
    }
}

// -- Serializable types returned by commands --

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberCard {
    pub id: String,
    pub name: String,
    pub role: String,
    pub year_range: String,
    pub image_url: String,
    pub tone: CardTone,
}

impl From<&Member> for MemberCard {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            role: member.role.clone(),
            year_range: member.year_range.clone(),
            image_url: member.image_url.clone(),
            tone: CardTone::for_role(&member.role),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GenerationView {
    pub key: String,
    pub title: String,
    pub members: Vec<MemberCard>,
}

/// Generations in display order, ready to draw
pub fn roster_view(roster: &Roster) -> Vec<GenerationView> {
    roster
        .generations()
        .map(|(key, members)| GenerationView {
            key: key.to_string(),
            title: generation_title(key),
            members: members.iter().map(MemberCard::from).collect(),
        })
        .collect()
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResult {
    pub path: String,
    pub generations: usize,
    pub members: usize,
    pub file_bytes: u64,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOption {
    pub value: String,
    pub label: String,
}

/// Options for the form's generation selector
pub fn generation_options(config: &AppConfig) -> Vec<GenerationOption> {
    config
        .generation_options
        .iter()
        .map(|key| GenerationOption {
            value: key.clone(),
            label: generation_title(key),
        })
        .collect()
}
