pub mod account;
pub mod config;
pub mod export;
pub mod roster;

#[cfg(test)]
pub(crate) fn test_state() -> crate::state::AppState {
    crate::state::AppState::new(
        ::roster::RosterStore::seeded(),
        crate::config::AppConfig::default(),
        Box::new(::roster::UnlinkedAccount),
    )
}
