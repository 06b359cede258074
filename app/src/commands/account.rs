use roster::SaveNotice;

use crate::state::AppState;

pub fn save_to_account(state: &AppState) -> Result<SaveNotice, String> {
    let store = state.lock_store()?;
    state.account.save(store.get_all()).map_err(|e| e.to_string())
}
