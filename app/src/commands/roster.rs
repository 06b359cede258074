use roster::NewMemberForm;

use crate::state::{roster_view, AppState, GenerationView, MemberCard};

pub fn get_roster(state: &AppState) -> Result<Vec<GenerationView>, String> {
    let store = state.lock_store()?;
    Ok(roster_view(store.get_all()))
}

pub fn get_member(state: &AppState, member_id: &str) -> Result<Option<MemberCard>, String> {
    let store = state.lock_store()?;
    Ok(store.member(member_id).map(MemberCard::from))
}

/// Submit the add-member form. The form is cleared only when the member
/// was added.
pub fn add_member(state: &AppState, form: &mut NewMemberForm) -> Result<MemberCard, String> {
    let mut store = state.lock_store()?;
    let member = form.submit(&mut store).map_err(|e| e.to_string())?;
    Ok(MemberCard::from(&member))
}
