use crate::config::AppConfig;
use crate::state::{generation_options, AppState, GenerationOption};

pub fn get_config(state: &AppState) -> AppConfig {
    state.config.clone()
}

pub fn get_generation_options(state: &AppState) -> Vec<GenerationOption> {
    generation_options(&state.config)
}
