use std::path::Path;

use tracing::info;

use crate::state::{AppState, DownloadResult};

/// The export document as text
pub fn export_document(state: &AppState) -> Result<String, String> {
    let store = state.lock_store()?;
    let bytes = store.export_as_document().map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

/// Write the export document into `dir` under the configured file name
pub fn download_data(state: &AppState, dir: &Path) -> Result<DownloadResult, String> {
    let path = dir.join(&state.config.export_file_name);
    let store = state.lock_store()?;
    let stats = store.save_to_file(&path).map_err(|e| e.to_string())?;

    info!("Download ready at {}", path.display());
    Ok(DownloadResult {
        path: path.display().to_string(),
        generations: stats.generations,
        members: stats.members,
        file_bytes: stats.file_bytes,
    })
}
