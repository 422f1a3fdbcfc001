use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// The store always lives here, relative to the working directory.
pub const DATABASE_FILE: &str = "homework.db";

/// Loads `.env` when present. It can only tune logging through `RUST_LOG`.
pub fn load_environment() -> Result<(), dotenvy::Error> {
    load_env_file(Path::new(".env"))
}

pub fn load_env_file(path: &Path) -> Result<(), dotenvy::Error> {
    if !path.exists() {
        warn!("Environment file {} not found, skipping", path.display());
        return Ok(());
    }

    dotenvy::from_filename(path)?;
    info!("Loaded environment from: {}", path.display());
    Ok(())
}

pub fn database_path() -> PathBuf {
    PathBuf::from(DATABASE_FILE)
}
