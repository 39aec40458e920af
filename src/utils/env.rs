// src/utils/env.rs
use log::{debug, info};
use std::path::Path;

/// Load variables from a `.env` file if one is present. Variables that are
/// already set in the process environment win over the file.
pub fn load_env() {
    match dotenv::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }
}

/// Load variables from an explicit file, e.g. passed on the command line.
pub fn load_env_from(path: &Path) -> anyhow::Result<()> {
    dotenv::from_path(path)
        .map_err(|e| anyhow::anyhow!("Failed to load env file {}: {}", path.display(), e))?;
    info!("Loaded environment from {}", path.display());
    Ok(())
}
