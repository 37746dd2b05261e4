use anyhow::{Result, anyhow};
use std::sync::OnceLock;

pub mod constants;
pub mod contacts;
pub mod data;
mod persistence;
pub mod service;
#[cfg(test)]
mod tests;
pub mod util;

pub use persistence::DbContext;
pub use persistence::get_db_context;

#[derive(Debug, Clone)]
pub struct Config {
    pub surreal_db_connection: String,
    pub surreal_namespace: String,
    pub surreal_database: String,
    /// The document collection the contacts are stored in
    pub contacts_collection: String,
    pub data_dir: String,
    /// The base url uploaded blobs are publicly served from
    pub public_files_url: String,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn init(conf: Config) -> Result<()> {
    CONFIG
        .set(conf)
        .map_err(|e| anyhow!("Could not initialize Contacts API: {e:?}"))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Contacts API is not initialized")
}
