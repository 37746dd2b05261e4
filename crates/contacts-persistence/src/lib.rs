pub mod blob;
pub mod constants;
pub mod contact;
pub mod db;

use std::path::Path;
use thiserror::Error;

/// Generic persistence result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic persistence error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error {0}")]
    Io(#[from] std::io::Error),

    #[error("SurrealDB connection error {0}")]
    SurrealConnection(#[from] surrealdb::Error),

    #[error("url error {0}")]
    Url(#[from] url::ParseError),

    #[error("Failed to insert into database: {0}")]
    InsertFailed(String),

    #[error("no such {0} entity {1}")]
    NoSuchEntity(String, String),

    #[error("invalid blob path: {0}")]
    InvalidBlobPath(String),
}

pub use blob::{BlobStoreApi, FileBlobStore};
pub use contact::ContactStoreApi;
pub use db::{SurrealDbConfig, contact::SurrealContactStore, get_surreal_db};

/// Returns the path of the given folder within the data dir, creating it if necessary
pub async fn file_storage_path(data_dir: &str, path: &str) -> Result<String> {
    let directory = format!("{}/{}", data_dir, path);
    if !Path::new(&directory).exists() {
        tokio::fs::create_dir_all(&directory).await?;
    }
    Ok(directory)
}
