use super::{Error, Result, file_storage_path};
use async_trait::async_trait;
use log::debug;
use std::path::{Component, Path, PathBuf};
use tokio::fs::{create_dir_all, read, write};
use url::Url;

/// Binary object store, addressed by slash separated relative paths
#[async_trait]
pub trait BlobStoreApi: Send + Sync {
    /// Writes the bytes to the given path, replacing an existing blob at that path
    async fn upload_blob(&self, path: &str, bytes: &[u8]) -> Result<()>;
    /// Returns the public url the blob at the given path can be retrieved from
    async fn get_public_url(&self, path: &str) -> Result<String>;
    /// Reads the blob at the given path
    async fn open_blob(&self, path: &str) -> Result<Vec<u8>>;
}

/// Stores blobs as files below a folder in the data dir. The public urls point to the
/// route serving that folder.
#[derive(Clone)]
pub struct FileBlobStore {
    folder: String,
    public_base_url: Url,
}

impl FileBlobStore {
    pub async fn new(data_dir: &str, path: &str, public_base_url: &str) -> Result<Self> {
        let folder = file_storage_path(data_dir, path).await?;
        let public_base_url = if public_base_url.ends_with('/') {
            Url::parse(public_base_url)?
        } else {
            Url::parse(&format!("{public_base_url}/"))?
        };
        Ok(Self {
            folder,
            public_base_url,
        })
    }

    pub fn get_path_for_blob(&self, path: &str) -> Result<PathBuf> {
        validate_blob_path(path)?;
        Ok(PathBuf::from(self.folder.as_str()).join(path))
    }
}

/// Blob paths have to stay within the blob folder
fn validate_blob_path(path: &str) -> Result<()> {
    if path.is_empty() || path.ends_with('/') {
        return Err(Error::InvalidBlobPath(path.to_owned()));
    }
    let valid = Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if !valid {
        return Err(Error::InvalidBlobPath(path.to_owned()));
    }
    Ok(())
}

#[async_trait]
impl BlobStoreApi for FileBlobStore {
    async fn upload_blob(&self, path: &str, bytes: &[u8]) -> Result<()> {
        let file_path = self.get_path_for_blob(path)?;
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                create_dir_all(parent).await?;
            }
        }
        write(&file_path, bytes).await?;
        debug!("stored blob {path} ({} bytes)", bytes.len());
        Ok(())
    }

    async fn get_public_url(&self, path: &str) -> Result<String> {
        let file_path = self.get_path_for_blob(path)?;
        if !file_path.exists() {
            return Err(Error::NoSuchEntity("blob".to_string(), path.to_owned()));
        }
        // each segment is percent-encoded, the file name itself is kept
        let mut url = self.public_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBlobPath(path.to_owned()))?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url.to_string())
    }

    async fn open_blob(&self, path: &str) -> Result<Vec<u8>> {
        let file_path = self.get_path_for_blob(path)?;
        match read(&file_path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::NoSuchEntity("blob".to_string(), path.to_owned()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
