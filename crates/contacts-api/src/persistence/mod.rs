use crate::Config;
use contacts_persistence::{
    BlobStoreApi, ContactStoreApi, FileBlobStore, SurrealContactStore, SurrealDbConfig,
    constants::BLOBS_FOLDER, get_surreal_db,
};
use std::sync::Arc;


/// A container for all persistence related dependencies.
#[derive(Clone)]
pub struct DbContext {
    pub contact_store: Arc<dyn ContactStoreApi>,
    pub blob_store: Arc<dyn BlobStoreApi>,
}

/// Creates a new instance of the DbContext with the given SurrealDB configuration.
pub async fn get_db_context(conf: &Config) -> contacts_persistence::Result<DbContext> {
    let surreal_db_config = SurrealDbConfig {
        connection_string: conf.surreal_db_connection.to_owned(),
        namespace: conf.surreal_namespace.to_owned(),
        database: conf.surreal_database.to_owned(),
    };
    let db = get_surreal_db(&surreal_db_config).await?;

    let contact_store = Arc::new(SurrealContactStore::new(db, &conf.contacts_collection));
    let blob_store = Arc::new(
        FileBlobStore::new(&conf.data_dir, BLOBS_FOLDER, &conf.public_files_url).await?,
    );

    Ok(DbContext {
        contact_store,
        blob_store,
    })
}
