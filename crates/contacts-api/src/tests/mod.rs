#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use crate::{
        Config, get_db_context,
        service::{ServiceContext, create_service_context},
    };
    use async_trait::async_trait;
    use contacts_core::{
        Contact, ContactDraft, ContactFields, PickedFile, util::get_uuid_v4,
    };
    use contacts_persistence::{BlobStoreApi, ContactStoreApi, Result};

    // Need to wrap mocks, because traits are in a different crate
    mockall::mock! {
        pub ContactStoreApiMock {}

        #[async_trait]
        impl ContactStoreApi for ContactStoreApiMock {
            async fn create(&self, fields: &ContactFields) -> Result<String>;
            async fn list(&self) -> Result<Vec<Contact>>;
            async fn update(&self, id: &str, fields: &ContactFields) -> Result<()>;
        }
    }

    mockall::mock! {
        pub BlobStoreApiMock {}

        #[async_trait]
        impl BlobStoreApi for BlobStoreApiMock {
            async fn upload_blob(&self, path: &str, bytes: &[u8]) -> Result<()>;
            async fn get_public_url(&self, path: &str) -> Result<String>;
            async fn open_blob(&self, path: &str) -> Result<Vec<u8>>;
        }
    }

    pub const TEST_PUBLIC_URL: &str = "http://127.0.0.1:8000/api/files/";

    /// PNG signature followed by the start of an IHDR chunk
    pub const TEST_PNG_BYTES: [u8; 16] = [
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52,
    ];

    /// A config with an in-memory database and a fresh data dir below the temp dir
    pub fn test_config() -> Config {
        let data_dir = std::env::temp_dir().join(format!("contacts_api_{}", get_uuid_v4()));
        Config {
            surreal_db_connection: "mem://".to_string(),
            surreal_namespace: "test".to_string(),
            surreal_database: "contacts".to_string(),
            contacts_collection: "contacts".to_string(),
            data_dir: data_dir.to_string_lossy().to_string(),
            public_files_url: TEST_PUBLIC_URL.to_string(),
        }
    }

    /// A service context over real stores, each call gets its own database and blob folder
    pub async fn get_test_service_context() -> ServiceContext {
        let config = test_config();
        let db = get_db_context(&config)
            .await
            .expect("could not create test db context");
        create_service_context(db)
    }

    pub fn test_draft() -> ContactDraft {
        ContactDraft {
            id: None,
            name: "Ann".to_string(),
            last_contact_date: "2024-01-05".to_string(),
            profile_pic: "".to_string(),
        }
    }

    pub fn test_contact(id: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: format!("Contact {id}"),
            last_contact_date: "2024-01-05".to_string(),
            profile_pic: format!("{TEST_PUBLIC_URL}images/{id}.png"),
        }
    }

    pub fn test_picked_file(name: &str) -> PickedFile {
        PickedFile::new(
            name,
            TEST_PNG_BYTES.to_vec(),
            Some("image/png".to_string()),
        )
    }
}
