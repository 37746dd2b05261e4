use contacts_core::contact::{Contact, ContactFields};

use super::Result;
use async_trait::async_trait;

/// Document store operations for the contacts collection
#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// Creates a new document and returns the id the store assigned to it
    async fn create(&self, fields: &ContactFields) -> Result<String>;
    /// Returns all documents of the collection, in store order
    async fn list(&self) -> Result<Vec<Contact>>;
    /// Overwrites the fields of the document with the given id
    async fn update(&self, id: &str, fields: &ContactFields) -> Result<()>;
}
