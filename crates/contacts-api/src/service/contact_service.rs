use super::{Error, Result};
use crate::util::file::profile_picture_path;
use async_trait::async_trait;
use contacts_core::{Contact, ContactDraft, PickedFile};
use contacts_persistence::{BlobStoreApi, ContactStoreApi};
use log::info;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

/// The result of a successful upsert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(Contact),
    Updated(Contact),
}

impl UpsertOutcome {
    pub fn contact(&self) -> &Contact {
        match self {
            UpsertOutcome::Created(contact) => contact,
            UpsertOutcome::Updated(contact) => contact,
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Returns all contacts, in the order of the store
    async fn get_contacts(&self) -> Result<Vec<Contact>>;

    /// Creates a contact from a draft without id, or updates the contact with the draft's id.
    /// A picked file is uploaded before the document is written and replaces the profile
    /// picture. Creating a contact requires a picked file.
    async fn upsert(
        &self,
        draft: &ContactDraft,
        picked_file: Option<PickedFile>,
    ) -> Result<UpsertOutcome>;

    /// Reads an uploaded file by its blob path
    async fn open_file(&self, path: &str) -> Result<Vec<u8>>;
}

/// The contact service is responsible for managing contacts and their profile pictures
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStoreApi>,
    blob_store: Arc<dyn BlobStoreApi>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStoreApi>, blob_store: Arc<dyn BlobStoreApi>) -> Self {
        Self { store, blob_store }
    }

    /// Uploads the picture and returns its public url
    async fn upload_profile_picture(&self, file: &PickedFile) -> Result<String> {
        let path = profile_picture_path(&file.name)?;
        self.blob_store
            .upload_blob(&path, &file.bytes)
            .await
            .map_err(Error::Upload)?;
        let url = self
            .blob_store
            .get_public_url(&path)
            .await
            .map_err(Error::Upload)?;
        Ok(url)
    }

    async fn create_contact(&self, draft: &ContactDraft, file: &PickedFile) -> Result<Contact> {
        let profile_pic = self.upload_profile_picture(file).await?;
        let fields = draft.to_fields(&profile_pic);
        let id = self
            .store
            .create(&fields)
            .await
            .map_err(Error::DocumentWrite)?;
        info!("New contact id: {id}");
        Ok(Contact::new(&id, fields))
    }

    async fn update_contact(
        &self,
        id: &str,
        draft: &ContactDraft,
        file: Option<&PickedFile>,
    ) -> Result<Contact> {
        let profile_pic = match file {
            Some(file) => self.upload_profile_picture(file).await?,
            None => draft.profile_pic.clone(),
        };
        let fields = draft.to_fields(&profile_pic);
        self.store
            .update(id, &fields)
            .await
            .map_err(Error::DocumentWrite)?;
        info!("Contact {id} updated successfully");
        Ok(Contact::new(id, fields))
    }
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn get_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.store.list().await?;
        Ok(contacts)
    }

    async fn upsert(
        &self,
        draft: &ContactDraft,
        picked_file: Option<PickedFile>,
    ) -> Result<UpsertOutcome> {
        draft.validate()?;
        match draft.id {
            Some(ref id) if !id.is_empty() => {
                let contact = self.update_contact(id, draft, picked_file.as_ref()).await?;
                Ok(UpsertOutcome::Updated(contact))
            }
            _ => {
                let file = picked_file.ok_or(Error::Validation(String::from(
                    "A profile picture is required for a new contact",
                )))?;
                let contact = self.create_contact(draft, &file).await?;
                Ok(UpsertOutcome::Created(contact))
            }
        }
    }

    async fn open_file(&self, path: &str) -> Result<Vec<u8>> {
        match self.blob_store.open_blob(path).await {
            Ok(bytes) => Ok(bytes),
            Err(contacts_persistence::Error::NoSuchEntity(_, _))
            | Err(contacts_persistence::Error::InvalidBlobPath(_)) => Err(Error::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
