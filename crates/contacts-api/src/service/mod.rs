pub mod contact_service;

use crate::contacts::ContactsController;
use crate::persistence::DbContext;
use contact_service::{ContactService, ContactServiceApi};
use contacts_core::ValidationError;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the persistence layer, which are not part of a write
    #[error("Persistence error: {0}")]
    Persistence(#[from] contacts_persistence::Error),

    /// errors while uploading a profile picture or fetching its public url
    #[error("Profile picture upload error: {0}")]
    Upload(contacts_persistence::Error),

    /// errors while creating or updating a contact document
    #[error("Contact document write error: {0}")]
    DocumentWrite(contacts_persistence::Error),

    /// errors that currently return early http status code Status::NotFound
    #[error("not found")]
    NotFound,

    /// errors that stem from validation
    #[error("Validation Error: {0}")]
    Validation(String),

    /// error returned if a form operation is attempted while no form is open
    #[error("The contact form is not open")]
    FormNotOpen,

    /// error returned if a form is opened while another one is still open
    #[error("The contact form is already open")]
    FormAlreadyOpen,

    /// error returned if the form is changed or submitted while a submit is in flight
    #[error("The contact form is already being submitted")]
    SubmitInProgress,

    /// std io
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for Error {
    fn from(value: ValidationError) -> Self {
        Error::Validation(value.to_string())
    }
}

/// A dependency container for all services that are used by the application
#[derive(Clone)]
pub struct ServiceContext {
    pub contact_service: Arc<dyn ContactServiceApi>,
    /// The contact list and the open form of the user session
    pub contacts: Arc<Mutex<ContactsController>>,
}

/// Wires the services and the session controller on top of the given persistence layer
pub fn create_service_context(db: DbContext) -> ServiceContext {
    let contact_service: Arc<dyn ContactServiceApi> =
        Arc::new(ContactService::new(db.contact_store, db.blob_store));
    let contacts = Arc::new(Mutex::new(ContactsController::new(
        contact_service.clone(),
    )));

    ServiceContext {
        contact_service,
        contacts,
    }
}
