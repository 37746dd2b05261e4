use super::{ContactList, DraftChanges, EditSession, SubmitGuard};
use crate::service::{
    Error, Result,
    contact_service::{ContactServiceApi, UpsertOutcome},
};
use contacts_core::{Contact, ContactDraft, PickedFile};
use log::{debug, error, info, warn};
use std::sync::Arc;

/// A submit that passed the form checks and still has to be saved. The form stays
/// busy until this is handed back to `complete_submit` or dropped.
#[derive(Debug)]
pub struct PendingSubmit {
    draft: ContactDraft,
    picked_file: Option<PickedFile>,
    _guard: SubmitGuard,
}

impl PendingSubmit {
    /// Saves the draft, uploading the picked file first if there is one
    pub async fn run(&self, contact_service: &dyn ContactServiceApi) -> Result<UpsertOutcome> {
        contact_service
            .upsert(&self.draft, self.picked_file.clone())
            .await
    }
}

/// Drives the contact list and the contact form of a user session
pub struct ContactsController {
    contact_service: Arc<dyn ContactServiceApi>,
    contacts: ContactList,
    session: EditSession,
    loaded: bool,
}

impl ContactsController {
    pub fn new(contact_service: Arc<dyn ContactServiceApi>) -> Self {
        Self {
            contact_service,
            contacts: ContactList::new(),
            session: EditSession::new(),
            loaded: false,
        }
    }

    pub fn contact_service(&self) -> Arc<dyn ContactServiceApi> {
        self.contact_service.clone()
    }

    pub fn contacts(&self) -> &ContactList {
        &self.contacts
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Reads all contacts once, subsequent calls don't touch the store
    pub async fn load(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }
        let contacts = self.contact_service.get_contacts().await.map_err(|e| {
            error!("Could not load contacts: {e}");
            e
        })?;
        info!("Loaded {} contacts", contacts.len());
        self.contacts.replace_all(contacts);
        self.loaded = true;
        Ok(())
    }

    pub fn open_add(&mut self) -> Result<()> {
        self.session.open_add()
    }

    /// Opens the form for the displayed contact with the given id
    pub fn select(&mut self, id: &str) -> Result<()> {
        let contact = self.contacts.get(id).cloned().ok_or(Error::NotFound)?;
        self.session.open_existing(contact)
    }

    pub fn edit_draft(&mut self, changes: DraftChanges) -> Result<()> {
        self.session.apply_changes(changes)
    }

    pub fn pick_image(&mut self, file: PickedFile) -> Result<()> {
        debug!("Picked image {file:?}");
        self.session.pick_file(file)
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.session.cancel()
    }

    /// Checks the open form and marks it as being submitted. Until the returned submit
    /// is completed, the form can't be changed or submitted again.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit> {
        let (draft, picked_file, guard) = self.session.start_submit().map_err(|e| {
            debug!("Submit rejected: {e}");
            e
        })?;
        let pending = PendingSubmit {
            draft,
            picked_file,
            _guard: guard,
        };
        debug!("Submitting {pending:?}");
        Ok(pending)
    }

    /// Merges a successful save into the list and closes the form. A failed save
    /// leaves the list as it is and keeps the form open.
    pub fn complete_submit(
        &mut self,
        pending: PendingSubmit,
        outcome: Result<UpsertOutcome>,
    ) -> Result<Contact> {
        let result = self.merge_outcome(outcome);
        drop(pending);
        result
    }

    fn merge_outcome(&mut self, outcome: Result<UpsertOutcome>) -> Result<Contact> {
        match outcome {
            Ok(UpsertOutcome::Created(contact)) => {
                self.contacts.append(contact.clone());
                self.session.close();
                Ok(contact)
            }
            Ok(UpsertOutcome::Updated(contact)) => {
                if !self.contacts.replace(contact.clone()) {
                    warn!(
                        "Updated contact {} is not in the contact list, list left unchanged",
                        contact.id
                    );
                }
                self.session.close();
                Ok(contact)
            }
            Err(e) => {
                error!("Could not save contact: {e}");
                self.session.submit_failed(&e.to_string());
                Err(e)
            }
        }
    }

    /// Saves the open form and merges the result
    pub async fn submit(&mut self) -> Result<Contact> {
        let pending = self.begin_submit()?;
        let outcome = pending.run(self.contact_service.as_ref()).await;
        self.complete_submit(pending, outcome)
    }
}
