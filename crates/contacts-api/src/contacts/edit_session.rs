use crate::service::{Error, Result};
use contacts_core::{Contact, ContactDraft, PickedFile};
use std::sync::{Arc, Weak};

/// The state of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    /// the form holds a draft for a contact that doesn't exist yet
    Creating,
    /// the form holds a draft of an existing contact
    Editing,
}

/// Changes to the text fields of the draft, fields that are `None` stay as they are
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftChanges {
    pub name: Option<String>,
    pub last_contact_date: Option<String>,
}

/// Held by a running submit. The form is busy as long as the guard is alive, so a
/// submit that is dropped or panics can't leave the form locked.
#[derive(Debug)]
pub struct SubmitGuard {
    _token: Arc<()>,
}

#[derive(Debug, Clone)]
struct OpenForm {
    draft: ContactDraft,
    picked_file: Option<PickedFile>,
    in_flight: Weak<()>,
    last_error: Option<String>,
}

impl OpenForm {
    fn new(draft: ContactDraft) -> Self {
        Self {
            draft,
            picked_file: None,
            in_flight: Weak::new(),
            last_error: None,
        }
    }

    fn is_submitting(&self) -> bool {
        self.in_flight.strong_count() > 0
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_submitting() {
            return Err(Error::SubmitInProgress);
        }
        Ok(())
    }
}

/// The contact form. The draft and the picked file only exist while the form is open
/// and are always dropped together.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    form: Option<OpenForm>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match self.form {
            None => SessionState::Closed,
            Some(ref form) if form.draft.is_new() => SessionState::Creating,
            Some(_) => SessionState::Editing,
        }
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn draft(&self) -> Option<&ContactDraft> {
        self.form.as_ref().map(|f| &f.draft)
    }

    pub fn picked_file(&self) -> Option<&PickedFile> {
        self.form.as_ref().and_then(|f| f.picked_file.as_ref())
    }

    pub fn is_submitting(&self) -> bool {
        self.form.as_ref().is_some_and(|f| f.is_submitting())
    }

    /// The message of the last failed submit of the open form
    pub fn last_error(&self) -> Option<&str> {
        self.form.as_ref().and_then(|f| f.last_error.as_deref())
    }

    /// Opens the form with an empty draft
    pub fn open_add(&mut self) -> Result<()> {
        self.open(ContactDraft::default())
    }

    /// Opens the form with a draft of the given contact
    pub fn open_existing(&mut self, contact: Contact) -> Result<()> {
        self.open(ContactDraft::from(contact))
    }

    fn open(&mut self, draft: ContactDraft) -> Result<()> {
        if self.form.is_some() {
            return Err(Error::FormAlreadyOpen);
        }
        self.form = Some(OpenForm::new(draft));
        Ok(())
    }

    fn open_form(&mut self) -> Result<&mut OpenForm> {
        let form = self.form.as_mut().ok_or(Error::FormNotOpen)?;
        form.ensure_idle()?;
        Ok(form)
    }

    pub fn apply_changes(&mut self, changes: DraftChanges) -> Result<()> {
        let form = self.open_form()?;
        if let Some(name) = changes.name {
            form.draft.name = name;
        }
        if let Some(last_contact_date) = changes.last_contact_date {
            form.draft.last_contact_date = last_contact_date;
        }
        Ok(())
    }

    /// Puts the file into the picked slot, replacing a previously picked one
    pub fn pick_file(&mut self, file: PickedFile) -> Result<()> {
        let form = self.open_form()?;
        form.picked_file = Some(file);
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.open_form()?;
        self.close();
        Ok(())
    }

    /// Checks the draft and marks the form as being submitted until the returned guard
    /// is dropped. Returns what has to be saved. A rejected submit is recorded as the
    /// last error and leaves the form idle.
    pub fn start_submit(&mut self) -> Result<(ContactDraft, Option<PickedFile>, SubmitGuard)> {
        let form = self.open_form()?;
        form.last_error = None;
        let checked = match form.draft.validate() {
            Err(e) => Err(Error::from(e)),
            Ok(()) if form.draft.is_new() && form.picked_file.is_none() => Err(
                Error::Validation(String::from("A profile picture is required")),
            ),
            Ok(()) => Ok(()),
        };
        if let Err(e) = checked {
            form.last_error = Some(e.to_string());
            return Err(e);
        }
        let token = Arc::new(());
        form.in_flight = Arc::downgrade(&token);
        Ok((
            form.draft.clone(),
            form.picked_file.clone(),
            SubmitGuard { _token: token },
        ))
    }

    /// Records why the running submit failed, the form stays open with its draft and
    /// file
    pub fn submit_failed(&mut self, message: &str) {
        if let Some(ref mut form) = self.form {
            form.last_error = Some(message.to_owned());
        }
    }

    pub fn close(&mut self) {
        self.form = None;
    }
}
