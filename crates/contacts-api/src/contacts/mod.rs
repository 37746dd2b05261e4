mod controller;
mod edit_session;
mod view_model;

pub use controller::{ContactsController, PendingSubmit};
pub use edit_session::{DraftChanges, EditSession, SessionState, SubmitGuard};
pub use view_model::ContactList;
