pub use contacts_core::contact;
pub use contacts_core::file;

pub use contacts_core::Contact;
pub use contacts_core::ContactDraft;
pub use contacts_core::ContactFields;
pub use contacts_core::PickedFile;
