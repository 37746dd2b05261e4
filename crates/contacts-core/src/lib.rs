pub mod contact;
pub mod file;
#[cfg(test)]
mod tests;
pub mod util;

pub use contact::{Contact, ContactDraft, ContactFields, ValidationError};
pub use file::PickedFile;
