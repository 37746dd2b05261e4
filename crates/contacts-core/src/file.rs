use std::fmt;

/// An image file picked in the contact form, held until the form is submitted
#[derive(Clone, PartialEq, Eq)]
pub struct PickedFile {
    /// The original file name as given by the client
    pub name: String,
    pub bytes: Vec<u8>,
    /// The mime type detected from the file contents
    pub content_type: Option<String>,
}

impl PickedFile {
    pub fn new(name: &str, bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self {
            name: name.to_owned(),
            bytes,
            content_type,
        }
    }
}

// the bytes are left out, they would flood the logs
impl fmt::Debug for PickedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}
