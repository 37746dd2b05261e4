// Contacts
pub const CONTACTS_COLLECTION: &str = "contacts";
pub const PROFILE_PICTURE_PREFIX: &str = "images/";

// Validation
pub const MAX_FILE_SIZE_BYTES: usize = 1_000_000; // ~1 MB
pub const MAX_FILE_NAME_CHARACTERS: usize = 200;
pub const VALID_IMAGE_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];
