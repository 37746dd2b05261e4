// Web
pub const FILES_URL_PATH: &str = "/api/files/";

// Requests above this size are cut off by rocket, the profile picture limit itself is checked
// when the picture is picked
pub const MAX_UPLOAD_SIZE_BYTES: u64 = 2_000_000;
