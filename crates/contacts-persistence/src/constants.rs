// DB constants
pub const DB_TABLE: &str = "table";

// Blob constants
pub const BLOBS_FOLDER: &str = "blobs";
