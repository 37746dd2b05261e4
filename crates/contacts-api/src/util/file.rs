use crate::constants::{
    MAX_FILE_NAME_CHARACTERS, MAX_FILE_SIZE_BYTES, PROFILE_PICTURE_PREFIX, VALID_IMAGE_MIME_TYPES,
};
use crate::service::{Error, Result};
use async_trait::async_trait;
use contacts_core::PickedFile;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadFileHandler: Send + Sync {
    /// Read the attached uploaded file
    async fn get_contents(&self) -> std::io::Result<Vec<u8>>;
    /// Returns the original name for an uploaded file, including the extension
    fn name(&self) -> Option<String>;
    /// Returns the file length for an uploaded file
    fn len(&self) -> u64;
    /// Returns whether it's empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// detects the content type of the file by checking the first bytes
    async fn detect_content_type(&self) -> std::io::Result<Option<String>>;
}

pub fn detect_content_type_for_bytes(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(256)];
    infer::get(head).map(|t| t.mime_type().to_owned())
}

/// The blob path a profile picture with the given original file name is stored at.
/// The name is kept as it is, so only identical names share a path. Names that could
/// leave the picture folder are rejected.
pub fn profile_picture_path(file_name: &str) -> Result<String> {
    let invalid = file_name.trim().is_empty()
        || file_name == "."
        || file_name.contains("..")
        || file_name
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control());
    if invalid {
        return Err(Error::Validation(format!(
            "Invalid profile picture file name: {}",
            file_name.escape_debug()
        )));
    }
    Ok(format!("{PROFILE_PICTURE_PREFIX}{file_name}"))
}

/// Checks that the uploaded file is a usable profile picture and reads it
pub async fn read_profile_picture(file: &dyn UploadFileHandler) -> Result<PickedFile> {
    if file.len() == 0 {
        return Err(Error::Validation(String::from("File is empty (0 bytes)")));
    }

    if file.len() > MAX_FILE_SIZE_BYTES as u64 {
        return Err(Error::Validation(format!(
            "Maximum file size is {} bytes",
            MAX_FILE_SIZE_BYTES
        )));
    }

    let name = match file.name() {
        Some(n) => n,
        None => {
            return Err(Error::Validation(String::from(
                "File name needs to have at least 1 character",
            )));
        }
    };

    if name.len() > MAX_FILE_NAME_CHARACTERS {
        return Err(Error::Validation(format!(
            "File Name too long - maximum is {} characters",
            MAX_FILE_NAME_CHARACTERS
        )));
    }
    profile_picture_path(&name)?;

    let detected_type = match file.detect_content_type().await? {
        None => {
            return Err(Error::Validation(String::from("Unknown file type detected")));
        }
        Some(t) => t,
    };

    if !VALID_IMAGE_MIME_TYPES.contains(&detected_type.as_str()) {
        return Err(Error::Validation(format!(
            "Invalid file type detected - only {} are allowed",
            VALID_IMAGE_MIME_TYPES.join(", ")
        )));
    }

    let bytes = file.get_contents().await?;
    Ok(PickedFile::new(&name, bytes, Some(detected_type)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::tests::TEST_PNG_BYTES;

    fn mock_upload(name: Option<&str>, bytes: &[u8]) -> MockUploadFileHandler {
        let name = name.map(|n| n.to_owned());
        let bytes = bytes.to_vec();
        let detected = detect_content_type_for_bytes(&bytes);
        let len = bytes.len() as u64;
        let mut file = MockUploadFileHandler::new();
        file.expect_name().returning(move || name.clone());
        file.expect_len().returning(move || len);
        file.expect_detect_content_type()
            .returning(move || Ok(detected.clone()));
        file.expect_get_contents()
            .returning(move || Ok(bytes.clone()));
        file
    }

    #[test]
    fn profile_picture_path_baseline() {
        assert_eq!(
            profile_picture_path("ann.png").unwrap(),
            String::from("images/ann.png")
        );
    }

    #[test]
    fn profile_picture_path_same_name_same_path() {
        assert_eq!(
            profile_picture_path("ann.png").unwrap(),
            profile_picture_path("ann.png").unwrap()
        );
    }

    #[test]
    fn profile_picture_path_keeps_the_name() {
        assert_eq!(
            profile_picture_path("Photo (1) ä.PNG").unwrap(),
            String::from("images/Photo (1) ä.PNG")
        );
    }

    #[test]
    fn profile_picture_path_distinct_names_distinct_paths() {
        for (left, right) in [
            ("Ann.png", "ann.png"),
            ("photo(1).png", "photo1.png"),
            ("my pic.png", "mypic.png"),
        ] {
            assert_ne!(
                profile_picture_path(left).unwrap(),
                profile_picture_path(right).unwrap()
            );
        }
    }

    #[test]
    fn profile_picture_path_invalid_names() {
        for name in [
            "",
            "  ",
            ".",
            "..",
            "../ann.png",
            "a..png",
            "images/ann.png",
            "/ann.png",
            "dir\\ann.png",
            "ann\n.png",
            "ann\u{7}.png",
        ] {
            assert!(
                matches!(profile_picture_path(name), Err(Error::Validation(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn detect_content_type_png() {
        assert_eq!(
            detect_content_type_for_bytes(&TEST_PNG_BYTES),
            Some(String::from("image/png"))
        );
        assert_eq!(detect_content_type_for_bytes(b"hello world"), None);
    }

    #[tokio::test]
    async fn read_profile_picture_baseline() {
        let file = mock_upload(Some("ann.png"), &TEST_PNG_BYTES);
        let picked = read_profile_picture(&file).await.unwrap();
        assert_eq!(picked.name, "ann.png");
        assert_eq!(picked.bytes, TEST_PNG_BYTES.to_vec());
        assert_eq!(picked.content_type, Some(String::from("image/png")));
    }

    #[tokio::test]
    async fn read_profile_picture_empty() {
        let file = mock_upload(Some("ann.png"), &[]);
        assert!(matches!(
            read_profile_picture(&file).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn read_profile_picture_too_big() {
        let mut file = MockUploadFileHandler::new();
        file.expect_len()
            .returning(|| MAX_FILE_SIZE_BYTES as u64 + 1);
        assert!(matches!(
            read_profile_picture(&file).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn read_profile_picture_no_name() {
        let file = mock_upload(None, &TEST_PNG_BYTES);
        assert!(matches!(
            read_profile_picture(&file).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn read_profile_picture_not_an_image() {
        let file = mock_upload(Some("notes.txt"), b"just some plain text");
        assert!(matches!(
            read_profile_picture(&file).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn read_profile_picture_pdf_is_rejected() {
        let file = mock_upload(Some("scan.pdf"), b"%PDF-1.4\n%some pdf content");
        assert!(matches!(
            read_profile_picture(&file).await,
            Err(Error::Validation(_))
        ));
    }
}
