use async_trait::async_trait;
use contacts_api::{
    contacts::{DraftChanges, EditSession, SessionState},
    data::{Contact, ContactDraft},
    util::file::{UploadFileHandler, detect_content_type_for_bytes},
};
use rocket::FromForm;
use rocket::fs::TempFile;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncReadExt;

pub trait IntoWeb<T> {
    fn into_web(self) -> T;
}

pub trait FromWeb<T> {
    fn from_web(value: T) -> Self;
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn new() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContactWeb {
    pub id: String,
    pub name: String,
    pub last_contact_date: String,
    pub profile_pic: String,
}

impl IntoWeb<ContactWeb> for Contact {
    fn into_web(self) -> ContactWeb {
        ContactWeb {
            id: self.id,
            name: self.name,
            last_contact_date: self.last_contact_date,
            profile_pic: self.profile_pic,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactsResponse<T: Serialize> {
    pub contacts: Vec<T>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionStateWeb {
    Closed,
    Creating,
    Editing,
}

impl IntoWeb<SessionStateWeb> for SessionState {
    fn into_web(self) -> SessionStateWeb {
        match self {
            SessionState::Closed => SessionStateWeb::Closed,
            SessionState::Creating => SessionStateWeb::Creating,
            SessionState::Editing => SessionStateWeb::Editing,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactDraftWeb {
    pub id: Option<String>,
    pub name: String,
    pub last_contact_date: String,
    pub profile_pic: String,
}

impl IntoWeb<ContactDraftWeb> for ContactDraft {
    fn into_web(self) -> ContactDraftWeb {
        ContactDraftWeb {
            id: self.id,
            name: self.name,
            last_contact_date: self.last_contact_date,
            profile_pic: self.profile_pic,
        }
    }
}

/// The contact form as shown to the user
#[derive(Debug, Serialize)]
pub struct ContactFormWeb {
    pub state: SessionStateWeb,
    pub draft: Option<ContactDraftWeb>,
    pub picked_file_name: Option<String>,
    pub submitting: bool,
    pub last_error: Option<String>,
}

impl IntoWeb<ContactFormWeb> for &EditSession {
    fn into_web(self) -> ContactFormWeb {
        ContactFormWeb {
            state: self.state().into_web(),
            draft: self.draft().cloned().map(|d| d.into_web()),
            picked_file_name: self.picked_file().map(|f| f.name.clone()),
            submitting: self.is_submitting(),
            last_error: self.last_error().map(|e| e.to_owned()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DraftChangesPayload {
    pub name: Option<String>,
    pub last_contact_date: Option<String>,
}

impl FromWeb<DraftChangesPayload> for DraftChanges {
    fn from_web(value: DraftChangesPayload) -> Self {
        Self {
            name: value.name,
            last_contact_date: value.last_contact_date,
        }
    }
}

#[derive(Debug, FromForm)]
pub struct UploadFileForm<'r> {
    pub file: TempFile<'r>,
}

pub struct TempFileWrapper<'a>(pub &'a TempFile<'a>);

#[async_trait]
impl UploadFileHandler for TempFileWrapper<'_> {
    async fn get_contents(&self) -> std::io::Result<Vec<u8>> {
        let mut opened = self.0.open().await?;
        let mut buf = Vec::with_capacity(self.0.len() as usize);
        opened.read_to_end(&mut buf).await?;
        Ok(buf)
    }

    // TempFile::name() strips the extension, which is part of the blob path
    fn name(&self) -> Option<String> {
        self.0
            .raw_name()
            .map(|n| n.dangerous_unsafe_unsanitized_raw().as_str().to_owned())
            .filter(|n| !n.is_empty())
    }

    fn len(&self) -> u64 {
        self.0.len()
    }

    async fn detect_content_type(&self) -> std::io::Result<Option<String>> {
        let mut buffer = vec![0; 256];
        let mut opened = self.0.open().await?;
        let bytes_read = opened.read(&mut buffer).await?;
        buffer.truncate(bytes_read);
        Ok(detect_content_type_for_bytes(&buffer))
    }
}
