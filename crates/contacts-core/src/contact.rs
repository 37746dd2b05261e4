use crate::util::date;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for missing or malformed form fields
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,

    #[error("last contact date is required")]
    MissingLastContactDate,

    /// the date has to be given as YYYY-MM-DD
    #[error("invalid last contact date: {0}")]
    InvalidLastContactDate(String),
}

/// The fields of a contact as they are stored in the document store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    #[serde(rename = "lastContactDate")]
    pub last_contact_date: String,
    #[serde(rename = "profilePic", default)]
    pub profile_pic: String,
}

/// A persisted contact, identified by the id the store assigned on creation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub last_contact_date: String,
    pub profile_pic: String,
}

impl Contact {
    pub fn new(id: &str, fields: ContactFields) -> Self {
        Self {
            id: id.to_owned(),
            name: fields.name,
            last_contact_date: fields.last_contact_date,
            profile_pic: fields.profile_pic,
        }
    }
}

/// The not yet confirmed contact data bound to an open form. A draft without an id
/// represents a contact that was not created yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDraft {
    pub id: Option<String>,
    pub name: String,
    pub last_contact_date: String,
    pub profile_pic: String,
}

impl ContactDraft {
    pub fn is_new(&self) -> bool {
        match self.id {
            Some(ref id) => id.is_empty(),
            None => true,
        }
    }

    /// Checks the fields the form marks as required
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.last_contact_date.trim().is_empty() {
            return Err(ValidationError::MissingLastContactDate);
        }
        date::parse_date_string(&self.last_contact_date).map_err(|_| {
            ValidationError::InvalidLastContactDate(self.last_contact_date.clone())
        })?;
        Ok(())
    }

    /// The document fields of this draft with the given profile picture url.
    /// A valid date is stored as YYYY-MM-DD, without surrounding whitespace.
    pub fn to_fields(&self, profile_pic: &str) -> ContactFields {
        let last_contact_date = match date::parse_date_string(&self.last_contact_date) {
            Ok(parsed) => date::format_date(&parsed),
            Err(_) => self.last_contact_date.clone(),
        };
        ContactFields {
            name: self.name.clone(),
            last_contact_date,
            profile_pic: profile_pic.to_owned(),
        }
    }
}

impl From<Contact> for ContactDraft {
    fn from(value: Contact) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
            last_contact_date: value.last_contact_date,
            profile_pic: value.profile_pic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::tests::{test_contact, test_draft};

    #[test]
    fn new_draft_is_new() {
        assert!(ContactDraft::default().is_new());
        let mut draft = test_draft();
        draft.id = Some(String::new());
        assert!(draft.is_new());
    }

    #[test]
    fn draft_from_contact_is_not_new() {
        let draft = ContactDraft::from(test_contact("c1"));
        assert!(!draft.is_new());
        assert_eq!(draft.id, Some(String::from("c1")));
        assert_eq!(draft.profile_pic, "http://localhost/api/files/images/c1.png");
    }

    #[test]
    fn validate_baseline() {
        assert!(test_draft().validate().is_ok());
    }

    #[test]
    fn validate_missing_name() {
        let mut draft = test_draft();
        draft.name = String::from("   ");
        assert_eq!(draft.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn validate_missing_date() {
        let mut draft = test_draft();
        draft.last_contact_date = String::new();
        assert_eq!(draft.validate(), Err(ValidationError::MissingLastContactDate));
    }

    #[test]
    fn validate_invalid_date() {
        let mut draft = test_draft();
        draft.last_contact_date = String::from("05.01.2024");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidLastContactDate(String::from(
                "05.01.2024"
            )))
        );
    }

    #[test]
    fn fields_use_store_keys() {
        let fields = test_draft().to_fields("http://localhost/api/files/images/ann.png");
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["lastContactDate"], "2024-01-05");
        assert_eq!(json["profilePic"], "http://localhost/api/files/images/ann.png");
    }

    #[test]
    fn to_fields_stores_the_date_without_whitespace() {
        let mut draft = test_draft();
        draft.last_contact_date = String::from(" 2024-01-05 ");
        assert!(draft.validate().is_ok());
        let fields = draft.to_fields("");
        assert_eq!(fields.last_contact_date, "2024-01-05");
    }
}
