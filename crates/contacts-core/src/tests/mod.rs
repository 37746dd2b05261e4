#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use crate::contact::{Contact, ContactDraft};

    pub fn test_draft() -> ContactDraft {
        ContactDraft {
            id: None,
            name: "Ann".to_string(),
            last_contact_date: "2024-01-05".to_string(),
            profile_pic: "".to_string(),
        }
    }

    pub fn test_contact(id: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: format!("Contact {id}"),
            last_contact_date: "2024-01-05".to_string(),
            profile_pic: format!("http://localhost/api/files/images/{id}.png"),
        }
    }
}
