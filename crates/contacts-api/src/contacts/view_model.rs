use contacts_core::Contact;

/// The displayed contacts, in the order they were loaded and created
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactList {
    contacts: Vec<Contact>,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole list with the result of a load
    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    /// Adds a newly created contact at the end
    pub fn append(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Replaces the first contact with the same id, keeping its position.
    /// Returns false if no contact matched, in which case the list is unchanged.
    pub fn replace(&mut self, contact: Contact) -> bool {
        match self.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(existing) => {
                *existing = contact;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
