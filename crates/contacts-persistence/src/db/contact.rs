use crate::{Error, Result};
use crate::constants::DB_TABLE;
use crate::contact::ContactStoreApi;
use async_trait::async_trait;
use contacts_core::{
    contact::{Contact, ContactFields},
    util::{date, get_uuid_v4},
};
use serde::{Deserialize, Serialize};
use surrealdb::{Surreal, engine::any::Any, sql::Thing};

/// Stores contacts as documents of a SurrealDB table named after the collection
#[derive(Clone)]
pub struct SurrealContactStore {
    db: Surreal<Any>,
    table: String,
}

impl SurrealContactStore {
    pub fn new(db: Surreal<Any>, collection: &str) -> Self {
        Self {
            db,
            table: collection.to_owned(),
        }
    }
}

#[async_trait]
impl ContactStoreApi for SurrealContactStore {
    async fn create(&self, fields: &ContactFields) -> Result<String> {
        let id = get_uuid_v4().to_string();
        let created: Option<ContactDb> = self
            .db
            .create((self.table.to_owned(), id.to_owned()))
            .content(NewContactDb::from(fields.clone()))
            .await?;
        match created {
            Some(contact) => Ok(contact.id.id.to_raw()),
            None => Err(Error::InsertFailed(format!(
                "{} document {id} was not created",
                self.table
            ))),
        }
    }

    async fn list(&self) -> Result<Vec<Contact>> {
        let mut result = self
            .db
            .query("SELECT * FROM type::table($table) ORDER BY created_at ASC")
            .bind((DB_TABLE, self.table.to_owned()))
            .await?;
        let contacts: Vec<ContactDb> = result.take(0)?;
        Ok(contacts.into_iter().map(|c| c.into()).collect())
    }

    async fn update(&self, id: &str, fields: &ContactFields) -> Result<()> {
        let updated: Option<ContactDb> = self
            .db
            .update((self.table.to_owned(), id.to_owned()))
            .merge(fields.clone())
            .await?;
        match updated {
            Some(_) => Ok(()),
            None => Err(Error::NoSuchEntity(self.table.to_owned(), id.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContactDb {
    id: Thing,
    name: String,
    #[serde(rename = "lastContactDate")]
    last_contact_date: String,
    #[serde(rename = "profilePic", default)]
    profile_pic: String,
    #[serde(default)]
    created_at: i64,
}

impl From<ContactDb> for Contact {
    fn from(value: ContactDb) -> Self {
        Self {
            id: value.id.id.to_raw(),
            name: value.name,
            last_contact_date: value.last_contact_date,
            profile_pic: value.profile_pic,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct NewContactDb {
    name: String,
    #[serde(rename = "lastContactDate")]
    last_contact_date: String,
    #[serde(rename = "profilePic")]
    profile_pic: String,
    created_at: i64,
}

impl From<ContactFields> for NewContactDb {
    fn from(fields: ContactFields) -> Self {
        Self {
            name: fields.name,
            last_contact_date: fields.last_contact_date,
            profile_pic: fields.profile_pic,
            created_at: date::now().timestamp_micros(),
        }
    }
}
