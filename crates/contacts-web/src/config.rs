use crate::constants::FILES_URL_PATH;
use clap::Parser;
use contacts_api::constants::CONTACTS_COLLECTION;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[arg(default_value_t = 8000, long, env = "HTTP_PORT")]
    pub http_port: u16,
    #[arg(default_value_t = String::from("127.0.0.1"), long, env = "HTTP_ADDRESS")]
    pub http_address: String,
    #[arg(default_value_t = String::from("."), long, env = "DATA_DIR")]
    pub data_dir: String,
    /// e.g. ws://localhost:8800, or rocksdb://<path> with the embedded-db feature
    #[arg(
        default_value_t = String::from("ws://localhost:8800"),
        long,
        env = "SURREAL_DB_CONNECTION"
    )]
    pub surreal_db_connection: String,
    #[arg(default_value_t = String::from("default"), long, env = "SURREAL_NAMESPACE")]
    pub surreal_namespace: String,
    #[arg(default_value_t = String::from("contacts"), long, env = "SURREAL_DATABASE")]
    pub surreal_database: String,
    #[arg(default_value_t = String::from(CONTACTS_COLLECTION), long, env = "CONTACTS_COLLECTION")]
    pub contacts_collection: String,
    /// The base url uploaded pictures are linked with, defaults to the files route of this server
    #[arg(long, env = "PUBLIC_FILES_URL")]
    pub public_files_url: Option<String>,
}

impl Config {
    pub fn http_listen_url(&self) -> String {
        format!("http://{}:{}", self.http_address, self.http_port)
    }

    pub fn public_files_url(&self) -> String {
        match self.public_files_url {
            Some(ref url) => url.to_owned(),
            None => format!("{}{}", self.http_listen_url(), FILES_URL_PATH),
        }
    }

    pub fn api_config(&self) -> contacts_api::Config {
        contacts_api::Config {
            surreal_db_connection: self.surreal_db_connection.clone(),
            surreal_namespace: self.surreal_namespace.clone(),
            surreal_database: self.surreal_database.clone(),
            contacts_collection: self.contacts_collection.clone(),
            data_dir: self.data_dir.clone(),
            public_files_url: self.public_files_url(),
        }
    }
}
