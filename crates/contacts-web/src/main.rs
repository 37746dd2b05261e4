use anyhow::Result;
use clap::Parser;
use config::Config;
use contacts_api::get_db_context;
use contacts_api::service::create_service_context;
use log::{error, info};

mod config;
mod constants;
mod data;
mod error;
mod handlers;
mod router;

// MAIN
#[macro_use]
extern crate lazy_static;
lazy_static! {
    pub static ref CONFIG: Config = Config::parse();
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let conf = CONFIG.clone();

    // Initialize the API
    let api_config = conf.api_config();
    info!(
        "Storing contacts in {} ({}/{}), files in {}",
        api_config.surreal_db_connection,
        api_config.surreal_namespace,
        api_config.surreal_database,
        api_config.data_dir
    );
    contacts_api::init(api_config)?;

    // Initialize the database context
    let db = get_db_context(contacts_api::get_config()).await?;
    let service_context = create_service_context(db);

    // the list route retries, if this fails
    if let Err(e) = service_context.contacts.lock().await.load().await {
        error!("Could not load contacts at startup: {e}");
    }

    if let Err(e) = router::rocket_main(conf, service_context).launch().await {
        error!("Web server stopped with error: {e}");
    }

    info!("Shutting down...");
    Ok(())
}
