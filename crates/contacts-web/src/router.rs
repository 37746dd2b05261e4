use crate::config::Config;
use crate::constants::MAX_UPLOAD_SIZE_BYTES;
use crate::handlers;
use contacts_api::service::ServiceContext;
use log::info;
use rocket::data::ByteUnit;
use rocket::figment::Figment;
use rocket::http::Method;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, catch, catchers, routes};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    error: &'static str,
    message: String,
    code: u16,
}

impl ErrorResponse {
    pub fn new(error: &'static str, message: String, code: u16) -> Self {
        Self {
            error,
            message,
            code,
        }
    }

    pub fn to_json_string(&self) -> String {
        json!({ "error": self.error, "message": self.message, "code": self.code }).to_string()
    }
}

pub fn rocket_main(conf: Config, context: ServiceContext) -> Rocket<Build> {
    let config = Figment::from(rocket::Config::default())
        .merge(("limits.forms", ByteUnit::Byte(MAX_UPLOAD_SIZE_BYTES)))
        .merge(("limits.file", ByteUnit::Byte(MAX_UPLOAD_SIZE_BYTES)))
        .merge(("limits.data-form", ByteUnit::Byte(MAX_UPLOAD_SIZE_BYTES)))
        .merge(("port", conf.http_port))
        .merge(("address", conf.http_address.to_owned()));

    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_headers(AllowedHeaders::all())
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Put, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allow_credentials(true)
        .to_cors()
        .expect("Cors setup failed");

    let rocket = rocket::custom(config)
        .attach(cors.clone())
        // catchers for CORS and API errors
        .mount("/api/", rocket_cors::catch_all_options_routes())
        .register("/api/", catchers![not_found])
        .manage(context)
        .manage(cors)
        .mount(
            "/api/contacts",
            routes![
                handlers::contacts::return_contacts,
                handlers::contacts::return_form,
                handlers::contacts::open_add_form,
                handlers::contacts::select_contact,
                handlers::contacts::edit_draft,
                handlers::contacts::pick_image,
                handlers::contacts::submit_form,
                handlers::contacts::cancel_form,
            ],
        )
        .mount("/api/files", routes![handlers::get_file]);

    info!("HTTP Server Listening on {}", conf.http_listen_url());

    rocket
}

#[catch(404)]
fn not_found(req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "not_found",
        format!("We couldn't find the requested path '{}'", req.uri()),
        404,
    ))
}
