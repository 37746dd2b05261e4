use crate::router::ErrorResponse;
use contacts_api::service::{Error, ServiceContext};
use contacts_api::util::file::detect_content_type_for_bytes;
use log::error;
use rocket::Response;
use rocket::{State, get, http::ContentType};
use rocket::{http::Status, response::Responder};
use std::io::Cursor;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod contacts;

/// Serves uploaded blobs, public urls of profile pictures point here
#[get("/<path..>")]
pub async fn get_file(
    state: &State<ServiceContext>,
    path: PathBuf,
) -> Result<(ContentType, Vec<u8>)> {
    let blob_path = path
        .iter()
        .map(|segment| segment.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    let file_bytes = state.contact_service.open_file(&blob_path).await?;

    let content_type = match detect_content_type_for_bytes(&file_bytes) {
        None => None,
        Some(t) => ContentType::parse_flexible(&t),
    }
    .ok_or(Error::Validation(String::from(
        "Content Type of the requested file could not be determined",
    )))?;

    Ok((content_type, file_bytes))
}

impl<'r, 'o: 'r> Responder<'r, 'o> for crate::error::Error {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        match self {
            crate::error::Error::Service(e) => ServiceError(e).respond_to(req),
        }
    }
}

pub struct ServiceError(Error);

impl<'r, 'o: 'r> Responder<'r, 'o> for ServiceError {
    fn respond_to(self, _req: &rocket::Request) -> rocket::response::Result<'o> {
        match self.0 {
            Error::Validation(msg) => build_validation_response(msg),
            Error::NotFound => build_json_response(Status::NotFound, "not_found", "not found"),
            Error::FormNotOpen | Error::FormAlreadyOpen | Error::SubmitInProgress => {
                build_json_response(Status::Conflict, "conflict", &self.0.to_string())
            }
            // store failures can only be reported as something that went wrong on our end
            Error::Upload(_) | Error::DocumentWrite(_) | Error::Persistence(_) | Error::Io(_) => {
                error!("{}", self.0);
                build_json_response(
                    Status::InternalServerError,
                    "internal_server_error",
                    &self.0.to_string(),
                )
            }
        }
    }
}

fn build_validation_response<'o>(msg: String) -> rocket::response::Result<'o> {
    build_json_response(Status::BadRequest, "validation_error", &msg)
}

fn build_json_response<'o>(
    status: Status,
    error: &'static str,
    msg: &str,
) -> rocket::response::Result<'o> {
    let err_resp = ErrorResponse::new(error, msg.to_owned(), status.code);
    let body = err_resp.to_json_string();
    Response::build()
        .status(status)
        .header(ContentType::JSON)
        .sized_body(body.len(), Cursor::new(body))
        .ok()
}
