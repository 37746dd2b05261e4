use super::Result;
use crate::data::{
    ContactFormWeb, ContactWeb, ContactsResponse, DraftChangesPayload, FromWeb, IntoWeb,
    SuccessResponse, TempFileWrapper, UploadFileForm,
};
use contacts_api::contacts::DraftChanges;
use contacts_api::service::ServiceContext;
use contacts_api::util::file::{UploadFileHandler, read_profile_picture};
use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::{State, get, post, put};

#[get("/list")]
pub async fn return_contacts(
    state: &State<ServiceContext>,
) -> Result<Json<ContactsResponse<ContactWeb>>> {
    let mut controller = state.contacts.lock().await;
    // no-op if the contacts were loaded at startup
    controller.load().await?;
    Ok(Json(ContactsResponse {
        contacts: controller
            .contacts()
            .iter()
            .cloned()
            .map(|c| c.into_web())
            .collect(),
    }))
}

#[get("/form")]
pub async fn return_form(state: &State<ServiceContext>) -> Result<Json<ContactFormWeb>> {
    let controller = state.contacts.lock().await;
    Ok(Json(controller.session().into_web()))
}

#[post("/form/add")]
pub async fn open_add_form(state: &State<ServiceContext>) -> Result<Json<ContactFormWeb>> {
    let mut controller = state.contacts.lock().await;
    controller.open_add()?;
    Ok(Json(controller.session().into_web()))
}

#[post("/form/select/<id>")]
pub async fn select_contact(
    state: &State<ServiceContext>,
    id: &str,
) -> Result<Json<ContactFormWeb>> {
    let mut controller = state.contacts.lock().await;
    controller.select(id)?;
    Ok(Json(controller.session().into_web()))
}

#[put("/form", format = "json", data = "<draft_changes_payload>")]
pub async fn edit_draft(
    state: &State<ServiceContext>,
    draft_changes_payload: Json<DraftChangesPayload>,
) -> Result<Json<ContactFormWeb>> {
    let mut controller = state.contacts.lock().await;
    controller.edit_draft(DraftChanges::from_web(draft_changes_payload.0))?;
    Ok(Json(controller.session().into_web()))
}

#[post("/form/image", data = "<file_upload_form>")]
pub async fn pick_image(
    state: &State<ServiceContext>,
    file_upload_form: Form<UploadFileForm<'_>>,
) -> Result<Json<ContactFormWeb>> {
    let file = &file_upload_form.file;
    let upload_file_handler: &dyn UploadFileHandler =
        &TempFileWrapper(file) as &dyn UploadFileHandler;
    let picked_file = read_profile_picture(upload_file_handler).await?;

    let mut controller = state.contacts.lock().await;
    controller.pick_image(picked_file)?;
    Ok(Json(controller.session().into_web()))
}

/// The lock on the controller is released while the picture and the contact are saved.
/// If the request is dropped on the way, the form becomes usable again.
#[post("/form/submit")]
pub async fn submit_form(state: &State<ServiceContext>) -> Result<Json<ContactWeb>> {
    let (pending, contact_service) = {
        let mut controller = state.contacts.lock().await;
        (controller.begin_submit()?, controller.contact_service())
    };
    let outcome = pending.run(contact_service.as_ref()).await;

    let contact = state
        .contacts
        .lock()
        .await
        .complete_submit(pending, outcome)?;
    Ok(Json(contact.into_web()))
}

#[post("/form/cancel")]
pub async fn cancel_form(state: &State<ServiceContext>) -> Result<Json<SuccessResponse>> {
    state.contacts.lock().await.cancel()?;
    Ok(Json(SuccessResponse::new()))
}
