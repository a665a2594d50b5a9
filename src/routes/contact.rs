use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::domain::{ContactForm, ContactFormData, FormStatus};
use crate::intake::Intake;
use crate::routes::landing::page_response;

fn response_status(status: FormStatus) -> StatusCode {
    match status {
        FormStatus::Success => StatusCode::OK,
        FormStatus::Failure => StatusCode::BAD_GATEWAY,
        // validation blocked the attempt
        FormStatus::Idle | FormStatus::Submitting => StatusCode::BAD_REQUEST,
    }
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, intake),
    fields(
        contact_email = %form.email,
        contact_name = %form.name,
        newsletter = form.newsletter.is_some(),
    )
)]
pub async fn contact(
    form: web::Form<ContactFormData>,
    intake: web::Data<dyn Intake>,
) -> HttpResponse {
    let mut contact_form = ContactForm::from(form.0);

    let status = contact_form.submit(intake.get_ref()).await;
    match status {
        FormStatus::Success => tracing::info!("Contact submission delivered"),
        FormStatus::Failure => tracing::warn!("Contact submission was not delivered"),
        FormStatus::Idle | FormStatus::Submitting => {
            tracing::info!(errors = ?contact_form.errors(), "Contact submission failed validation")
        }
    }

    page_response(response_status(status), &contact_form)
}
