//! src/routes/landing

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use crate::domain::ContactForm;

mod render;

pub use render::render_page;

pub async fn landing_page() -> HttpResponse {
    page_response(StatusCode::OK, &ContactForm::default())
}

/// The whole landing page with `form` rendered in its current state.
pub fn page_response(status: StatusCode, form: &ContactForm) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(render_page(form))
}
