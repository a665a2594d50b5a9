use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::intake::Intake;
use crate::routes::contact::contact;
use crate::routes::health::health_check;
use crate::routes::landing::landing_page;

pub fn run(listener: TcpListener, intake: Arc<dyn Intake>) -> Result<Server, std::io::Error> {
    let intake: web::Data<dyn Intake> = web::Data::from(intake);
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(landing_page))
            .route("/contact", web::post().to(contact))
            .route("/health", web::get().to(health_check))
            .app_data(intake.clone())
    })
    .listen(listener)?
    .run())
}
