use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use anyhow::Context;

use crate::config::Configuration;
use crate::intake::IntakeClient;
use crate::run::run;

pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
}

impl AppServer {
    pub async fn build(configuration: Configuration) -> Result<Self, anyhow::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        ))
        .context("Failed to bind the application address")?;

        let port = listener.local_addr()?.port();
        tracing::info!(
            "Starting service on address: {}:{}",
            configuration.application.host,
            port
        );

        let intake = IntakeClient::new(&configuration.intake)
            .context("Failed to build the intake HTTP client")?;
        tracing::info!(endpoint = %intake.endpoint(), "Contact submissions go to the intake endpoint");

        let server = run(listener, Arc::new(intake))?;

        Ok(Self {
            port,
            address: configuration.application.host,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
