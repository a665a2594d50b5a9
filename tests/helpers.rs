use once_cell::sync::Lazy;
use wiremock::MockServer;

use drawtogrow::config::get_configuration;
use drawtogrow::startup::AppServer;
use drawtogrow::telemetry::{get_subscriber, init_subscriber};

pub const INTAKE_PATH: &str = "/f/test-form";

// Logs stay quiet unless `TEST_LOG` is set, e.g. `TEST_LOG=true cargo test | bunyan`.
static TRACING: Lazy<()> = Lazy::new(|| {
    let subscriber_name = "test".to_string();
    let default_filter_level = "debug".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout,
        ))
        .expect("Failed to install the test subscriber");
    } else {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink,
        ))
        .expect("Failed to install the test subscriber");
    }
});

pub struct TestApp {
    pub addr: String,
    pub port: u16,
    pub intake_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_landing(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/", &self.addr))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact(&self, body: &str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/contact", &self.addr))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    let intake_server = MockServer::start().await;
    let endpoint = format!("{}{}", intake_server.uri(), INTAKE_PATH);
    spawn_app_with_intake(intake_server, endpoint).await
}

/// Same as `spawn_app`, but the service posts submissions to `endpoint`.
pub async fn spawn_app_with_intake(intake_server: MockServer, endpoint: String) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = 0;
        c.intake.endpoint = endpoint;
        c.intake.timeout_milliseconds = Some(2_000);
        c
    };

    let server = AppServer::build(configuration)
        .await
        .expect("Failed to build the application.");

    let port = server.port();
    let addr = format!("http://{}", server.to_server_address());
    let _ = tokio::spawn(server.run_until_stopped());

    TestApp {
        addr,
        port,
        intake_server,
        api_client: reqwest::Client::new(),
    }
}
