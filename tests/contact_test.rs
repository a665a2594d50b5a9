use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{spawn_app, spawn_app_with_intake, INTAKE_PATH};

mod helpers;

const THANK_YOU: &str = "Thank you for your message!";
const SOMETHING_WENT_WRONG: &str = "Something went wrong. Please try again or email me directly.";

#[tokio::test]
async fn contact_forwards_exactly_the_entered_fields_as_json() {
    let app = spawn_app().await;

    Mock::given(path(INTAKE_PATH))
        .and(method("POST"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "Jane",
            "email": "jane@example.com",
            "newsletter": false,
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.intake_server)
        .await;

    let response = app.post_contact("name=Jane&email=jane%40example.com").await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn contact_forwards_the_optional_fields_when_present() {
    let app = spawn_app().await;

    Mock::given(path(INTAKE_PATH))
        .and(method("POST"))
        .and(body_json(serde_json::json!({
            "name": "Jane",
            "email": "jane@example.com",
            "newsletter": true,
            "message": "Do you run weekend sessions?",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.intake_server)
        .await;

    let body = "name=Jane&email=jane%40example.com&newsletter=on\
                &message=Do%20you%20run%20weekend%20sessions%3F";
    let response = app.post_contact(body).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn a_successful_submission_thanks_the_visitor_and_clears_the_form() {
    let app = spawn_app().await;

    Mock::given(path(INTAKE_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.intake_server)
        .await;

    let response = app
        .post_contact("name=Jane&email=jane%40example.com&newsletter=on&message=Hi")
        .await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("banner-success"));
    assert!(html.contains(THANK_YOU));
    assert!(html.contains(r#"name="name" value="""#));
    assert!(html.contains(r#"name="email" value="""#));
    assert!(html.contains(r#"<input type="checkbox" id="newsletter" name="newsletter">"#));
    assert!(html.contains(r#"rows="5"></textarea>"#));
}

#[tokio::test]
async fn a_server_error_shows_the_generic_failure_and_keeps_the_fields() {
    let app = spawn_app().await;

    Mock::given(path(INTAKE_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.intake_server)
        .await;

    let response = app
        .post_contact("name=Jane&email=jane%40example.com&message=Hi%20there")
        .await;

    assert_eq!(502, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("banner-failure"));
    assert!(html.contains(SOMETHING_WENT_WRONG));
    assert!(!html.contains(THANK_YOU));
    assert!(html.contains(r#"name="name" value="Jane""#));
    assert!(html.contains(r#"name="email" value="jane@example.com""#));
    assert!(html.contains(r#"rows="5">Hi there</textarea>"#));
}

#[tokio::test]
async fn an_unreachable_intake_looks_the_same_as_a_server_error() {
    // take a free port and release it again so nothing listens there
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let unused_server = MockServer::start().await;
    let app = spawn_app_with_intake(
        unused_server,
        format!("http://127.0.0.1:{}{}", port, INTAKE_PATH),
    )
    .await;

    let response = app
        .post_contact("name=Jane&email=jane%40example.com")
        .await;

    assert_eq!(502, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(SOMETHING_WENT_WRONG));
    assert!(html.contains(r#"name="name" value="Jane""#));
}

#[tokio::test]
async fn a_whitespace_only_name_is_forwarded_as_entered() {
    let app = spawn_app().await;

    Mock::given(path(INTAKE_PATH))
        .and(method("POST"))
        .and(body_json(serde_json::json!({
            "name": "  ",
            "email": "jane@example.com",
            "newsletter": false,
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.intake_server)
        .await;

    let response = app.post_contact("name=%20%20&email=jane%40example.com").await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn invalid_submissions_are_rejected_without_calling_the_intake() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.intake_server)
        .await;

    let test_cases = vec![
        ("name=&email=jane%40example.com", "Name is required", "empty name"),
        ("name=Jane&email=", "Email is required", "empty email"),
        (
            "name=Jane&email=definitely-not-an-email",
            "Invalid email address",
            "invalid email",
        ),
        ("name=Jane&email=jane%20doe%40example.com", "Invalid email address", "email with a space"),
    ];

    for (body, message, description) in test_cases {
        let response = app.post_contact(body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The service did not return a 400 Bad Request when the payload had {}.",
            description,
        );
        let html = response.text().await.unwrap();
        assert!(
            html.contains(message),
            "The page did not explain the problem when the payload had {}.",
            description,
        );
    }
}

#[tokio::test]
async fn missing_fields_are_reported_inline() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.intake_server)
        .await;

    let test_cases = vec![
        ("name=Jane", "missing the email"),
        ("email=jane%40example.com", "missing the name"),
        ("", "missing both name and email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_contact(body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The service did not fail with 400 Bad Request when the payload was {}.",
            description,
        );
        let html = response.text().await.unwrap();
        assert!(html.contains(r#"class="field-error""#));
    }
}
