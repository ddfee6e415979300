use std::collections::HashMap;
use std::time::Duration;

use crate::helpers::{error_count, spawn_app, spawn_app_with};

fn contact_body(
    first_name: &str,
    last_name: &str,
    email: &str,
    message: &str,
) -> HashMap<&'static str, String> {
    HashMap::from([
        ("firstName", first_name.to_string()),
        ("lastName", last_name.to_string()),
        ("email", email.to_string()),
        ("message", message.to_string()),
    ])
}

#[tokio::test]
async fn the_contact_form_renders_without_errors() {
    let app = spawn_app().await;

    let html_page = app.get_contact_html().await;

    assert!(html_page.contains("<h1>Contact Form</h1>"));
    assert!(html_page.contains("First Name*"));
    assert!(html_page.contains("Last Name*"));
    assert!(html_page.contains("Email*"));
    assert!(html_page.contains("Message"));
    assert_eq!(error_count(&html_page), 0);
    assert!(!html_page.contains("You Submitted:"));
}

#[tokio::test]
async fn a_short_first_name_renders_one_error() {
    let app = spawn_app().await;

    let html_page = app.change_field_html("firstName", "Josh").await;

    assert_eq!(error_count(&html_page), 1);
    assert!(html_page.contains("firstName must have at least 5 characters"));
    assert!(html_page.contains(r#"value="Josh""#));
}

#[tokio::test]
async fn submitting_an_empty_form_renders_three_errors() {
    let app = spawn_app().await;

    let html_page = app.submit_contact_html(&contact_body("", "", "", "")).await;

    assert_eq!(error_count(&html_page), 3);
    assert!(html_page.contains("firstName is a required field"));
    assert!(html_page.contains("email is a required field"));
}

#[tokio::test]
async fn missing_fields_in_the_body_count_as_empty() {
    let app = spawn_app().await;

    let no_fields: [(&str, &str); 0] = [];
    let html_page = app.submit_contact_html(&no_fields).await;

    assert_eq!(error_count(&html_page), 3);
}

#[tokio::test]
async fn a_missing_email_renders_one_error() {
    let app = spawn_app().await;

    let html_page = app
        .submit_contact_html(&contact_body("Joshua", "Burnett", "", ""))
        .await;

    assert_eq!(error_count(&html_page), 1);
    assert!(html_page.contains("Error: email is a required field"));
}

#[tokio::test]
async fn an_invalid_email_renders_the_format_error() {
    let app = spawn_app().await;

    let html_page = app.change_field_html("email", "not an email").await;

    assert!(html_page.contains("email must be a valid email address"));
    assert_eq!(error_count(&html_page), 1);
}

#[tokio::test]
async fn a_missing_last_name_renders_the_required_error() {
    let app = spawn_app().await;

    let html_page = app
        .submit_contact_html(&contact_body("Joshua", "", "11riku99@gmail.com", ""))
        .await;

    assert_eq!(error_count(&html_page), 1);
    let last_name_error = r#"<p data-testid="error">Error: lastName is a required field</p>"#;
    assert!(html_page.contains(last_name_error));
}

#[tokio::test]
async fn a_valid_submission_without_message_is_displayed() {
    let app = spawn_app().await;

    let html_page = app
        .submit_contact_html(&contact_body("Joshua", "Burnett", "11riku99@gmail.com", ""))
        .await;

    assert_eq!(error_count(&html_page), 0);
    assert!(html_page.contains("First Name: Joshua"));
    assert!(html_page.contains("Last Name: Burnett"));
    assert!(html_page.contains("Email: 11riku99@gmail.com"));
    assert!(!html_page.contains(r#"data-testid="messageDisplay""#));
}

#[tokio::test]
async fn a_valid_submission_with_message_displays_every_field() {
    let app = spawn_app().await;

    let html_page = app
        .submit_contact_html(&contact_body(
            "Joshua",
            "Burnett",
            "11riku99@gmail.com",
            "This is a message",
        ))
        .await;

    assert!(html_page.contains("First Name: Joshua"));
    assert!(html_page.contains("Last Name: Burnett"));
    assert!(html_page.contains("Email: 11riku99@gmail.com"));
    let message_display = r#"<p data-testid="messageDisplay">Message: This is a message</p>"#;
    assert!(html_page.contains(message_display));
}

#[tokio::test]
async fn the_inputs_are_cleared_after_a_valid_submission() {
    let app = spawn_app().await;

    let html_page = app
        .submit_contact_html(&contact_body("Joshua", "Burnett", "11riku99@gmail.com", ""))
        .await;

    assert!(!html_page.contains(r#"value="Joshua""#));
    assert!(html_page.contains(r#"id="firstName" name="firstName" placeholder="Edd" value="""#));
}

#[tokio::test]
async fn the_last_submission_survives_a_rejected_submit() {
    let app = spawn_app().await;
    app.submit_contact_html(&contact_body("Joshua", "Burnett", "11riku99@gmail.com", ""))
        .await;

    let html_page = app
        .submit_contact_html(&contact_body("Jo", "Burnett", "11riku99@gmail.com", ""))
        .await;

    assert_eq!(error_count(&html_page), 1);
    assert!(html_page.contains("First Name: Joshua"));
    assert!(html_page.contains(r#"value="Jo""#));
}

#[tokio::test]
async fn field_changes_are_kept_per_visitor() {
    let app = spawn_app().await;
    app.change_field_html("firstName", "Josh").await;

    let stranger = reqwest::Client::new();
    let html_page = stranger
        .get(format!("{}/", &app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .text()
        .await
        .unwrap();

    assert_eq!(error_count(&html_page), 0);
    assert!(!html_page.contains(r#"value="Josh""#));
}

#[tokio::test]
async fn an_unknown_field_is_rejected() {
    let app = spawn_app().await;

    let response = app.post_field_change("phone", "555-0100").await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn an_inactive_session_expires_and_the_form_starts_over() {
    let app = spawn_app_with(|c| c.session.inactivity_timeout_seconds = 2).await;
    let html_page = app.change_field_html("firstName", "Josh").await;
    assert_eq!(error_count(&html_page), 1);

    tokio::time::sleep(Duration::from_secs(3)).await;

    let html_page = app.get_contact_html().await;
    assert_eq!(error_count(&html_page), 0);
    assert!(!html_page.contains(r#"value="Josh""#));
}
