// POST /overlay

use reqwest::multipart::Form;
use serde_json::Value;

use super::test_harness::{image_part, png_bytes, TestServer};

const QUOTE: &str = "The only way to do great work is to love what you do";

fn overlay_form(image: Vec<u8>, mime: &str) -> Form {
    Form::new()
        .part("image", image_part(image, "photo.png", mime))
        .text("quote", QUOTE)
        .text("attribution", "Steve Jobs")
}

#[tokio::test]
async fn test_overlay_returns_jpeg_of_same_size() {
    let server = TestServer::start(&[]).await;

    let response = server
        .client
        .post(server.url("/overlay"))
        .multipart(overlay_form(png_bytes(1000, 800, [255, 255, 255]), "image/png"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let headers = response.headers().clone();
    assert_eq!(headers.get("content-type").unwrap(), "image/jpeg");
    assert_eq!(
        headers.get("content-disposition").unwrap(),
        "attachment; filename=\"overlay.jpg\""
    );

    let body = response.bytes().await.unwrap();
    let decoded = image::load_from_memory(&body).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1000, 800));
    assert_eq!(
        image::guess_format(&body).unwrap(),
        image::ImageFormat::Jpeg
    );
}

#[tokio::test]
async fn test_overlay_accepts_file_field_name() {
    let server = TestServer::start(&[]).await;

    let form = Form::new()
        .part("file", image_part(png_bytes(64, 48, [0, 0, 0]), "tiny.png", "image/png"))
        .text("quote", "")
        .text("attribution", "");
    let response = server
        .client
        .post(server.url("/overlay"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let decoded = image::load_from_memory(&response.bytes().await.unwrap()).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (64, 48));
}

#[tokio::test]
async fn test_overlay_with_font_that_fails_to_load_falls_back() {
    let server = TestServer::start(&["Lato.ttf"]).await;

    let form = overlay_form(png_bytes(320, 240, [200, 30, 30]), "image/png").text("font", "lato");
    let response = server
        .client
        .post(server.url("/overlay"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_non_image_content_type_is_rejected() {
    let server = TestServer::start(&[]).await;

    let form = Form::new()
        .part("image", image_part(b"hello".to_vec(), "notes.txt", "text/plain"))
        .text("quote", QUOTE)
        .text("attribution", "Steve Jobs");
    let response = server
        .client
        .post(server.url("/overlay"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("image"));
}

#[tokio::test]
async fn test_unknown_font_is_rejected_with_available_fonts() {
    let server = TestServer::start(&["Lato.ttf", "Roboto.ttf"]).await;

    let form =
        overlay_form(png_bytes(100, 100, [255, 255, 255]), "image/png").text("font", "nonexistent");
    let response = server
        .client
        .post(server.url("/overlay"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("nonexistent"));
    assert_eq!(body["available_fonts"], serde_json::json!(["lato", "roboto"]));
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let server = TestServer::start(&[]).await;

    let cases = vec![
        Form::new()
            .text("quote", QUOTE)
            .text("attribution", "Steve Jobs"),
        Form::new()
            .part("image", image_part(png_bytes(10, 10, [0, 0, 0]), "a.png", "image/png"))
            .text("attribution", "Steve Jobs"),
        Form::new()
            .part("image", image_part(png_bytes(10, 10, [0, 0, 0]), "a.png", "image/png"))
            .text("quote", QUOTE),
    ];

    for form in cases {
        let response = server
            .client
            .post(server.url("/overlay"))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("Invalid input"));
    }
}

#[tokio::test]
async fn test_undecodable_image_is_a_processing_failure() {
    let server = TestServer::start(&[]).await;

    let response = server
        .client
        .post(server.url("/overlay"))
        .multipart(overlay_form(b"not really a png".to_vec(), "image/png"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to decode image"));
}
