//! HTTP request parsing: every supported encoding yields the same result.

#![cfg(feature = "request")]

use http::Request;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use pretty_assertions::assert_eq;
use rstest::rstest;
use ursa_validator::prelude::*;

const BOUNDARY: &str = "ursa-boundary";

fn schema() -> ObjectValidator {
    object()
        .field("Name", string().rule(min_length(3)))
        .field("Count", int().rule(min(1_i64)))
        .field("Agree", boolean())
        .build()
}

fn multipart_body(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut body = String::new();
    for (name, value) in parts {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body.into_bytes()
}

fn post(content_type: &str, body: Vec<u8>) -> Request<std::io::Cursor<Vec<u8>>> {
    Request::post("/submit")
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, body.len().to_string())
        .body(std::io::Cursor::new(body))
        .unwrap()
}

fn json_request() -> Request<std::io::Cursor<Vec<u8>>> {
    post(
        "application/json; charset=utf-8",
        br#"{"Name":"Ursa","Count":5,"Agree":true}"#.to_vec(),
    )
}

fn form_request() -> Request<std::io::Cursor<Vec<u8>>> {
    post(
        "application/x-www-form-urlencoded",
        b"Name=Ursa&Count=5&Agree=true".to_vec(),
    )
}

fn multipart_request() -> Request<std::io::Cursor<Vec<u8>>> {
    post(
        &format!("multipart/form-data; boundary={BOUNDARY}"),
        multipart_body(&[("Name", "Ursa"), ("Count", "5"), ("Agree", "true")]),
    )
}

fn query_request() -> Request<std::io::Cursor<Vec<u8>>> {
    Request::get("/submit?Name=Ursa&Count=5&Agree=true")
        .body(std::io::Cursor::new(Vec::new()))
        .unwrap()
}

#[rstest]
#[case::json(json_request())]
#[case::form(form_request())]
#[case::multipart(multipart_request())]
#[case::query(query_request())]
fn encodings_are_equivalent(#[case] request: Request<std::io::Cursor<Vec<u8>>>) {
    let result = schema().parse_request(request);
    assert!(result.is_valid(), "{}", result.error_message());
    assert_eq!(result.get_string("Name"), "Ursa");
    assert_eq!(result.get_int("Count"), 5);
    assert!(result.get_bool("Agree"));
}

#[test]
fn form_rule_failures_are_reported() {
    let result = schema().parse_request(post(
        "application/x-www-form-urlencoded",
        b"Name=Ur&Count=0".to_vec(),
    ));
    assert_eq!(result.error_message(), "string too short, number too small");
}

#[test]
fn form_body_wins_over_query() {
    let request = Request::post("/submit?Name=FromQuery&Count=9")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(std::io::Cursor::new(b"Name=FromBody".to_vec()))
        .unwrap();
    let result = schema().parse_request(request);
    assert_eq!(result.get_string("Name"), "FromBody");
    assert_eq!(result.get_int("Count"), 9);
}

#[test]
fn declared_length_over_limit() {
    let v = object().field("Name", string()).max_body_size(8).build();
    let result = v.parse_request(json_request());
    assert_eq!(result.errors().len(), 1);
    assert!(result.errors()[0].is(ErrorKind::BodyTooLarge));
    assert_eq!(result.error_message(), "request body too large");
}

#[test]
fn undeclared_length_over_limit() {
    let v = object()
        .field("Name", string())
        .limits(RequestLimits::new(8))
        .build();
    let request = Request::post("/")
        .header(CONTENT_TYPE, "application/json")
        .body(std::io::Cursor::new(br#"{"Name":"far too long"}"#.to_vec()))
        .unwrap();
    let result = v.parse_request(request);
    assert!(result.errors()[0].is(ErrorKind::BodyTooLarge));
}

#[test]
fn short_body_is_size_mismatch() {
    let request = Request::post("/")
        .header(CONTENT_TYPE, "application/json")
        .header(CONTENT_LENGTH, "100")
        .body(std::io::Cursor::new(b"{}".to_vec()))
        .unwrap();
    let result = schema().parse_request(request);
    assert!(result.errors()[0].is(ErrorKind::BodySizeMismatch));
    assert_eq!(result.error_message(), "request body size mismatch");
}

#[test]
fn unsupported_content_type() {
    let result = schema().parse_request(post("text/plain", b"Name=Ursa".to_vec()));
    assert!(result.errors()[0].is(ErrorKind::UnsupportedContentType));
    assert_eq!(result.errors()[0].param("content_type"), Some("text/plain"));
}

#[test]
fn malformed_multipart() {
    let result = schema().parse_request(post(
        &format!("multipart/form-data; boundary={BOUNDARY}"),
        b"garbage".to_vec(),
    ));
    assert!(result.errors()[0].is(ErrorKind::MalformedPayload));
    assert_eq!(result.error_message(), "parsing multipart form");
}

#[test]
fn multipart_files() {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"Title\"\r\n\r\n\
         report\r\n\
         --{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"Attachments\"; filename=\"a.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         0123456789\r\n\
         --{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"Attachments\"; filename=\"b.txt\"\r\n\r\n\
         tiny\r\n\
         --{BOUNDARY}--\r\n"
    );
    let v = object()
        .field("Title", string().required())
        .field(
            "Attachments",
            files().rule(max_file_count(2)).rule(max_file_size(8)),
        )
        .build();

    let result = v.parse_request(post(
        &format!("multipart/form-data; boundary={BOUNDARY}"),
        body.into_bytes(),
    ));
    assert_eq!(result.get_string("Title"), "report");
    assert_eq!(result.field_error("Attachments"), "file too large");
    assert_eq!(result.errors()[0].param("file"), Some("a.txt"));

    let Some(Value::Files(uploads)) = result.value("Attachments") else {
        panic!("expected files");
    };
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0].content_type.as_deref(), Some("text/plain"));
    assert_eq!(uploads[1].data, b"tiny");
}
