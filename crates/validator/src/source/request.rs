//! HTTP request extraction
//!
//! The media type (the `Content-Type` value up to the first `;`, trimmed and
//! lowercased) selects the decoder:
//!
//! | Media type                          | Source                          |
//! |-------------------------------------|---------------------------------|
//! | `application/json`                  | body as a JSON object           |
//! | `application/x-www-form-urlencoded` | body pairs, then query pairs    |
//! | `multipart/form-data`               | text and file parts, then query |
//! | anything, on `GET`/`HEAD`           | query pairs                     |
//! | none, with an empty body            | query pairs                     |
//!
//! Everything else is rejected as an unsupported content type. A declared
//! `Content-Length` above the limit is rejected before the body is touched.

use std::io::{self, Read};

use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, Method, Request};
use indexmap::IndexMap;

use super::{SourceError, form, json, multipart};
use crate::config::RequestLimits;
use crate::foundation::Value;

/// Reads and decodes `request` into a record.
#[tracing::instrument(level = "debug", skip_all, fields(method = %request.method()))]
pub fn extract<B: Read>(
    request: Request<B>,
    limits: &RequestLimits,
) -> Result<IndexMap<String, Value>, SourceError> {
    let (parts, mut body) = request.into_parts();
    let content_type = header_str(&parts.headers, CONTENT_TYPE.as_str());
    let media = content_type.map(media_type);
    let declared = declared_length(&parts.headers);
    let query = parts.uri.query();
    tracing::debug!(content_type = ?media, declared, "dispatching request");

    if let Some(length) = declared.filter(|length| *length > limits.max_body_size) {
        tracing::debug!(length, limit = limits.max_body_size, "declared body exceeds limit");
        return Err(SourceError::BodyTooLarge {
            limit: limits.max_body_size,
        });
    }

    match media.as_deref() {
        Some("application/json") => {
            let buf = read_body(&mut body, declared, limits.max_body_size)?;
            json::decode_record(&buf)
        }
        Some("application/x-www-form-urlencoded") => {
            let buf = read_body(&mut body, declared, limits.max_body_size)?;
            Ok(form::decode(&buf, query))
        }
        Some("multipart/form-data") => {
            let buf = read_body(&mut body, declared, limits.max_body_size)?;
            let mut record = multipart::decode(buf, content_type.unwrap_or_default())?;
            if let Some(query) = query {
                form::merge_pairs(&mut record, query.as_bytes());
            }
            Ok(record)
        }
        _ if parts.method == Method::GET || parts.method == Method::HEAD => {
            Ok(form::decode(b"", query))
        }
        None if declared.unwrap_or(0) == 0 => Ok(form::decode(b"", query)),
        _ => Err(SourceError::UnsupportedContentType {
            content_type: media,
        }),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    header_str(headers, CONTENT_LENGTH.as_str()).and_then(|value| value.trim().parse().ok())
}

/// Reads exactly the declared length, or up to `limit` when undeclared.
fn read_body<B: Read>(
    body: &mut B,
    declared: Option<u64>,
    limit: u64,
) -> Result<Vec<u8>, SourceError> {
    if let Some(expected) = declared {
        let mut buf = vec![0; expected as usize];
        body.read_exact(&mut buf).map_err(|source| {
            if source.kind() == io::ErrorKind::UnexpectedEof {
                SourceError::SizeMismatch { expected, source }
            } else {
                SourceError::Read(source)
            }
        })?;
        return Ok(buf);
    }

    let mut buf = Vec::new();
    body.by_ref()
        .take(limit.saturating_add(1))
        .read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        return Err(SourceError::BodyTooLarge { limit });
    }
    Ok(buf)
}
