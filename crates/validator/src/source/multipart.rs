//! `multipart/form-data` bodies.
//!
//! The body is already buffered, so the multer stream is driven to
//! completion on the current thread. Text parts keep their first value;
//! file parts under one name are collected into a single file list.

use std::io;

use bytes::Bytes;
use futures::executor::block_on;
use futures::stream;
use indexmap::IndexMap;
use indexmap::map::Entry;
use multer::Multipart;

use super::SourceError;
use crate::foundation::{FileUpload, Value};

fn multipart_error(error: multer::Error) -> SourceError {
    SourceError::Multipart(Box::new(error))
}

/// Decodes `body` using the boundary declared in `content_type`.
pub(crate) fn decode(
    body: Vec<u8>,
    content_type: &str,
) -> Result<IndexMap<String, Value>, SourceError> {
    let boundary = multer::parse_boundary(content_type).map_err(multipart_error)?;
    let chunks = stream::iter([Ok::<Bytes, io::Error>(Bytes::from(body))]);
    let mut multipart = Multipart::new(chunks, boundary);

    block_on(async move {
        let mut record = IndexMap::new();
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if let Some(file_name) = field.file_name().map(str::to_owned) {
                let content_type = field.content_type().map(ToString::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                let upload = FileUpload::new(file_name, content_type, data.to_vec());
                match record.entry(name) {
                    Entry::Vacant(slot) => {
                        slot.insert(Value::Files(vec![upload]));
                    }
                    Entry::Occupied(mut slot) => {
                        if let Value::Files(files) = slot.get_mut() {
                            files.push(upload);
                        }
                    }
                }
            } else {
                let text = field.text().await.map_err(multipart_error)?;
                record.entry(name).or_insert(Value::Text(text));
            }
        }
        tracing::trace!(fields = record.len(), "multipart body decoded");
        Ok(record)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT_TYPE: &str = "multipart/form-data; boundary=X-BOUNDARY";

    fn body(parts: &[&str]) -> Vec<u8> {
        let mut out = String::new();
        for part in parts {
            out.push_str("--X-BOUNDARY\r\n");
            out.push_str(part);
            out.push_str("\r\n");
        }
        out.push_str("--X-BOUNDARY--\r\n");
        out.into_bytes()
    }

    #[test]
    fn test_text_and_files() {
        let payload = body(&[
            "Content-Disposition: form-data; name=\"Name\"\r\n\r\nabc",
            "Content-Disposition: form-data; name=\"Name\"\r\n\r\nignored",
            "Content-Disposition: form-data; name=\"Docs\"; filename=\"a.txt\"\r\nContent-Type: text/plain\r\n\r\nhello",
            "Content-Disposition: form-data; name=\"Docs\"; filename=\"b.txt\"\r\n\r\nworld!",
        ]);

        let record = decode(payload, CONTENT_TYPE).unwrap();
        assert_eq!(record["Name"], Value::from("abc"));

        let Value::Files(files) = &record["Docs"] else {
            panic!("expected files");
        };
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name, "a.txt");
        assert_eq!(files[0].content_type.as_deref(), Some("text/plain"));
        assert_eq!(files[0].data, b"hello");
        assert_eq!(files[1].size(), 6);
    }

    #[test]
    fn test_missing_boundary() {
        let error = decode(Vec::new(), "multipart/form-data").unwrap_err();
        assert!(matches!(error, SourceError::Multipart(_)));
    }
}
