//! Rules over uploaded file lists.

use crate::foundation::{FileUpload, ParseError};

crate::rule! {
    /// Validates that at most `max` files were uploaded.
    #[derive(Copy, PartialEq, Eq)]
    pub MaxFileCount { max: usize } for [FileUpload];
    rule(self, input) { input.len() <= self.max }
    error(self, input) {
        ParseError::rule("max_file_count", "too many files")
            .with_param("max", self.max.to_string())
            .with_param("actual", input.len().to_string())
    }
    fn max_file_count(max: usize);
}

crate::rule! {
    /// Validates that every uploaded file is at most `max_bytes` long.
    #[derive(Copy, PartialEq, Eq)]
    pub MaxFileSize { max_bytes: u64 } for [FileUpload];
    rule(self, input) { input.iter().all(|file| file.size() <= self.max_bytes) }
    error(self, input) {
        let offender = input
            .iter()
            .find(|file| file.size() > self.max_bytes)
            .map(|file| file.file_name.clone())
            .unwrap_or_default();
        ParseError::rule("max_file_size", "file too large")
            .with_param("max", self.max_bytes.to_string())
            .with_param("file", offender)
    }
    fn max_file_size(max_bytes: u64);
}
