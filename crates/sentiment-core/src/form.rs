use std::path::Path;

use reqwest::blocking::multipart::{Form, Part};

use crate::consts::{CSV_MIME, FILE_FIELD, TEXT_FIELD};
use crate::error::Result;

/// A CSV file selected for upload, held in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CsvUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk. The content is not inspected.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.csv".to_string());
        Ok(Self { file_name, bytes })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Everything the user has entered at the time of submission.
///
/// Both fields may be present together; each is sent when set, mirroring a
/// browser form with a text box and a file input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionForm {
    pub text: String,
    pub file: Option<CsvUpload>,
}

impl SubmissionForm {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            file: None,
        }
    }

    pub fn file(upload: CsvUpload) -> Self {
        Self {
            text: String::new(),
            file: Some(upload),
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// True when neither field would be sent.
    pub fn is_empty(&self) -> bool {
        !self.has_text() && self.file.is_none()
    }

    /// Names of the fields that [`Self::to_multipart`] will include.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(2);
        if self.has_text() {
            names.push(TEXT_FIELD);
        }
        if self.file.is_some() {
            names.push(FILE_FIELD);
        }
        names
    }

    pub fn to_multipart(&self) -> Result<Form> {
        let mut form = Form::new();
        if self.has_text() {
            form = form.text(TEXT_FIELD, self.text.clone());
        }
        if let Some(ref upload) = self.file {
            let part = Part::bytes(upload.bytes.clone())
                .file_name(upload.file_name.clone())
                .mime_str(CSV_MIME)?;
            form = form.part(FILE_FIELD, part);
        }
        Ok(form)
    }
}
