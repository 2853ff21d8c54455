//! Shared test fixtures

#![allow(dead_code)]

use form_writer::toolkit::{PdfToolkit, ToolError};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Dump with a text field and a button with two states
pub const NAME_AGE_DUMP: &str = "\r\n---\r\nFieldType: Text\r\nFieldName: Name\r\nFieldFlags: 0\r\nFieldJustification: Left\r\n---\r\nFieldType: Button\r\nFieldName: Age\r\nFieldFlags: 49152\r\nFieldValue: Young\r\nFieldJustification: Left\r\nFieldStateOption: Young\r\nFieldStateOption: Old\r\n";

/// One recorded fill_form call
#[derive(Debug, Clone)]
pub struct FillCall {
    pub template: PathBuf,
    pub data: PathBuf,
    pub data_bytes: Vec<u8>,
    pub output: PathBuf,
}

/// Fake toolkit returning a fixed dump and writing placeholder documents
#[derive(Default)]
pub struct RecordingToolkit {
    pub dump: String,
    /// Outputs whose file name contains one of these markers fail
    pub fail_when_output_contains: Vec<String>,
    pub calls: RefCell<Vec<FillCall>>,
}

impl RecordingToolkit {
    pub fn new(dump: &str) -> Self {
        Self {
            dump: dump.to_string(),
            ..Default::default()
        }
    }

    pub fn failing_on(mut self, marker: &str) -> Self {
        self.fail_when_output_contains.push(marker.to_string());
        self
    }

    pub fn calls(&self) -> Vec<FillCall> {
        self.calls.borrow().clone()
    }
}

impl PdfToolkit for RecordingToolkit {
    fn dump_fields(&self, _template: &Path) -> Result<String, ToolError> {
        Ok(self.dump.clone())
    }

    fn fill_form(&self, template: &Path, data: &Path, output: &Path) -> Result<(), ToolError> {
        let data_bytes = std::fs::read(data).unwrap_or_default();
        self.calls.borrow_mut().push(FillCall {
            template: template.to_path_buf(),
            data: data.to_path_buf(),
            data_bytes,
            output: output.to_path_buf(),
        });

        let name = output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self
            .fail_when_output_contains
            .iter()
            .any(|marker| name.contains(marker.as_str()))
        {
            return Err(ToolError::Failed {
                status: "exit status: 1".to_string(),
                stderr: "Error: Failed to open form data file".to_string(),
            });
        }

        std::fs::write(output, b"%PDF-1.4\n").map_err(|e| ToolError::Spawn(e.to_string()))
    }
}

/// Encode text the way FDF literal strings are written (UTF-16BE with BOM)
pub fn utf16(text: &str) -> Vec<u8> {
    let mut out = vec![0xfe, 0xff];
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
