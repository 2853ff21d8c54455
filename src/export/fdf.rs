//! FDF (Forms Data Format) serialization
//!
//! Produces the field-value dataset consumed by `pdftk fill_form`. Field names
//! and values are PDF literal strings in UTF-16BE with a byte-order mark.

use crate::models::DataRow;
use std::path::Path;

const FDF_HEADER: &[u8] = b"%FDF-1.2\n%\xe2\xe3\xcf\xd3\r\n1 0 obj\n<</FDF<</Fields[";
const FDF_TRAILER: &[u8] = b"]\n>>\n>>\nendobj\ntrailer\n\n<<\n/Root 1 0 R\n>>\n%%EOF\n\n";
const UTF16_BE_BOM: [u8; 2] = [0xfe, 0xff];

/// Serializes data rows to FDF
#[derive(Debug, Default, Clone, Copy)]
pub struct FdfWriter;

impl FdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Encode every cell of `row` as an FDF text field, in column order
    pub fn encode(&self, row: &DataRow) -> Vec<u8> {
        let mut out = Vec::with_capacity(FDF_HEADER.len() + FDF_TRAILER.len() + row.len() * 64);
        out.extend_from_slice(FDF_HEADER);
        for (name, value) in row.iter() {
            out.extend_from_slice(b"<</T(");
            push_literal(&mut out, name);
            out.extend_from_slice(b")/V(");
            push_literal(&mut out, value);
            out.extend_from_slice(b")>>\n");
        }
        out.extend_from_slice(FDF_TRAILER);
        out
    }

    /// Encode `row` and write it to `path`
    pub fn write_to_path(&self, row: &DataRow, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.encode(row))
    }
}

/// Append a UTF-16BE literal string body, escaping delimiter and end-of-line bytes
///
/// A raw CR or LF inside a literal string is read back as LF, so both are
/// written as escape sequences.
fn push_literal(out: &mut Vec<u8>, text: &str) {
    out.extend_from_slice(&UTF16_BE_BOM);
    for unit in text.encode_utf16() {
        for byte in unit.to_be_bytes() {
            match byte {
                b'(' | b')' | b'\\' => out.extend_from_slice(&[b'\\', byte]),
                b'\r' => out.extend_from_slice(b"\\r"),
                b'\n' => out.extend_from_slice(b"\\n"),
                _ => out.push(byte),
            }
        }
    }
}
