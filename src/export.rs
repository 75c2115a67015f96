//! Export helpers - preview data URIs, download blobs and output file names.

use crate::types::Mode;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in an SVG data URI
const DATA_URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'\'')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'[')
    .add(b']');

/// URL-encoded `data:image/svg+xml` URI for previews
pub fn to_data_uri(markup: &str) -> String {
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        utf8_percent_encode(markup, DATA_URI)
    )
}

/// UTF-8 bytes ready to be written or offered as a download
pub fn to_blob(markup: &str) -> Vec<u8> {
    markup.as_bytes().to_vec()
}

/// `<stem>-<mode>.svg` for a recolored copy of `source_name`.
///
/// Only the last path component of `source_name` is kept.
pub fn export_file_name(source_name: &str, mode: Mode) -> String {
    let base = source_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(source_name);
    let stem = match base.rfind('.') {
        Some(dot) if dot > 0 && base[dot + 1..].eq_ignore_ascii_case("svg") => &base[..dot],
        _ => base,
    };
    let stem = if stem.trim().is_empty() { "icon" } else { stem };
    format!("{}-{}.svg", stem, mode)
}
