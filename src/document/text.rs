//! Plain-text decoding for the text preview.

/// Decoded text content with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContent {
    pub content: String,
    /// Unicode scalar count of the decoded content.
    pub char_count: usize,
    /// Count of `\n`-delimited segments.
    pub line_count: usize,
}

/// Decode raw bytes as UTF-8, replacing invalid sequences.
///
/// Counts are computed on the decoded content before sanitization, so
/// they reflect what was actually in the file. The returned content is
/// sanitized for terminal display: tabs expanded, carriage returns and
/// other control characters dropped. File content must never reach the
/// terminal as raw control sequences.
pub fn decode_text(bytes: &[u8]) -> TextContent {
    let (decoded, _, _) = encoding_rs::UTF_8.decode(bytes);
    let char_count = decoded.chars().count();
    let line_count = decoded.split('\n').count();
    TextContent {
        content: sanitize(&decoded),
        char_count,
        line_count,
    }
}

fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push('\n'),
            '\t' => out.push_str("    "),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}
