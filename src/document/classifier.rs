//! Total classification of a selected file into a closed set of kinds.

/// Declared media type of PDF documents.
pub const PDF_MIME: &str = "application/pdf";

/// Declared media type of plain text files.
pub const TEXT_MIME: &str = "text/plain";

/// The formats the preview distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
    Unsupported,
}

/// Classify a file by its declared media type and name.
///
/// PDF when the declared type is the PDF media type; plain text when
/// the declared type is `text/plain` or the name has a `.txt`
/// extension (case-insensitive); everything else is unsupported.
/// Total: always resolves, never fails.
pub fn classify(mime_hint: &str, name: &str) -> DocumentKind {
    if mime_hint == PDF_MIME {
        return DocumentKind::Pdf;
    }
    if mime_hint == TEXT_MIME || name.to_ascii_lowercase().ends_with(".txt") {
        return DocumentKind::PlainText;
    }
    DocumentKind::Unsupported
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_mime_classifies_as_pdf() {
        assert_eq!(classify("application/pdf", "report"), DocumentKind::Pdf);
        assert_eq!(classify("application/pdf", "report.pdf"), DocumentKind::Pdf);
    }

    #[test]
    fn text_mime_classifies_as_plain_text() {
        assert_eq!(classify("text/plain", "notes.md"), DocumentKind::PlainText);
    }

    #[test]
    fn txt_extension_wins_regardless_of_mime() {
        assert_eq!(
            classify("application/octet-stream", "NOTES.TXT"),
            DocumentKind::PlainText
        );
        assert_eq!(classify("", "a.Txt"), DocumentKind::PlainText);
    }

    #[test]
    fn everything_else_is_unsupported() {
        assert_eq!(classify("image/png", "photo.png"), DocumentKind::Unsupported);
        assert_eq!(classify("", "archive.zip"), DocumentKind::Unsupported);
        assert_eq!(classify("", ""), DocumentKind::Unsupported);
    }

    #[test]
    fn txt_substring_without_extension_is_not_text() {
        assert_eq!(classify("", "txt-notes.bin"), DocumentKind::Unsupported);
    }
}
