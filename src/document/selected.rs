use std::path::Path;

/// An owned snapshot of one selected file.
///
/// Replaced wholesale whenever a new file is selected; never mutated
/// in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDocument {
    pub name: String,
    pub byte_size: u64,
    pub mime_hint: String,
    pub raw_bytes: Vec<u8>,
}

impl SelectedDocument {
    /// Build a document from a path and its raw bytes. The mime hint
    /// is derived from the file extension.
    pub fn from_path(path: &Path, raw_bytes: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_hint = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("")
            .to_string();
        Self {
            name,
            byte_size: raw_bytes.len() as u64,
            mime_hint,
            raw_bytes,
        }
    }
}

/// Human-readable byte size (two decimals, 1024 steps).
pub fn format_byte_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let exponent = (bytes as f64).log(1024.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    if exponent == 0 {
        format!("{} {}", bytes, UNITS[exponent])
    } else {
        format!("{:.2} {}", value, UNITS[exponent])
    }
}
