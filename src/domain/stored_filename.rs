use std::path::Path;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generates the on-disk name for an upload: `<timestamp>_<8 hex chars><ext>`.
///
/// The extension is taken verbatim from the original filename (including the
/// leading dot) so the stored file keeps its type; names without an extension
/// get none.
pub fn generate_stored_filename(original_filename: &str, now: DateTime<Utc>) -> String {
    let timestamp = now.format("%Y-%m-%d_%H-%M-%S");
    let suffix = Uuid::new_v4().simple().to_string();
    let extension = file_extension(original_filename)
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    format!("{}_{}{}", timestamp, &suffix[..8], extension)
}

pub fn file_extension(filename: &str) -> Option<&str> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
}
