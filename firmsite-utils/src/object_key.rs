//! Collision-resistant object keys for uploaded media.

use chrono::Utc;
use uuid::Uuid;

/// Fallback extension when the uploaded filename carries none.
const DEFAULT_EXT: &str = "bin";

/// Build a storage key `{prefix}/{epoch_ms}_{suffix}.{ext}` where `suffix`
/// is a random 8-hex fragment and `ext` comes from the original filename.
pub fn generate(prefix: &str, original_filename: &str) -> String {
    let ext = extension_of(original_filename);
    let suffix = &Uuid::new_v4().simple().to_string()[..8];
    format!(
        "{}/{}_{}.{}",
        prefix.trim_matches('/'),
        Utc::now().timestamp_millis(),
        suffix,
        ext
    )
}

fn extension_of(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| DEFAULT_EXT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_original_extension_lowercased() {
        let key = generate("bg", "Header Photo.JPG");
        assert!(key.starts_with("bg/"));
        assert!(key.ends_with(".jpg"));
    }

    #[test]
    fn falls_back_when_extension_missing() {
        assert!(generate("bg", "noext").ends_with(".bin"));
        assert!(generate("bg", ".hidden").ends_with(".bin"));
    }

    #[test]
    fn two_keys_for_the_same_file_differ() {
        let a = generate("bg", "x.png");
        let b = generate("bg", "x.png");
        assert_ne!(a, b);
    }
}
