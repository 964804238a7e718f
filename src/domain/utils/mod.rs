pub mod cleanup;
pub mod random;
pub mod retry;
pub mod temp_file;

use regex::Regex;
use std::sync::LazyLock;

const UNSAFE_FILENAME_RE: &str = r"[^A-Za-z0-9._-]";

pub static REGEX_COLLECTION: LazyLock<RegexCollection> = LazyLock::new(|| {
    let unsafe_filename = Regex::new(UNSAFE_FILENAME_RE).expect("Invalid regex");
    RegexCollection { unsafe_filename }
});

pub struct RegexCollection {
    pub unsafe_filename: Regex,
}

/// Makes a blob key safe to use as a local file name.
#[must_use]
pub fn sanitise_filename(key: &str) -> String {
    let name = key.rsplit('/').next().unwrap_or(key);
    let cleaned = REGEX_COLLECTION
        .unsafe_filename
        .replace_all(name, "_")
        .trim_start_matches('.')
        .to_string();

    if cleaned.is_empty() {
        String::from("image")
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitise_plain_filename() {
        assert_eq!(sanitise_filename("card123.png"), "card123.png");
    }

    #[test]
    fn test_sanitise_uuid_filename() {
        assert_eq!(
            sanitise_filename("ce711943-c1a1-43a0-8b89-8d169cfb8e06.png"),
            "ce711943-c1a1-43a0-8b89-8d169cfb8e06.png"
        );
    }

    #[test]
    fn test_sanitise_strips_directories() {
        assert_eq!(sanitise_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitise_filename("cards/card123.png"), "card123.png");
    }

    #[test]
    fn test_sanitise_replaces_spaces() {
        assert_eq!(sanitise_filename("lightning bolt.png"), "lightning_bolt.png");
    }

    #[test]
    fn test_sanitise_hidden_file() {
        assert_eq!(sanitise_filename(".hidden"), "hidden");
    }

    #[test]
    fn test_sanitise_empty() {
        assert_eq!(sanitise_filename(""), "image");
        assert_eq!(sanitise_filename(".."), "image");
    }
}
