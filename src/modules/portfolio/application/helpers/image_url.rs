use regex::Regex;
use std::sync::LazyLock;

/// Matches the `/d/<file id>` segment of a Drive share link.
static DRIVE_FILE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").expect("valid drive id regex"));

const DIRECT_CONTENT_HOST: &str = "https://lh3.googleusercontent.com/d/";

/// Turns a Drive "view" link into a directly renderable image URL.
///
/// Anything that does not carry a file id comes back unchanged, including the
/// empty string. Already rewritten links map onto themselves.
pub fn normalize_image_url(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    match DRIVE_FILE_ID.captures(raw).and_then(|c| c.get(1)) {
        Some(id) => format!("{}{}", DIRECT_CONTENT_HOST, id.as_str()),
        None => raw.to_string(),
    }
}
