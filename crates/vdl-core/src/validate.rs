//! URL acceptance heuristic for job input.

/// Host fragments accepted outright, alongside the generic scheme check.
const KNOWN_HOSTS: [&str; 5] = [
    "youtube.com",
    "youtu.be",
    "vimeo.com",
    "twitch.tv",
    "dailymotion.com",
];

/// Returns true if `url` looks like a usable media source: any string
/// containing a known host fragment or an `http://`/`https://` scheme.
/// Rejects empty and whitespace-only input. Permissive on purpose; no URL
/// parsing and no network lookup happen here.
pub fn validate(url: &str) -> bool {
    if url.trim().is_empty() {
        return false;
    }
    KNOWN_HOSTS.iter().any(|host| url.contains(host))
        || url.contains("http://")
        || url.contains("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_hosts() {
        assert!(validate("https://www.youtube.com/watch?v=abc123"));
        assert!(validate("youtu.be/abc123"));
        assert!(validate("vimeo.com/12345"));
        assert!(validate("twitch.tv/somechannel"));
        assert!(validate("www.dailymotion.com/video/x1"));
    }

    #[test]
    fn accepts_any_http_scheme() {
        assert!(validate("http://example.com/clip.mp4"));
        assert!(validate("https://media.example.org/stream"));
        assert!(validate("see https://example.com"));
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(!validate(""));
        assert!(!validate("   "));
        assert!(!validate("\t\n"));
    }

    #[test]
    fn rejects_non_url_text() {
        assert!(!validate("not a url"));
        assert!(!validate("ftp://example.com/file"));
        assert!(!validate("example.com/video"));
    }
}
