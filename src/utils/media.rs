use crate::config::MediaConfig;

/// Rewrites a stored avatar filename to an absolute URL under the configured
/// base path. Absolute URLs and the shared default placeholder pass through
/// untouched. Presentation-layer only; the stored value is never changed.
pub fn absolute_avatar_url(profile_pic: &str, media: &MediaConfig) -> String {
    if profile_pic == media.default_avatar_url || profile_pic.starts_with("http") {
        return profile_pic.to_string();
    }
    format!(
        "{}/my-uploads/users/{}",
        media.base_url.trim_end_matches('/'),
        profile_pic
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media() -> MediaConfig {
        MediaConfig {
            base_url: "http://localhost:8000".into(),
            default_avatar_url: "https://robohash.org/bali".into(),
        }
    }

    #[test]
    fn bare_filename_gets_base_path() {
        assert_eq!(
            absolute_avatar_url("avatar-42.png", &media()),
            "http://localhost:8000/my-uploads/users/avatar-42.png"
        );
    }

    #[test]
    fn absolute_url_passes_through() {
        assert_eq!(
            absolute_avatar_url("https://cdn.example.com/a.png", &media()),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn default_placeholder_passes_through() {
        assert_eq!(
            absolute_avatar_url("https://robohash.org/bali", &media()),
            "https://robohash.org/bali"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_collapsed() {
        let media = MediaConfig {
            base_url: "http://localhost:8000/".into(),
            default_avatar_url: "https://robohash.org/bali".into(),
        };
        assert_eq!(
            absolute_avatar_url("a.png", &media),
            "http://localhost:8000/my-uploads/users/a.png"
        );
    }
}
