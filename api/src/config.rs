//! Content API configuration.

/// Production host of the content API (also serves `/media/`).
pub const DEFAULT_BASE_URL: &str = "https://api.uftacademy.uz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host, no trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Honour a compile-time `UFT_API_BASE_URL` override (wasm has no runtime env).
    pub fn from_env() -> Self {
        match option_env!("UFT_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    /// Resolve a media reference returned by the API into an absolute URL.
    ///
    /// - absolute `http(s)` URLs pass through
    /// - `/media/...` or any other rooted path is appended to the host
    /// - `media/...` gets a separating slash
    /// - anything else (e.g. `gallery/x.jpg`) lives under `/media/`
    pub fn media_url(&self, raw: &str) -> String {
        let raw = raw.trim();
        if raw.starts_with("http") {
            raw.to_string()
        } else if raw.starts_with('/') {
            format!("{}{raw}", self.base_url)
        } else if raw.starts_with("media/") {
            format!("{}/{raw}", self.base_url)
        } else {
            format!("{}/media/{raw}", self.base_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::with_base_url("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn media_paths_are_absolutised() {
        let config = ApiConfig::default();
        let cases = [
            ("https://cdn.example/a.png", "https://cdn.example/a.png"),
            ("/media/gallery/a.jpg", "https://api.uftacademy.uz/media/gallery/a.jpg"),
            ("media/gallery/a.jpg", "https://api.uftacademy.uz/media/gallery/a.jpg"),
            ("/static/logo.svg", "https://api.uftacademy.uz/static/logo.svg"),
            ("gallery/a.jpg", "https://api.uftacademy.uz/media/gallery/a.jpg"),
            ("a.jpg", "https://api.uftacademy.uz/media/a.jpg"),
        ];
        for (raw, expected) in cases {
            assert_eq!(config.media_url(raw), expected, "raw = {raw}");
        }
    }
}
