/// Configuration for creating a new webview surface.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Whether the webview background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Tabhost/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl SurfaceConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SurfaceConfig::default();
        assert!(config.url.is_none());
        assert!(config.html.is_none());
        assert!(!config.transparent);
        assert_eq!(config.devtools, cfg!(debug_assertions));
        assert!(config.user_agent.unwrap().starts_with("Tabhost/"));
    }

    #[test]
    fn with_url_sets_only_url() {
        let config = SurfaceConfig::with_url("https://example.com");
        assert_eq!(config.url.as_deref(), Some("https://example.com"));
        assert!(config.html.is_none());
    }

    #[test]
    fn with_html_sets_only_html() {
        let config = SurfaceConfig::with_html("<p>hi</p>");
        assert_eq!(config.html.as_deref(), Some("<p>hi</p>"));
        assert!(config.url.is_none());
    }
}
