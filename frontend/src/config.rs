/// Runtime settings for the bookstore frontend
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path, without a trailing slash
    pub api_base_url: String,
    /// Value sent in the `Role` header on admin calls
    pub admin_role: String,
    pub notification_timeout_ms: u32,
    /// Carousel auto-advance; `None` keeps it manual
    pub carousel_autoplay_ms: Option<u32>,
    /// Number of catalog books shown in the carousel
    pub carousel_size: usize,
}

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

impl Default for AppConfig {
    fn default() -> Self {
        let base = option_env!("BOOKSTORE_API_URL").unwrap_or(DEFAULT_API_BASE_URL);
        Self {
            api_base_url: base.trim_end_matches('/').to_string(),
            admin_role: "admin".to_string(),
            notification_timeout_ms: 5000,
            carousel_autoplay_ms: None,
            carousel_size: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(!config.api_base_url.ends_with('/'));
        assert_eq!(config.admin_role, "admin");
        assert_eq!(config.notification_timeout_ms, 5000);
        assert_eq!(config.carousel_autoplay_ms, None);
    }
}
