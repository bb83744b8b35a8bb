//! Client configuration

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Client configuration for connecting to the employee API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Read `EMPLOYEE_API_URL`, falling back to [`DEFAULT_BASE_URL`]
    pub fn from_env() -> Self {
        let base_url = std::env::var("EMPLOYEE_API_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
