//! Client configuration

/// Client configuration for connecting to the billing service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g. "http://192.168.0.10:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Signed-in staff member's PIN, attached to order submissions as the
    /// `X-Staff-Pin` header for attribution
    pub staff_pin: Option<String>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            staff_pin: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the staff PIN attached to submissions
    pub fn with_staff_pin(mut self, pin: impl Into<String>) -> Self {
        self.staff_pin = Some(pin.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
