// Health check service implementation

/// Status line reported by the root endpoint
pub const RUNNING_MESSAGE: &str = "Rosalie AI Assistant is running!";

#[derive(Debug, Default)]
pub struct HealthChecker;

impl HealthChecker {
    pub fn new() -> Self {
        Self
    }

    /// Liveness only; never consults the backing stores
    pub fn status_message(&self) -> &'static str {
        RUNNING_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_checker_reports_running() {
        assert_eq!(HealthChecker::default().status_message(), RUNNING_MESSAGE);
        assert_eq!(HealthChecker::new().status_message(), RUNNING_MESSAGE);
    }
}
