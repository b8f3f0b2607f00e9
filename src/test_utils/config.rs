//! Configuration utilities for testing.

use crate::config::CollectionConfig;

/// Builder for creating test collection configurations.
#[derive(Debug)]
pub struct TestCollectionConfigBuilder {
    base_url: String,
    timeout_seconds: u64,
    random_max_attempts: usize,
}

impl TestCollectionConfigBuilder {
    /// Creates a new test config builder with default values.
    pub fn new() -> Self {
        Self {
            base_url: "http://test.local".to_string(),
            timeout_seconds: 5,
            random_max_attempts: 100,
        }
    }

    /// Points the configuration at a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_random_max_attempts(mut self, attempts: usize) -> Self {
        self.random_max_attempts = attempts;
        self
    }

    pub fn build(self) -> CollectionConfig {
        CollectionConfig {
            base_url: self.base_url,
            timeout_seconds: self.timeout_seconds,
            random_max_attempts: self.random_max_attempts,
            user_agent: "collection-browser-test".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = TestCollectionConfigBuilder::new().build();
        assert_eq!(config.base_url, "http://test.local");
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.random_max_attempts, 100);
    }

    #[test]
    fn test_builder_overrides() {
        let config = TestCollectionConfigBuilder::new()
            .with_base_url("http://127.0.0.1:9000")
            .with_random_max_attempts(3)
            .build();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.random_max_attempts, 3);
    }
}
