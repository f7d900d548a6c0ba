/// Trait for providing environment variable access
///
/// Settings read their values through this abstraction so tests can inject
/// specific variables without mutating the process-global environment.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production environment provider that reads from the system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test environment provider with configurable variables
#[cfg(test)]
pub struct MockEnvironment {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn empty() -> Self {
        Self {
            vars: std::collections::HashMap::new(),
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_environment_returns_configured_vars() {
        let provider = MockEnvironment::empty()
            .with_var("A_KEY", "a_value")
            .with_var("B_KEY", "b_value");

        assert_eq!(provider.get_var("A_KEY"), Some("a_value".to_string()));
        assert_eq!(provider.get_var("B_KEY"), Some("b_value".to_string()));
        assert_eq!(provider.get_var("MISSING"), None);
    }

    #[test]
    fn empty_mock_environment_has_no_vars() {
        let provider = MockEnvironment::empty();
        assert_eq!(provider.get_var("ANY_KEY"), None);
    }
}
