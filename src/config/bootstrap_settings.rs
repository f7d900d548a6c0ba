use crate::config::env_provider::EnvironmentProvider;

const DEFAULT_DATABASE_URL: &str = "sqlite://admins.db?mode=rwc";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Settings needed before anything else can start
///
/// Everything here has a sensible default, so a bare environment still boots
/// a working instance against a local SQLite file.
#[derive(Debug, Clone)]
pub struct BootstrapSettings {
    database_url: String,
    listen_addr: String,
}

impl BootstrapSettings {
    /// Load bootstrap settings from the given environment provider
    pub fn from_env(env: &dyn EnvironmentProvider) -> Self {
        Self {
            database_url: env
                .get_var("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            listen_addr: env
                .get_var("LISTEN_ADDR")
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let settings = BootstrapSettings::from_env(&MockEnvironment::empty());

        assert_eq!(settings.database_url(), DEFAULT_DATABASE_URL);
        assert_eq!(settings.listen_addr(), DEFAULT_LISTEN_ADDR);
    }

    #[test]
    fn environment_overrides_defaults() {
        let env = MockEnvironment::empty()
            .with_var("DATABASE_URL", "sqlite://other.db?mode=rwc")
            .with_var("LISTEN_ADDR", "127.0.0.1:8080");

        let settings = BootstrapSettings::from_env(&env);

        assert_eq!(settings.database_url(), "sqlite://other.db?mode=rwc");
        assert_eq!(settings.listen_addr(), "127.0.0.1:8080");
    }
}
