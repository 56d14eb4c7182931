use std::time::Duration;

use serde_aux::field_attributes::deserialize_number_from_string;
use url::Url;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub webhook: WebhookSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct WebhookSettings {
    pub url: String,
    pub api_key: String,
    #[serde(
        default = "default_timeout_ms",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("webhook.url is not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("webhook.api_key must not be empty")]
    EmptyApiKey,
    #[error("webhook.timeout_ms must be greater than zero")]
    ZeroTimeout,
}

impl WebhookSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        Url::parse(&self.webhook.url)?;
        if self.webhook.api_key.trim().is_empty() {
            return Err(SettingsError::EmptyApiKey);
        }
        if self.webhook.timeout_ms == 0 {
            return Err(SettingsError::ZeroTimeout);
        }
        Ok(())
    }
}

pub fn get_configuration() -> Result<Settings, anyhow::Error> {
    let settings = config::Config::builder()
        .add_source(config::File::new(
            "configuration.yaml",
            config::FileFormat::Yaml,
        ))
        .build()?
        .try_deserialize::<Settings>()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            webhook: WebhookSettings {
                url: "https://example.com/webhook/contact-form".to_string(),
                api_key: "test-key".to_string(),
                timeout_ms: 10_000,
            },
        }
    }

    #[test]
    fn valid_settings_pass_validation() {
        assert!(test_settings().validate().is_ok());
    }

    #[test]
    fn empty_api_key_fails() {
        let mut settings = test_settings();
        settings.webhook.api_key = "  ".to_string();
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::EmptyApiKey)
        ));
    }

    #[test]
    fn zero_timeout_fails() {
        let mut settings = test_settings();
        settings.webhook.timeout_ms = 0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ZeroTimeout)
        ));
    }

    #[test]
    fn unparseable_url_fails() {
        let mut settings = test_settings();
        settings.webhook.url = "not a url".to_string();
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidUrl(_))
        ));
    }

    #[test]
    fn timeout_converts_to_duration() {
        let mut settings = test_settings();
        settings.webhook.timeout_ms = 250;
        assert_eq!(settings.webhook.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn timeout_defaults_to_ten_seconds() {
        let yaml = r#"
webhook:
  url: https://example.com/webhook/contact-form
  api_key: test-key
"#;
        let settings = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert_eq!(settings.webhook.timeout_ms, 10_000);
    }
}
