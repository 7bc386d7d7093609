use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Database {
    pub url: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite://notes.db".into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Http {
    pub host: String,
    pub port: u16,
}

impl Default for Http {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    pub database: Database,
    pub http: Http,
}

impl Settings {
    pub(crate) fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("database.url", "sqlite://notes.db")?
            .set_default("http.host", "127.0.0.1")?
            .set_default("http.port", 8080)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"))
            .build()?;

        config.try_deserialize()
    }
}

impl Http {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_settings() {
        set_var("DATABASE_URL", "sqlite::memory:");
        set_var("HTTP_PORT", "9999");
        let settings = Settings::new().unwrap_or_default();
        assert_eq!(settings.database.url, "sqlite::memory:");
        assert_eq!(settings.http.addr(), "127.0.0.1:9999");
    }
}
