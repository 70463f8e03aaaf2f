use std::env;

use anyhow::Result;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal report (default)
    Text,
    /// Pretty-printed JSON report on stdout
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!(
                "Unknown FAKECHECK_FORMAT value '{other}'. Expected 'text' or 'json'."
            ),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
/// Command-line flags take precedence over anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format (FAKECHECK_FORMAT, default text)
    pub format: OutputFormat,
    /// Colored output, disabled when NO_COLOR is set
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let format = match env::var("FAKECHECK_FORMAT") {
            Ok(value) => OutputFormat::parse(&value)?,
            Err(_) => OutputFormat::Text,
        };

        Ok(Self {
            format,
            color: env::var_os("NO_COLOR").is_none(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse(" JSON ").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::parse("yaml").is_err());
    }
}
