//! Configuration validation and error reporting

use std::path::Path;

use super::types::{Config, ConfigFile};
use crate::error::{Error, Result};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration as parsed from `path`
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] if the source is empty, there are no
    /// links, or a link entry is empty.
    pub fn validate(file: &ConfigFile, path: &Path) -> Result<()> {
        if file.source.trim().is_empty() {
            return Err(Self::invalid(path, "source cannot be empty"));
        }

        if file.links.is_empty() {
            return Err(Self::invalid(path, "links cannot be empty"));
        }

        for (idx, link) in file.links.iter().enumerate() {
            if link.trim().is_empty() {
                return Err(Self::invalid(path, format!("link #{} is empty", idx + 1)));
            }
        }

        Ok(())
    }

    /// Validate a configuration after path expansion
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] if a link resolves to the source itself.
    pub fn validate_resolved(config: &Config, path: &Path) -> Result<()> {
        if let Some(link) = config.links.iter().find(|link| **link == config.source) {
            return Err(Self::invalid(
                path,
                format!("link {} is the source file itself", link.display()),
            ));
        }
        Ok(())
    }

    fn invalid(path: &Path, message: impl Into<String>) -> Error {
        Error::ConfigInvalid {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(source: &str, links: &[&str]) -> ConfigFile {
        ConfigFile {
            source: source.to_string(),
            links: links.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_validate_valid_config() {
        let config = file("CLAUDE.md", &["AGENTS.md"]);
        assert!(ConfigValidator::validate(&config, Path::new("c.yaml")).is_ok());
    }

    #[test]
    fn test_validate_empty_source() {
        let result = ConfigValidator::validate(&file("  ", &["AGENTS.md"]), Path::new("c.yaml"));
        assert!(result.unwrap_err().to_string().contains("source cannot be empty"));
    }

    #[test]
    fn test_validate_no_links() {
        let result = ConfigValidator::validate(&file("CLAUDE.md", &[]), Path::new("c.yaml"));
        assert!(result.unwrap_err().to_string().contains("links cannot be empty"));
    }

    #[test]
    fn test_validate_empty_link_entry() {
        let config = file("CLAUDE.md", &["AGENTS.md", ""]);
        let result = ConfigValidator::validate(&config, Path::new("c.yaml"));
        assert!(result.unwrap_err().to_string().contains("link #2 is empty"));
    }

    #[test]
    fn test_validate_link_equal_to_source() {
        let config = Config::new("/p/CLAUDE.md", ["/p/AGENTS.md", "/p/CLAUDE.md"]);
        let result = ConfigValidator::validate_resolved(&config, Path::new("c.yaml"));
        assert!(result.unwrap_err().to_string().contains("is the source file itself"));
    }
}
