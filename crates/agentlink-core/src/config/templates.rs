//! Starter config files written by `init` and on first `sync`

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Contents of the auto-created global config
pub const DEFAULT_GLOBAL_CONFIG: &str = "\
# Agentlink global configuration
# This file was auto-created. Uncomment and modify as needed.

# Example: Use a file in your Claude config as source
# source: ~/.config/claude/CLAUDE.md
# links:
#   - ~/.config/opencode/AGENTS.md
#   - ~/.config/some-tool/INSTRUCTIONS.md

source: ~/.config/agentlink/INSTRUCTIONS.md
links:
  - ~/.config/agentlink/CLAUDE.md
  - ~/.config/agentlink/AGENTS.md
";

/// Contents of the project config written by `init`
pub const PROJECT_CONFIG: &str = "\
# Choose the file you actually edit as the source:
source: CLAUDE.md
links:
  - AGENTS.md                    # Root level
  - OPENCODE.md                  # Root level
  # - .agent/AGENTS.md           # Inside .agent directory
  # - .codex/instructions.md     # Different name and location
  # - config/ai/GEMINI.md        # Nested directories
";

/// Write the default global config, creating its directory
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory or file cannot be written.
pub fn write_global_config(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| Error::io("create config directory", dir, e))?;
    }
    fs::write(path, DEFAULT_GLOBAL_CONFIG).map_err(|e| Error::io("write default config", path, e))
}

/// Write the project config template
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn write_project_config(path: &Path) -> Result<()> {
    fs::write(path, PROJECT_CONFIG).map_err(|e| Error::io("write project config", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFile;
    use tempfile::TempDir;

    #[test]
    fn test_templates_parse() {
        let global: ConfigFile = serde_yml::from_str(DEFAULT_GLOBAL_CONFIG).unwrap();
        assert_eq!(global.source, "~/.config/agentlink/INSTRUCTIONS.md");
        assert_eq!(global.links.len(), 2);

        let project: ConfigFile = serde_yml::from_str(PROJECT_CONFIG).unwrap();
        assert_eq!(project.source, "CLAUDE.md");
        assert_eq!(project.links, vec!["AGENTS.md", "OPENCODE.md"]);
    }

    #[test]
    fn test_write_global_config_creates_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".config/agentlink/config.yaml");

        write_global_config(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_GLOBAL_CONFIG);
    }
}
