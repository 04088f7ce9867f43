//! Environment diagnostics
//!
//! Checks the platform, symlink support, binary location and both config
//! locations. Checks only report; the CLI decides how to render them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{ConfigDiscovery, ConfigLoader, PROJECT_CONFIG_NAME};

/// Result of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything fine
    Pass,
    /// Worth knowing, not a failure
    Warn,
    /// Something that will break agentlink
    Fail,
}

/// One diagnostic line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Section heading the check belongs to
    pub section: &'static str,
    /// Outcome
    pub outcome: Outcome,
    /// Message shown to the user
    pub message: String,
}

/// All checks, in the order they ran
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    /// Checks in run order
    pub checks: Vec<Check>,
}

impl DoctorReport {
    fn push(&mut self, section: &'static str, outcome: Outcome, message: impl Into<String>) {
        self.checks.push(Check {
            section,
            outcome,
            message: message.into(),
        });
    }

    /// Whether any check failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.outcome == Outcome::Fail)
    }

    /// Checks grouped by section, preserving order
    #[must_use]
    pub fn sections(&self) -> Vec<(&'static str, Vec<&Check>)> {
        let mut sections: Vec<(&'static str, Vec<&Check>)> = Vec::new();
        for check in &self.checks {
            match sections.last_mut() {
                Some((name, checks)) if *name == check.section => checks.push(check),
                _ => sections.push((check.section, vec![check])),
            }
        }
        sections
    }
}

/// Runs environment diagnostics
pub struct Doctor;

impl Doctor {
    /// Run every check for the project in `cwd` and the user at `home`
    #[must_use]
    pub fn run(cwd: &Path, home: Option<&Path>) -> DoctorReport {
        let mut report = DoctorReport::default();

        Self::check_platform(&mut report);
        Self::check_symlinks(&mut report);
        Self::check_binary(&mut report);
        Self::check_config_dir(&mut report, home);
        Self::check_project(&mut report, cwd, home);
        Self::check_global(&mut report, home);

        report
    }

    fn check_platform(report: &mut DoctorReport) {
        const SECTION: &str = "Operating System";
        let platform = format!("{} {}", std::env::consts::OS, std::env::consts::ARCH);
        if cfg!(windows) {
            report.push(
                SECTION,
                Outcome::Warn,
                format!("{platform}: Windows support is best-effort only"),
            );
        } else {
            report.push(SECTION, Outcome::Pass, format!("{platform}: supported platform"));
        }
    }

    fn check_symlinks(report: &mut DoctorReport) {
        const SECTION: &str = "Symlink Support";
        match probe_symlink() {
            Ok(()) => report.push(SECTION, Outcome::Pass, "Symlinks are supported"),
            Err(e) => report.push(SECTION, Outcome::Fail, format!("Symlinks not supported: {e}")),
        }
    }

    fn check_binary(report: &mut DoctorReport) {
        const SECTION: &str = "Binary Location";
        let exe = match std::env::current_exe() {
            Ok(exe) => dunce::canonicalize(&exe).unwrap_or(exe),
            Err(e) => {
                report.push(
                    SECTION,
                    Outcome::Warn,
                    format!("Could not determine binary location: {e}"),
                );
                return;
            }
        };

        report.push(SECTION, Outcome::Pass, format!("Binary: {}", exe.display()));
        let path_var = std::env::var_os("PATH").unwrap_or_default();
        if is_in_path(&exe, &path_var) {
            report.push(SECTION, Outcome::Pass, "Binary is in PATH");
        } else {
            report.push(SECTION, Outcome::Warn, "Binary is not in PATH");
        }
    }

    fn check_config_dir(report: &mut DoctorReport, home: Option<&Path>) {
        const SECTION: &str = "Configuration";
        let Some(home) = home else {
            report.push(SECTION, Outcome::Fail, "Cannot determine home directory");
            return;
        };

        report.push(SECTION, Outcome::Pass, format!("Home directory: {}", home.display()));
        let dir = ConfigDiscovery::global_config_dir(home);
        match check_directory_access(&dir) {
            Ok(()) => report.push(
                SECTION,
                Outcome::Pass,
                format!("Config directory accessible: {}", dir.display()),
            ),
            Err(message) => report.push(
                SECTION,
                Outcome::Fail,
                format!("Config directory issue: {message}"),
            ),
        }
    }

    fn check_project(report: &mut DoctorReport, cwd: &Path, home: Option<&Path>) {
        const SECTION: &str = "Project Configuration";
        if cwd.join(".git").exists() {
            report.push(SECTION, Outcome::Pass, "Git repository detected");
        } else {
            report.push(SECTION, Outcome::Warn, "No .git directory (not in a git repository)");
        }

        let project = ConfigDiscovery::project_config_path(cwd);
        if !project.exists() {
            report.push(
                SECTION,
                Outcome::Warn,
                format!("No project config ({PROJECT_CONFIG_NAME})"),
            );
            return;
        }

        report.push(SECTION, Outcome::Pass, format!("Project config found: {PROJECT_CONFIG_NAME}"));
        Self::check_loads(report, SECTION, "Project", &project, home);
    }

    fn check_global(report: &mut DoctorReport, home: Option<&Path>) {
        const SECTION: &str = "Global Configuration";
        let Some(home) = home else {
            return;
        };

        let global = ConfigDiscovery::global_config_path(home);
        if !global.exists() {
            report.push(
                SECTION,
                Outcome::Warn,
                format!(
                    "No global config found: {} (this is normal, it is created when needed)",
                    global.display()
                ),
            );
            return;
        }

        report.push(SECTION, Outcome::Pass, format!("Global config found: {}", global.display()));
        Self::check_loads(report, SECTION, "Global", &global, Some(home));
    }

    fn check_loads(
        report: &mut DoctorReport,
        section: &'static str,
        label: &str,
        path: &Path,
        home: Option<&Path>,
    ) {
        match ConfigLoader::load(path, home) {
            Ok(config) => report.push(
                section,
                Outcome::Pass,
                format!(
                    "{label} config is valid (source {}, {} links)",
                    config.source.display(),
                    config.links.len()
                ),
            ),
            Err(e) => report.push(
                section,
                Outcome::Fail,
                format!("{label} config is invalid: {e}"),
            ),
        }
    }
}

fn probe_symlink() -> std::io::Result<()> {
    let dir = tempfile::tempdir()?;
    let target = dir.path().join("agentlink_test_target");
    let link = dir.path().join("agentlink_test_link");

    fs::write(&target, "test")?;
    make_probe_link(&target, &link)?;
    fs::read_link(&link)?;
    debug!(dir = %dir.path().display(), "symlink probe succeeded");
    Ok(())
}

#[cfg(unix)]
fn make_probe_link(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn make_probe_link(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

fn is_in_path(exe: &Path, path_var: &std::ffi::OsStr) -> bool {
    let Some(exe_dir) = exe.parent() else {
        return false;
    };
    let name = exe.file_name().map(PathBuf::from);

    std::env::split_paths(path_var).any(|dir| {
        dir == exe_dir || name.as_ref().is_some_and(|name| dir.join(name).is_file())
    })
}

/// Make sure `dir` exists and is writable, creating it if needed
fn check_directory_access(dir: &Path) -> Result<(), String> {
    match fs::metadata(dir) {
        Ok(metadata) if !metadata.is_dir() => {
            return Err("path exists but is not a directory".to_string());
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;
            return Ok(());
        }
        Err(e) => return Err(format!("cannot stat directory: {e}")),
    }

    let probe = dir.join(".agentlink_test");
    fs::write(&probe, "test").map_err(|e| format!("directory is not writable: {e}"))?;
    let _ = fs::remove_file(&probe);
    Ok(())
}
