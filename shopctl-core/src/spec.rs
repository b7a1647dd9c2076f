//! Description of an external command
//!
//! A [`CommandSpec`] is pure data: building one has no side effects.
//! Executors in `shopctl-compose` decide whether to spawn it, print it, or
//! record it. Arguments added with [`CommandSpec::secret_arg`] are masked
//! by `Display`, which is what logs and dry runs show.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::{ModeProfile, Settings};

/// Replacement shown for secret values
pub const REDACTED: &str = "***";

/// Where the child's standard output goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    /// Share the dispatcher's stdout
    #[default]
    Inherit,
    /// Truncate and write to a file
    File(PathBuf),
}

/// An external program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program to run
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
    /// Working directory, if not the current one
    pub cwd: Option<PathBuf>,
    /// Standard output routing
    pub stdout: Output,
    /// Indices into `args` whose values must never be rendered
    pub secrets: Vec<usize>,
}

impl CommandSpec {
    /// Start a spec for `program` with no arguments
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            stdout: Output::Inherit,
            secrets: Vec::new(),
        }
    }

    /// `docker compose -f <file>` for the given profile
    #[must_use]
    pub fn compose(settings: &Settings, profile: &ModeProfile) -> Self {
        Self::compose_file(settings, &profile.compose_file)
    }

    /// `docker compose -f <file>` for an explicit file
    #[must_use]
    pub fn compose_file(settings: &Settings, file: &Path) -> Self {
        Self::new(settings.docker_bin.clone())
            .arg("compose")
            .arg("-f")
            .arg(file.display().to_string())
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append an argument whose value is masked when rendered
    ///
    /// For `--flag=value` only the value is masked.
    #[must_use]
    pub fn secret_arg(mut self, arg: impl Into<String>) -> Self {
        self.secrets.push(self.args.len());
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run inside `dir`
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Redirect stdout to `path`
    #[must_use]
    pub fn stdout_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdout = Output::File(path.into());
        self
    }

    /// Whether `needle` appears among the arguments
    #[must_use]
    pub fn has_arg(&self, needle: &str) -> bool {
        self.args.iter().any(|a| a == needle)
    }
}

fn redact(arg: &str) -> String {
    match arg.split_once('=') {
        Some((flag, _)) => format!("{flag}={REDACTED}"),
        None => REDACTED.to_string(),
    }
}

fn quote(token: &str) -> String {
    if token.is_empty() {
        return "''".to_string();
    }

    if token
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '(' | ')' | '$' | ';'))
    {
        format!("'{}'", token.replace('\'', r"'\''"))
    } else {
        token.to_string()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(dir) = &self.cwd {
            write!(f, "(cd {} && ", quote(&dir.display().to_string()))?;
        }

        write!(f, "{}", quote(&self.program))?;
        for (index, arg) in self.args.iter().enumerate() {
            if self.secrets.contains(&index) {
                write!(f, " {}", quote(&redact(arg)))?;
            } else {
                write!(f, " {}", quote(arg))?;
            }
        }

        if let Output::File(path) = &self.stdout {
            write!(f, " > {}", quote(&path.display().to_string()))?;
        }

        if self.cwd.is_some() {
            f.write_str(")")?;
        }

        Ok(())
    }
}
