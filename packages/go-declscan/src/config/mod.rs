//! Driver configuration
//!
//! Both binaries share one driver; they differ only in what happens when no
//! path argument is given.

use std::path::{Path, PathBuf};

/// File parsed by the default-path variant when no argument is given
pub const DEFAULT_SOURCE_FILE: &str = "main.go";

/// What to do when the path argument is omitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingPathPolicy {
    /// Print `File required` and stop
    Require,
    /// Parse this path instead
    Default(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub missing_path: MissingPathPolicy,
}

impl DriverConfig {
    /// Strict variant: a path argument is mandatory
    pub fn strict() -> Self {
        Self {
            missing_path: MissingPathPolicy::Require,
        }
    }

    /// Default-path variant: falls back to [`DEFAULT_SOURCE_FILE`]
    pub fn with_default_path() -> Self {
        Self::with_fallback(DEFAULT_SOURCE_FILE)
    }

    pub fn with_fallback(path: impl Into<PathBuf>) -> Self {
        Self {
            missing_path: MissingPathPolicy::Default(path.into()),
        }
    }

    /// Pick the file to parse; `None` means a path was required but absent
    pub fn resolve_path<'a>(&'a self, arg: Option<&'a Path>) -> Option<&'a Path> {
        match (arg, &self.missing_path) {
            (Some(path), _) => Some(path),
            (None, MissingPathPolicy::Default(path)) => Some(path.as_path()),
            (None, MissingPathPolicy::Require) => None,
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_requires_argument() {
        let config = DriverConfig::strict();
        assert_eq!(config.resolve_path(None), None);
        assert_eq!(
            config.resolve_path(Some(Path::new("a.go"))),
            Some(Path::new("a.go"))
        );
    }

    #[test]
    fn test_default_path_fallback() {
        let config = DriverConfig::with_default_path();
        assert_eq!(config.resolve_path(None), Some(Path::new("main.go")));
        assert_eq!(
            config.resolve_path(Some(Path::new("b.go"))),
            Some(Path::new("b.go"))
        );
    }
}
