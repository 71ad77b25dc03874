//! .env file parsing.
//!
//! This module provides functionality for parsing environment variable files
//! in the standard KEY=value format and for seeding the process environment
//! from them.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{MirrorError, Result};

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// # Example
///
/// ```
/// use gogs_mirror::config::EnvFileParser;
///
/// let content = r#"
/// # GitLab side
/// GITLAB_HOST_URL=gitlab.example.com
/// GITLAB_TOKEN="glpat-123"
/// GOGS_ORG=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("GITLAB_HOST_URL"), Some(&"gitlab.example.com".to_string()));
/// assert_eq!(vars.get("GITLAB_TOKEN"), Some(&"glpat-123".to_string()));
/// assert_eq!(vars.get("GOGS_ORG"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse an env file content string into a map of variables.
    ///
    /// Lines without `=` are ignored.
    pub fn parse(content: &str) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        vars
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some((key.to_string(), Self::unquote(value.trim())))
    }

    /// Remove surrounding quotes from a value.
    fn unquote(value: &str) -> String {
        let quoted = value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')));
        if quoted {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        }
    }

    /// Load and parse an env file from a path.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Load and parse an env file, returning empty map if file doesn't exist.
    pub fn load_optional(path: &Path) -> Result<HashMap<String, String>> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(HashMap::new())
        }
    }
}

/// Seed the process environment from an env file.
///
/// Variables that are already set are left untouched. When `explicit` is
/// true the file must exist; otherwise a missing file is silently skipped.
/// Returns the names of the variables that were set, sorted.
pub fn apply_env_file(path: &Path, explicit: bool) -> Result<Vec<String>> {
    if explicit && !path.exists() {
        return Err(MirrorError::EnvFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let vars = EnvFileParser::load_optional(path)?;
    let mut applied = Vec::new();

    for (key, value) in vars {
        if std::env::var_os(&key).is_some() {
            continue;
        }
        std::env::set_var(&key, value);
        applied.push(key);
    }

    applied.sort();
    Ok(applied)
}
