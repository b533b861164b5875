//! Configuration loading

use std::env::VarError;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GreeterError, GreeterResult};
use crate::presentation::OutputFormat;

use super::types::{Config, Verbosity};

/// Project config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "greeter.toml";

/// Overrides the user config directory (for tests and sandboxed runs).
pub const CONFIG_HOME_VAR: &str = "GREETER_CONFIG_HOME";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Project(p) | ConfigSource::User(p) => {
                Some(p)
            }
            ConfigSource::Defaults => None,
        }
    }
}

/// A config file resolved from disk, before env and CLI overrides.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GreeterResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GreeterError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let (table, key) = match path_str.rsplit_once('.') {
                Some((table, key)) => (Some(table), key),
                None => (None, path_str.as_str()),
            };
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: find_line_number(&content, table, key),
                suggestion: suggest_key(table, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config file to use.
///
/// An explicit path must exist. Otherwise the first of project config and
/// user config that exists wins, falling back to built-in defaults.
pub fn discover(explicit: Option<&Path>, project_root: &Path) -> GreeterResult<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(GreeterError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return load_from(path.to_path_buf(), ConfigSource::Explicit);
    }

    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return load_from(project_config, ConfigSource::Project);
    }

    if let Some(user_config) = user_config_path() {
        if user_config.is_file() {
            return load_from(user_config, ConfigSource::User);
        }
    }

    Ok(LoadedConfig {
        config: Config::default(),
        source: ConfigSource::Defaults,
        warnings: Vec::new(),
    })
}

fn load_from(path: PathBuf, source: fn(PathBuf) -> ConfigSource) -> GreeterResult<LoadedConfig> {
    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config,
        source: source(path),
        warnings,
    })
}

/// `<config_dir>/greeter/config.toml`, honouring `GREETER_CONFIG_HOME`.
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var(CONFIG_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("greeter").join("config.toml"))
}

/// Apply environment variable overrides (GREETER_* prefix)
pub fn with_env_overrides(config: Config) -> GreeterResult<Config> {
    apply_overrides(config, |var| std::env::var(var))
}

/// Apply overrides from an arbitrary variable lookup.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> GreeterResult<Config>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    // GREETER_NAME / GREETER_MESSAGE are taken verbatim, empty included
    if let Some(name) = read_var(&lookup, "GREETER_NAME")? {
        config.greeting.name = name;
    }

    if let Some(message) = read_var(&lookup, "GREETER_MESSAGE")? {
        config.greeting.message = message;
    }

    if let Some(format) = read_var(&lookup, "GREETER_FORMAT")? {
        config.output.format =
            OutputFormat::parse(&format).ok_or_else(|| GreeterError::InvalidEnvValue {
                var: "GREETER_FORMAT".to_string(),
                value: format.clone(),
                expected: format!("one of: {}", OutputFormat::NAMES.join(", ")),
            })?;
    }

    if let Some(verbosity) = read_var(&lookup, "GREETER_VERBOSITY")? {
        config.output.verbosity =
            Verbosity::parse(&verbosity).ok_or_else(|| GreeterError::InvalidEnvValue {
                var: "GREETER_VERBOSITY".to_string(),
                value: verbosity.clone(),
                expected: format!("one of: {}", Verbosity::NAMES.join(", ")),
            })?;
    }

    Ok(config)
}

/// Unset is `None`; a value that is not UTF-8 is an error, never skipped.
fn read_var<F>(lookup: &F, var: &str) -> GreeterResult<Option<String>>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(GreeterError::InvalidEnvValue {
            var: var.to_string(),
            value: raw.to_string_lossy().into_owned(),
            expected: "valid UTF-8".to_string(),
        }),
    }
}

/// Known keys per table; `None` is the document root.
const KNOWN_KEYS: &[(Option<&str>, &[&str])] = &[
    (None, &["greeting", "output"]),
    (Some("greeting"), &["name", "message"]),
    (Some("output"), &["format", "verbosity"]),
];

/// Line of `key` inside `table` (a table header when `table` is the root).
pub(super) fn find_line_number(content: &str, table: Option<&str>, key: &str) -> Option<usize> {
    let mut current: Option<&str> = None;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();

        if let Some(header) = table_header(trimmed) {
            if table.is_none() && (header == key || header.starts_with(&format!("{key}."))) {
                return Some(i + 1);
            }
            current = Some(header);
            continue;
        }

        if current == table && is_key_line(trimmed, key) {
            return Some(i + 1);
        }
    }
    None
}

fn table_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?;
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let end = inner.find(']')?;
    Some(inner[..end].trim())
}

fn is_key_line(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}

/// Closest known key in the same table, else the table the key belongs to.
pub(super) fn suggest_key(table: Option<&str>, unknown: &str) -> Option<String> {
    let candidates = KNOWN_KEYS
        .iter()
        .find(|(t, _)| *t == table)
        .map(|(_, keys)| *keys)
        .unwrap_or(&[]);

    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    if let Some((candidate, dist)) = best {
        if dist <= 2 && candidate != unknown {
            return Some(candidate.to_string());
        }
    }

    KNOWN_KEYS
        .iter()
        .find_map(|(t, keys)| match t {
            Some(other) if Some(*other) != table && keys.contains(&unknown) => {
                Some(format!("{other}.{unknown}"))
            }
            _ => None,
        })
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
