//! Run configuration.
//!
//! Paths and graph settings come from built-in defaults, optionally
//! overridden by a `grw.yaml` file in the project root (or an explicit
//! `--config` file). Relative paths resolve against the project root.
//!
//! ```yaml
//! fixtures-dir: fixtures
//! output-dir: app/data
//! output-file: grw-papers.json
//! people-file: people.csv
//! papers-file: papers.csv
//! delimiter: ","
//! case: lower
//! on-name-conflict: first-wins
//! dedupe-imports: false
//! ```

use crate::error::{Error, Result};
use crate::graph::{ConflictPolicy, GraphOptions};
use crate::slug::CaseMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file in the project root.
pub const CONFIG_FILE_NAME: &str = "grw.yaml";

/// Default directory holding the input files.
pub const DEFAULT_FIXTURES_DIR: &str = "fixtures";

/// Default directory receiving the output file.
pub const DEFAULT_OUTPUT_DIR: &str = "app/data";

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str = "grw-papers.json";

/// Default roster file name.
pub const DEFAULT_PEOPLE_FILE: &str = "people.csv";

/// Default authorship file name.
pub const DEFAULT_PAPERS_FILE: &str = "papers.csv";

/// On-disk configuration. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory holding the input files.
    pub fixtures_dir: Option<PathBuf>,
    /// Directory receiving the output file.
    pub output_dir: Option<PathBuf>,
    /// Output file name inside `output_dir`.
    pub output_file: Option<String>,
    /// Roster file name inside `fixtures_dir`.
    pub people_file: Option<String>,
    /// Authorship file name inside `fixtures_dir`.
    pub papers_file: Option<String>,
    /// Single ASCII field delimiter.
    pub delimiter: Option<String>,
    /// Identifier case handling.
    pub case: Option<CaseMode>,
    /// Policy for bare names shared across institutions.
    pub on_name_conflict: Option<ConflictPolicy>,
    /// Collapse repeated imports.
    pub dedupe_imports: Option<bool>,
}

impl ConfigFile {
    /// Load configuration from a YAML file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from YAML text. Empty text yields all defaults.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Project root every relative path resolves against.
    pub root: PathBuf,
    /// Directory holding the input files.
    pub fixtures_dir: PathBuf,
    /// Directory receiving the output file.
    pub output_dir: PathBuf,
    /// Output file name.
    pub output_file: String,
    /// Roster file name.
    pub people_file: String,
    /// Authorship file name.
    pub papers_file: String,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Graph building settings.
    pub graph: GraphOptions,
}

impl Config {
    /// Defaults for a project rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            fixtures_dir: root.join(DEFAULT_FIXTURES_DIR),
            output_dir: root.join(DEFAULT_OUTPUT_DIR),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            people_file: DEFAULT_PEOPLE_FILE.to_string(),
            papers_file: DEFAULT_PAPERS_FILE.to_string(),
            delimiter: b',',
            graph: GraphOptions::default(),
            root,
        }
    }

    /// Loads configuration for a project root.
    ///
    /// With `explicit` set, that file must exist. Otherwise `grw.yaml` in the
    /// root is used when present, and defaults apply when it is not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a config file cannot be read or holds
    /// invalid values.
    pub async fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(root.join(path)),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                let exists = tokio::fs::try_exists(&candidate).await?;
                exists.then_some(candidate)
            }
        };

        let mut config = Self::new(root);
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "Loading configuration file");
            config.apply(ConfigFile::load(&path).await?)?;
        }
        Ok(config)
    }

    /// Overlays values from a config file onto this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the delimiter is not one ASCII character.
    pub fn apply(&mut self, file: ConfigFile) -> Result<()> {
        if let Some(dir) = file.fixtures_dir {
            self.fixtures_dir = self.root.join(dir);
        }
        if let Some(dir) = file.output_dir {
            self.output_dir = self.root.join(dir);
        }
        if let Some(name) = file.output_file {
            self.output_file = name;
        }
        if let Some(name) = file.people_file {
            self.people_file = name;
        }
        if let Some(name) = file.papers_file {
            self.papers_file = name;
        }
        if let Some(delimiter) = file.delimiter {
            self.delimiter = parse_delimiter(&delimiter)?;
        }
        if let Some(case) = file.case {
            self.graph.case = case;
        }
        if let Some(policy) = file.on_name_conflict {
            self.graph.on_conflict = policy;
        }
        if let Some(dedupe) = file.dedupe_imports {
            self.graph.dedupe_imports = dedupe;
        }
        Ok(())
    }

    /// Full path of the roster file.
    #[must_use]
    pub fn people_path(&self) -> PathBuf {
        self.fixtures_dir.join(&self.people_file)
    }

    /// Full path of the authorship file.
    #[must_use]
    pub fn papers_path(&self) -> PathBuf {
        self.fixtures_dir.join(&self.papers_file)
    }

    /// Full path of the output file.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

/// Accepts a single ASCII character; `\t` and `tab` mean a tab.
fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(Error::Config(format!(
                "delimiter must be a single ASCII character, got {value:?}"
            ))),
        },
    }
}
