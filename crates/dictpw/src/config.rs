//! Configuration file for password generation.
use dictpw_password::GeneratorConfig;
use dictpw_wordlist::{
    expand_globs, parse_delimiter, Wordlist, DEFAULT_DELIMITER,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Settings for a generation run.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of passwords to generate.
    pub num_passwords: usize,

    /// Print crack time estimates for each password.
    pub crack_times: bool,

    /// Wordlist sources.
    pub input: InputConfig,

    /// Password generation options.
    pub generator: GeneratorConfig,

    /// Path the file was loaded from used to determine
    /// relative paths.
    #[serde(skip)]
    file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            num_passwords: 1,
            crack_times: false,
            input: Default::default(),
            generator: Default::default(),
            file: None,
        }
    }
}

impl Settings {
    /// Load settings from a file path.
    ///
    /// Relative wordlist paths and globs are resolved against
    /// the directory containing the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().is_file() {
            return Err(Error::NotFile(path.as_ref().to_path_buf()));
        }

        let contents = std::fs::read_to_string(path.as_ref())?;
        let mut settings: Settings = toml::from_str(&contents)?;
        settings.file = Some(path.as_ref().canonicalize()?);

        let dir = settings.directory();
        for file in settings.input.files.iter_mut() {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }
        for pattern in settings.input.globs.iter_mut() {
            if Path::new(pattern.as_str()).is_relative() {
                *pattern = dir.join(pattern.as_str()).to_string_lossy().into_owned();
            }
        }

        tracing::debug!(path = %path.as_ref().display(), "settings::load");
        Ok(settings)
    }

    /// Parent directory of the file these settings were loaded
    /// from, or the current directory.
    pub fn directory(&self) -> PathBuf {
        self.file
            .as_ref()
            .and_then(|f| f.parent())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        if self.num_passwords == 0 {
            return Err(Error::ZeroPasswords);
        }
        parse_delimiter(&self.input.delimiter)?;
        Ok(())
    }
}

/// Wordlist sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Wordlist files.
    pub files: Vec<PathBuf>,

    /// Glob patterns for wordlist files.
    pub globs: Vec<String>,

    /// Delimiter between words.
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            globs: Vec::new(),
            delimiter: DEFAULT_DELIMITER.to_owned(),
        }
    }
}

impl InputConfig {
    /// Determine if no wordlist sources are configured.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.globs.is_empty()
    }

    /// Load the union of all configured wordlists.
    ///
    /// Uses the built-in wordlist when no sources are configured.
    pub fn load(&self) -> Result<Wordlist> {
        if self.is_empty() {
            return Ok(Wordlist::builtin());
        }
        let delimiter = parse_delimiter(&self.delimiter)?;
        let mut paths = self.files.clone();
        paths.extend(expand_globs(&self.globs)?);
        let wordlist = Wordlist::load_files(&paths, &delimiter)?;
        tracing::debug!(
            files = %paths.len(),
            words = %wordlist.len(),
            "input::load",
        );
        Ok(wordlist)
    }
}
