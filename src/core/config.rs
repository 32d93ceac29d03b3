//! Process-wide configuration, built once in `main` and passed down explicitly.
//!
//! Values come from built-in defaults, then `<config dir>/yag/config.json`, then a
//! handful of environment overrides. Commands never look at the environment
//! themselves; everything they need is on [`YagConfig`].

use crate::core::dirs::get_config_directory;
use crate::core::error::{Result, YagError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// An external program plus its fixed leading arguments.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProgramConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ProgramConfig {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct YagConfig {
    /// Fuzzy selector fed with the triage menu on stdin
    pub selector: ProgramConfig,
    /// Offer untracked files in the triage menu even without `--list-untracked`
    pub list_untracked: bool,
    /// Remote that `yag tag` pushes to
    pub tag_remote: String,
    /// Editor opened on the commit scratch file
    pub editor: String,
    /// Command receiving the staged diff on stdin for `yag commit --dry`
    pub clipboard: ProgramConfig,
    /// Command printing a drafted commit message on stdout
    pub commit_drafter: String,
    /// Source checkout used by `yag install`
    pub src_dir: Option<PathBuf>,
    /// Executable launched for triage sub-flows; defaults to the running binary
    pub self_exe: Option<PathBuf>,
}

impl Default for YagConfig {
    fn default() -> Self {
        Self {
            selector: ProgramConfig::new("sk"),
            list_untracked: false,
            tag_remote: "github".to_string(),
            editor: "vim".to_string(),
            clipboard: ProgramConfig::new("pbcopy"),
            commit_drafter: "ollama-commit".to_string(),
            src_dir: None,
            self_exe: None,
        }
    }
}

/// Environment variables that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub src_dir: Option<PathBuf>,
    pub selector: Option<String>,
    pub editor: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            src_dir: non_empty("YAG_SRCDIR").map(PathBuf::from),
            selector: non_empty("YAG_SELECTOR"),
            editor: non_empty("EDITOR"),
        }
    }
}

impl YagConfig {
    /// Load the configuration from the user's config directory and the environment.
    pub fn load() -> Result<Self> {
        let config_file = get_config_directory()?.join(CONFIG_FILE_NAME);
        Self::load_from(&config_file, EnvOverrides::from_env())
    }

    /// Load the configuration from an explicit file, which may be absent.
    pub fn load_from(config_file: &Path, overrides: EnvOverrides) -> Result<Self> {
        let mut config = if config_file.exists() {
            log::debug!("Reading config from {}", config_file.display());
            let content = std::fs::read_to_string(config_file)?;
            serde_json::from_str(&content)
                .map_err(|e| YagError::config_parse_failed(config_file, e))?
        } else {
            log::debug!("No config at {}, using defaults", config_file.display());
            Self::default()
        };

        config.apply(overrides);
        Ok(config)
    }

    fn apply(&mut self, overrides: EnvOverrides) {
        if let Some(src_dir) = overrides.src_dir {
            self.src_dir = Some(src_dir);
        }
        if let Some(selector) = overrides.selector {
            self.selector = ProgramConfig::new(selector);
        }
        if let Some(editor) = overrides.editor {
            self.editor = editor;
        }
    }

    /// Executable used to launch `tag` and `commit` sub-flows.
    pub fn self_exe(&self) -> Result<PathBuf> {
        match &self.self_exe {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_exe()?),
        }
    }
}
