// craps-icons - platform/config.rs
//
// Config directory resolution and config.toml loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for the tool's configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/craps-icons/)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[output]` section.
    pub output: OutputSection,
    /// `[manifest]` section.
    pub manifest: ManifestSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Icon set directory.
    pub dir: Option<String>,
    /// Create the directory when it is missing.
    pub create_dir: Option<bool>,
}

/// `[manifest]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ManifestSection {
    /// Value written to `info.author`.
    pub author: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration for a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory the icons and manifest are written into.
    pub output_dir: PathBuf,
    /// Create `output_dir` (and parents) if it does not exist.
    pub create_dir: bool,
    /// Manifest `info.author`.
    pub manifest_author: String,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
            create_dir: false,
            manifest_author: constants::DEFAULT_MANIFEST_AUTHOR.to_string(),
            log_level: None,
        }
    }
}

/// Check a manifest author value against the allowed length.
pub fn validate_author(author: &str) -> Result<String, ConfigError> {
    let trimmed = author.trim();
    if (1..=constants::MAX_AUTHOR_LEN).contains(&trimmed.chars().count()) {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::ValueOutOfRange {
            field: "[manifest] author".to_string(),
            value: author.to_string(),
            expected: format!("1-{} characters", constants::MAX_AUTHOR_LEN),
        })
    }
}

/// Validate a parsed config, returning the result plus non-fatal warnings.
///
/// Invalid values produce actionable warnings and fall back to defaults.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Output: dir --
    if let Some(dir) = raw.output.dir {
        if dir.trim().is_empty() {
            warnings.push(format!(
                "[output] dir is empty. Using default ({}).",
                constants::DEFAULT_OUTPUT_DIR
            ));
        } else {
            config.output_dir = PathBuf::from(dir);
        }
    }

    // -- Output: create_dir --
    if let Some(create) = raw.output.create_dir {
        config.create_dir = create;
    }

    // -- Manifest: author --
    if let Some(ref author) = raw.manifest.author {
        match validate_author(author) {
            Ok(a) => config.manifest_author = a,
            Err(e) => warnings.push(format!(
                "{e}. Using default ({}).",
                constants::DEFAULT_MANIFEST_AUTHOR
            )),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let lowered = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lowered.as_str()) {
            config.log_level = Some(lowered);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    (config, warnings)
}

/// Load and validate a config file.
///
/// With `required == false` (the platform default location), a missing file
/// yields defaults with no warnings, and an unreadable or unparseable file
/// yields defaults plus a warning. With `required == true` (a path the user
/// named explicitly), both cases are errors.
pub fn load_config(path: &Path, required: bool) -> Result<(AppConfig, Vec<String>), ConfigError> {
    if !required && !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return Ok((AppConfig::default(), Vec::new()));
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
        .and_then(|content| {
            toml::from_str::<RawConfig>(&content).map_err(|e| ConfigError::TomlParse {
                path: path.to_path_buf(),
                source: e,
            })
        });

    let raw = match parsed {
        Ok(raw) => raw,
        Err(e) if required => return Err(e),
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            return Ok((AppConfig::default(), vec![msg]));
        }
    };

    tracing::info!(path = %path.display(), "Loaded config.toml");

    let (config, warnings) = validate(raw);
    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }
    Ok((config, warnings))
}
