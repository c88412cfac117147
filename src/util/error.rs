// craps-icons - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every I/O failure carries the path it happened on.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all icon generation operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum IconError {
    /// Canvas or geometry could not be produced.
    Render(RenderError),

    /// Writing icons or the manifest failed.
    Output(OutputError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(e) => write!(f, "Render error: {e}"),
            Self::Output(e) => write!(f, "Output error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(e) => Some(e),
            Self::Output(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

/// Errors related to canvas allocation and drawing.
#[derive(Debug)]
pub enum RenderError {
    /// A canvas edge of zero pixels was requested.
    InvalidCanvasSize { size: u32 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCanvasSize { size } => {
                write!(f, "Cannot render a {size}x{size} icon; size must be at least 1")
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<RenderError> for IconError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

/// Errors related to writing generated files.
#[derive(Debug)]
pub enum OutputError {
    /// The output directory does not exist.
    MissingDirectory { path: PathBuf },

    /// The output path exists but is not a directory.
    NotADirectory { path: PathBuf },

    /// The output directory could not be created.
    CreateDirectory { path: PathBuf, source: io::Error },

    /// A PNG file could not be encoded or written.
    ImageWrite {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The manifest could not be serialised.
    ManifestSerialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The manifest file could not be written.
    ManifestWrite { path: PathBuf, source: io::Error },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDirectory { path } => write!(
                f,
                "Output directory '{}' does not exist. \
                 Create it first or pass --create-dir.",
                path.display()
            ),
            Self::NotADirectory { path } => {
                write!(f, "Output path '{}' is not a directory", path.display())
            }
            Self::CreateDirectory { path, source } => write!(
                f,
                "Failed to create output directory '{}': {source}",
                path.display()
            ),
            Self::ImageWrite { path, source } => {
                write!(f, "Failed to write PNG '{}': {source}", path.display())
            }
            Self::ManifestSerialize { path, source } => write!(
                f,
                "Failed to serialise manifest '{}': {source}",
                path.display()
            ),
            Self::ManifestWrite { path, source } => {
                write!(f, "Failed to write manifest '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDirectory { source, .. } => Some(source),
            Self::ImageWrite { source, .. } => Some(source),
            Self::ManifestSerialize { source, .. } => Some(source),
            Self::ManifestWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<OutputError> for IconError {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for IconError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for icon generation results.
pub type Result<T> = std::result::Result<T, IconError>;
