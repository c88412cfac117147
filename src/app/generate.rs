// craps-icons - app/generate.rs
//
// Generation run: compose every icon in the set, write each as PNG, then
// overwrite the manifest. Sequential; each icon owns its own canvas.
//
// Progress is reported through a callback so the binary can print it and
// tests can capture it.

use crate::core::icon;
use crate::core::iconset::{IconSpec, ICON_SET};
use crate::core::manifest::Manifest;
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::Result;
use std::path::PathBuf;
use std::time::Instant;

/// Progress events emitted during a run, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Started,
    IconWritten { filename: &'static str, pixels: u32 },
    ManifestWritten,
    Finished,
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Started => write!(f, "Generating {} app icons...", constants::APP_NAME),
            Self::IconWritten { filename, pixels } => {
                write!(f, "  Created {filename} ({pixels}x{pixels})")
            }
            Self::ManifestWritten => {
                write!(f, "  Updated {}", constants::MANIFEST_FILE_NAME)
            }
            Self::Finished => write!(f, "\nDone! Rebuild the app to see the new icon."),
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// PNG files written, in icon set order.
    pub icons: Vec<PathBuf>,
    pub manifest: PathBuf,
}

/// Generate the full icon set described by [`ICON_SET`] into `config.output_dir`.
pub fn generate<F>(config: &AppConfig, on_progress: F) -> Result<GenerationReport>
where
    F: FnMut(&Progress),
{
    generate_set(config, &ICON_SET, on_progress)
}

/// Generate the icons in `specs` into `config.output_dir`, then write a
/// manifest listing exactly those icons in the same order.
pub fn generate_set<F>(
    config: &AppConfig,
    specs: &[IconSpec],
    mut on_progress: F,
) -> Result<GenerationReport>
where
    F: FnMut(&Progress),
{
    let started = Instant::now();
    on_progress(&Progress::Started);

    let dir = config.output_dir.as_path();
    fs::ensure_output_dir(dir, config.create_dir)?;
    tracing::info!(dir = %dir.display(), icons = specs.len(), "Generating icon set");

    let mut icons = Vec::with_capacity(specs.len());
    for spec in specs {
        let pixels = spec.pixels();
        let image = icon::compose_icon(pixels)?;
        let path = dir.join(spec.filename);
        fs::write_png(&image, &path)?;

        tracing::debug!(file = spec.filename, pixels, "Icon written");
        on_progress(&Progress::IconWritten {
            filename: spec.filename,
            pixels,
        });
        icons.push(path);
    }

    let manifest_path = dir.join(constants::MANIFEST_FILE_NAME);
    let manifest = Manifest::for_icon_set(specs, &config.manifest_author);
    fs::write_manifest(&manifest, &manifest_path)?;
    on_progress(&Progress::ManifestWritten);

    tracing::info!(
        icons = icons.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Icon set complete"
    );
    on_progress(&Progress::Finished);

    Ok(GenerationReport {
        icons,
        manifest: manifest_path,
    })
}
