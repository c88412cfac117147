// craps-icons - core/manifest.rs
//
// Typed model of the asset catalog `Contents.json` and its JSON writer.
// Core layer: writes to any Write trait object.

use crate::core::iconset::IconSpec;
use crate::util::constants;
use crate::util::error::OutputError;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Root of `Contents.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

/// One entry under `images`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

/// Authorship block under `info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Manifest {
    /// Build the manifest for `specs`, keeping their order.
    pub fn for_icon_set(specs: &[IconSpec], author: &str) -> Self {
        let images = specs
            .iter()
            .map(|spec| ManifestImage {
                filename: spec.filename.to_string(),
                idiom: constants::MANIFEST_IDIOM.to_string(),
                scale: spec.scale.label().to_string(),
                size: spec.size_label(),
            })
            .collect();

        Self {
            images,
            info: ManifestInfo {
                author: author.to_string(),
                version: constants::MANIFEST_VERSION,
            },
        }
    }

    /// Write pretty-printed JSON followed by a newline.
    ///
    /// `path` is only used for error context.
    pub fn write_json<W: Write>(&self, mut writer: W, path: &Path) -> Result<(), OutputError> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| {
            OutputError::ManifestSerialize {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
        writer
            .write_all(b"\n")
            .and_then(|()| writer.flush())
            .map_err(|e| OutputError::ManifestWrite {
                path: path.to_path_buf(),
                source: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::iconset::ICON_SET;
    use std::path::PathBuf;

    #[test]
    fn test_manifest_has_every_icon_in_order() {
        let manifest = Manifest::for_icon_set(&ICON_SET, "xcode");
        assert_eq!(manifest.images.len(), 10);
        for (image, spec) in manifest.images.iter().zip(ICON_SET.iter()) {
            assert_eq!(image.filename, spec.filename);
            assert_eq!(image.idiom, "mac");
            assert_eq!(image.scale, spec.scale.label());
            assert_eq!(image.size, spec.size_label());
        }
        assert_eq!(manifest.info.author, "xcode");
        assert_eq!(manifest.info.version, 1);
    }

    #[test]
    fn test_json_shape() {
        let manifest = Manifest::for_icon_set(&ICON_SET[..2], "xcode");
        let mut buf = Vec::new();
        manifest
            .write_json(&mut buf, &PathBuf::from("Contents.json"))
            .unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.ends_with("}\n"));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["images"][1]["filename"], "icon_16x16@2x.png");
        assert_eq!(value["images"][1]["scale"], "2x");
        assert_eq!(value["images"][1]["size"], "16x16");
        assert_eq!(value["info"]["version"], 1);
    }

    #[test]
    fn test_custom_author() {
        let manifest = Manifest::for_icon_set(&ICON_SET, "casey");
        assert_eq!(manifest.info.author, "casey");
    }
}
