// craps-icons - platform/fs.rs
//
// Filesystem side of a generation run: output directory checks, PNG and
// manifest writes. Every failure carries the offending path.

use crate::core::manifest::Manifest;
use crate::util::error::OutputError;
use image::{ImageFormat, RgbaImage};
use std::io::BufWriter;
use std::path::Path;

/// Make sure `dir` exists and is a directory.
///
/// When `create` is true a missing directory (and its parents) is created;
/// otherwise a missing directory is an error.
pub fn ensure_output_dir(dir: &Path, create: bool) -> Result<(), OutputError> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(OutputError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }
    if !create {
        return Err(OutputError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    std::fs::create_dir_all(dir).map_err(|e| OutputError::CreateDirectory {
        path: dir.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %dir.display(), "Created output directory");
    Ok(())
}

/// Encode `image` as PNG at `path`, replacing any existing file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| OutputError::ImageWrite {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Serialise `manifest` to `path`, replacing any existing file.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), OutputError> {
    let file = std::fs::File::create(path).map_err(|e| OutputError::ManifestWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    manifest.write_json(BufWriter::new(file), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::iconset::ICON_SET;
    use image::Rgba;

    #[test]
    fn test_missing_dir_without_create() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("absent");
        assert!(matches!(
            ensure_output_dir(&missing, false),
            Err(OutputError::MissingDirectory { .. })
        ));
        assert!(!missing.exists());
    }

    #[test]
    fn test_missing_dir_with_create() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_output_dir(&nested, true).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_file_in_place_of_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(matches!(
            ensure_output_dir(&file, true),
            Err(OutputError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_png_written_and_readable() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tile.png");
        let img = RgbaImage::from_pixel(4, 3, Rgba([1, 2, 3, 255]));
        write_png(&img, &path).unwrap();

        let decoded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_manifest_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Contents.json");
        std::fs::write(&path, "stale").unwrap();

        write_manifest(&Manifest::for_icon_set(&ICON_SET, "xcode"), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Manifest = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.images.len(), 10);
    }

    #[test]
    fn test_png_into_missing_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("gone").join("x.png");
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        assert!(matches!(
            write_png(&img, &path),
            Err(OutputError::ImageWrite { .. })
        ));
    }
}
