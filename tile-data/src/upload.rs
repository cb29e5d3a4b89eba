//! Handling of user-supplied image files.
//!
//! An upload is staged as `temp_<file name>` in a working directory,
//! measured, and removed again. Concurrent uploads with the same name in the
//! same directory overwrite each other.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::ImageAreaError;
use crate::image_area::detect_area_from_path;

pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Wraps uploaded bytes. Any directory part of `file_name` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ImageAreaError::UnsupportedType`] unless the extension is
    /// one of [`ACCEPTED_EXTENSIONS`].
    pub fn new(
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Self, ImageAreaError> {
        let file_name = Path::new(file_name)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let accepted = Path::new(&file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()));
        if !accepted {
            return Err(ImageAreaError::UnsupportedType { file_name });
        }

        Ok(Self { file_name, bytes })
    }

    /// Reads an upload from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ImageAreaError::UnsupportedType`] for other extensions and
    /// [`ImageAreaError::FileSystem`] if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, ImageAreaError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        // Reject by extension before touching the disk.
        Self::new(&file_name, Vec::new())?;

        let bytes = fs::read(path).map_err(|source| ImageAreaError::FileSystem {
            path: path.to_path_buf(),
            operation: "read",
            source,
        })?;
        Self::new(&file_name, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Name the upload is staged under while it is processed.
    pub fn temp_file_name(&self) -> String {
        format!("temp_{}", self.file_name)
    }

    pub fn temp_path(
        &self,
        temp_dir: &Path,
    ) -> PathBuf {
        temp_dir.join(self.temp_file_name())
    }

    /// Stages the upload in `temp_dir`, estimates its covered area in square
    /// feet and removes the staged file.
    ///
    /// # Errors
    ///
    /// Returns [`ImageAreaError::FileSystem`] if the staged file cannot be
    /// written or removed, and [`ImageAreaError::Decode`] if it is not a
    /// readable image.
    pub fn estimate_area(
        &self,
        temp_dir: &Path,
    ) -> Result<Decimal, ImageAreaError> {
        let path = self.temp_path(temp_dir);
        fs::write(&path, &self.bytes).map_err(|source| ImageAreaError::FileSystem {
            path: path.clone(),
            operation: "write",
            source,
        })?;
        debug!(path = %path.display(), bytes = self.bytes.len(), "staged upload");

        let detected = detect_area_from_path(&path);

        if let Err(source) = fs::remove_file(&path) {
            warn!(path = %path.display(), %source, "failed to remove staged upload");
            if detected.is_ok() {
                return Err(ImageAreaError::FileSystem {
                    path,
                    operation: "remove",
                    source,
                });
            }
        }

        detected
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageBuffer, ImageFormat, Luma};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn png_bytes(
        width: u32,
        height: u32,
        value: u8,
    ) -> Vec<u8> {
        let image: ImageBuffer<Luma<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(width, height, Luma([value]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn accepts_listed_extensions_in_any_case() {
        for name in ["floor.jpg", "floor.JPEG", "plan.Png"] {
            assert!(ImageUpload::new(name, Vec::new()).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_other_extensions() {
        let err = ImageUpload::new("floor.gif", Vec::new()).unwrap_err();

        assert!(matches!(
            err,
            ImageAreaError::UnsupportedType { file_name } if file_name == "floor.gif"
        ));
    }

    #[test]
    fn rejects_missing_extension() {
        assert!(ImageUpload::new("floor", Vec::new()).is_err());
    }

    #[test]
    fn directory_part_of_name_is_dropped() {
        let upload = ImageUpload::new("../../etc/floor.png", Vec::new()).unwrap();

        assert_eq!(upload.file_name(), "floor.png");
        assert_eq!(upload.temp_file_name(), "temp_floor.png");
    }

    #[test]
    fn estimate_area_stages_measures_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let upload = ImageUpload::new("room.png", png_bytes(100, 100, 0)).unwrap();

        let area = upload.estimate_area(dir.path()).unwrap();

        assert_eq!(area, dec!(10.76));
        assert!(!upload.temp_path(dir.path()).exists());
    }

    #[test]
    fn estimate_area_of_blank_image_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let upload = ImageUpload::new("blank.png", png_bytes(40, 40, 255)).unwrap();

        assert_eq!(upload.estimate_area(dir.path()).unwrap(), dec!(0));
    }

    #[test]
    fn corrupt_upload_is_decode_error_and_still_cleaned_up() {
        let dir = tempfile::tempdir().unwrap();
        let upload = ImageUpload::new("broken.png", b"not a png".to_vec()).unwrap();

        let result = upload.estimate_area(dir.path());

        assert!(matches!(result, Err(ImageAreaError::Decode { .. })));
        assert!(!upload.temp_path(dir.path()).exists());
    }

    #[test]
    fn missing_temp_dir_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let upload = ImageUpload::new("room.png", png_bytes(2, 2, 0)).unwrap();

        let result = upload.estimate_area(&dir.path().join("missing"));

        assert!(matches!(
            result,
            Err(ImageAreaError::FileSystem {
                operation: "write",
                ..
            })
        ));
    }

    #[test]
    fn from_path_reads_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kitchen.png");
        fs::write(&path, png_bytes(3, 3, 0)).unwrap();

        let upload = ImageUpload::from_path(&path).unwrap();

        assert_eq!(upload.file_name(), "kitchen.png");
        assert_eq!(upload.bytes, png_bytes(3, 3, 0));
    }
}
