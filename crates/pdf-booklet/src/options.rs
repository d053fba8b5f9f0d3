use crate::constants::{OUTPUT_FILE_PREFIX, SLOTS_PER_SHEET};
use crate::types::*;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet run configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Input
    pub input_file: PathBuf,

    // Output location; see `output_path`
    pub output_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,

    /// Blank placeholders inserted before the first page
    pub leading_blanks: usize,

    /// Maximum logical pages (blanks included) per signature; `None` folds
    /// the whole document as a single booklet
    pub batch_size: Option<usize>,

    pub print_order: PrintOrder,
    pub geometry_policy: GeometryPolicy,
}

impl BookletOptions {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            ..Default::default()
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the layout options
    pub fn validate(&self) -> Result<()> {
        if let Some(batch_size) = self.batch_size {
            if batch_size == 0 || batch_size % SLOTS_PER_SHEET != 0 {
                return Err(BookletError::Config(format!(
                    "Batch size must be a positive multiple of {}, got {}",
                    SLOTS_PER_SHEET, batch_size
                )));
            }
        }
        Ok(())
    }

    /// Validate the options for a file-to-file run
    pub fn validate_paths(&self) -> Result<()> {
        self.validate()?;

        if self.input_file.as_os_str().is_empty() {
            return Err(BookletError::Config("No input file specified".to_string()));
        }
        if self.output_file.is_some() && self.output_dir.is_some() {
            return Err(BookletError::Config(
                "Specify either an output file or an output directory, not both".to_string(),
            ));
        }
        Ok(())
    }

    /// Where the booklet is written.
    ///
    /// An explicit `output_file` wins. Otherwise the file is named
    /// `booklet_<input name>` and placed in `output_dir`, or next to the
    /// input when no directory is given.
    pub fn output_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.output_file {
            return Ok(path.clone());
        }

        let file_name = self.input_file.file_name().ok_or_else(|| {
            BookletError::Config(format!(
                "Input path {} has no file name",
                self.input_file.display()
            ))
        })?;
        let mut name = std::ffi::OsString::from(OUTPUT_FILE_PREFIX);
        name.push(file_name);

        let dir = match &self.output_dir {
            Some(dir) => dir.as_path(),
            None => self.input_file.parent().unwrap_or(Path::new("")),
        };
        Ok(dir.join(name))
    }
}
