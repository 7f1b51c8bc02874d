use std::fmt;
use std::path::PathBuf;

use image::ColorType;

use crate::color::ColorTuple;

/// Shape of a successfully decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub color_type: ColorType,
}

/// What happened to a single file. None of these stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Decoded and scanned; rewritten if anything was substituted.
    Converted,
    Unreadable(String),
    WrongChannelCount(u8),
    /// Four channels, but not one byte each.
    UnsupportedSampleType(ColorType),
    /// Pixels matched but the file could not be rewritten; left as it was.
    WriteFailed(String),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    pub info: Option<ImageInfo>,
    /// Pixels that matched the source color.
    pub substituted: u64,
    /// Distinct colors after substitution, ascending by packed value.
    /// `None` unless color collection was requested.
    pub colors: Option<Vec<ColorTuple>>,
}

impl FileReport {
    pub fn unreadable(path: PathBuf, reason: String) -> Self {
        Self {
            path,
            status: FileStatus::Unreadable(reason),
            info: None,
            substituted: 0,
            colors: None,
        }
    }

    pub fn skipped(path: PathBuf, status: FileStatus, info: ImageInfo) -> Self {
        Self {
            path,
            status,
            info: Some(info),
            substituted: 0,
            colors: None,
        }
    }

    /// True when the file was rewritten on disk.
    pub fn touched(&self) -> bool {
        self.status == FileStatus::Converted && self.substituted > 0
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Processing {}", self.path.display())?;

        if let FileStatus::Unreadable(_) = self.status {
            return write!(f, " - unable to read, skipping...");
        }

        if let Some(info) = &self.info {
            write!(
                f,
                ", width = {}, height = {}, channels = {}, type = {:?}",
                info.width, info.height, info.channels, info.color_type
            )?;
        }

        match &self.status {
            FileStatus::WrongChannelCount(_) => return write!(f, " - need 4 channels, skipping..."),
            FileStatus::UnsupportedSampleType(_) => {
                return write!(f, " - need 8 bits per channel, skipping...")
            }
            FileStatus::WriteFailed(_) => write!(
                f,
                ": converted {} pixels - unable to write, skipping...",
                self.substituted
            )?,
            _ => write!(f, ": converted {} pixels", self.substituted)?,
        }

        if let Some(colors) = &self.colors {
            write!(f, ", colors found:")?;
            for (i, color) in colors.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, " {}", color)?;
            }
        }

        Ok(())
    }
}

/// Running totals over a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunTotals {
    pub converted_pixels: u64,
    pub converted_files: u64,
}

impl RunTotals {
    /// Folds one file's outcome in. Only rewritten files count.
    pub fn record(&mut self, report: &FileReport) {
        if report.touched() {
            self.converted_pixels += report.substituted;
            self.converted_files += 1;
        }
    }
}

impl fmt::Display for RunTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Converted a total of {} pixels in {} files",
            self.converted_pixels, self.converted_files
        )
    }
}
