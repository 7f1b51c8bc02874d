use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgba, RgbaImage};
use log::{debug, error, info};

use crate::codec::{FsCodec, ImageCodec, LoadedImage};
use crate::color::ColorTuple;
use crate::report::{FileReport, FileStatus, ImageInfo, RunTotals};

/// Which color to replace, what to replace it with, and whether to record
/// the colors seen along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub from: ColorTuple,
    pub to: ColorTuple,
    pub collect_colors: bool,
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub substituted: u64,
    pub colors: Option<BTreeSet<ColorTuple>>,
}

/// Replaces every pixel exactly equal to `from` with `to`, in row-major order.
///
/// When color collection is on, each pixel is recorded *after* any
/// replacement, so the source color only shows up if it equals the target.
pub fn substitute_pixels(substitution: &Substitution, image: &mut RgbaImage) -> ScanOutcome {
    let from: Rgba<u8> = substitution.from.into();
    let to: Rgba<u8> = substitution.to.into();

    let mut colors = substitution.collect_colors.then(BTreeSet::new);
    let mut substituted = 0;

    for pixel in image.pixels_mut() {
        if *pixel == from {
            *pixel = to;
            substituted += 1;
        }
        if let Some(colors) = colors.as_mut() {
            colors.insert(ColorTuple::from(*pixel));
        }
    }

    ScanOutcome {
        substituted,
        colors,
    }
}

pub struct Converter<C = FsCodec> {
    substitution: Substitution,
    codec: C,
}

impl Converter<FsCodec> {
    pub fn new(substitution: Substitution) -> Self {
        Self::with_codec(substitution, FsCodec)
    }
}

impl<C: ImageCodec> Converter<C> {
    pub fn with_codec(substitution: Substitution, codec: C) -> Self {
        Self {
            substitution,
            codec,
        }
    }

    /// Runs the substitution on one file.
    ///
    /// The file is rewritten only when at least one pixel changed, and only
    /// after the whole image has been encoded. Every failure is folded into
    /// the returned report.
    pub fn convert_file(&self, path: &Path) -> FileReport {
        let LoadedImage { image, format } = match self.codec.load(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                info!("Unable to read {}: {}", path.display(), e);
                return FileReport::unreadable(path.to_path_buf(), e.to_string());
            }
        };

        let color_type = image.color();
        let info = ImageInfo {
            width: image.width(),
            height: image.height(),
            channels: color_type.channel_count(),
            color_type,
        };
        debug!("Decoded {}: {:?}", path.display(), info);

        if info.channels != 4 {
            info!(
                "Skipping {}: {} channels",
                path.display(),
                info.channels
            );
            return FileReport::skipped(
                path.to_path_buf(),
                FileStatus::WrongChannelCount(info.channels),
                info,
            );
        }

        let mut pixels = match image {
            DynamicImage::ImageRgba8(pixels) => pixels,
            _ => {
                info!("Skipping {}: {:?} samples", path.display(), color_type);
                return FileReport::skipped(
                    path.to_path_buf(),
                    FileStatus::UnsupportedSampleType(color_type),
                    info,
                );
            }
        };

        let outcome = substitute_pixels(&self.substitution, &mut pixels);

        let mut status = FileStatus::Converted;
        if outcome.substituted > 0 {
            if let Err(e) = self.codec.save(path, &pixels, format) {
                error!("Unable to write {}: {}", path.display(), e);
                status = FileStatus::WriteFailed(e.to_string());
            }
        } else {
            debug!("No matching pixels in {}, leaving it alone", path.display());
        }

        FileReport {
            path: path.to_path_buf(),
            status,
            info: Some(info),
            substituted: outcome.substituted,
            colors: outcome.colors.map(|colors| colors.into_iter().collect()),
        }
    }

    /// Converts `paths` in order, handing each report to `on_report` as soon
    /// as its file is done.
    pub fn convert_each<F>(&self, paths: &[PathBuf], mut on_report: F) -> RunTotals
    where
        F: FnMut(&FileReport),
    {
        let mut totals = RunTotals::default();
        for path in paths {
            let report = self.convert_file(path);
            totals.record(&report);
            on_report(&report);
        }

        info!(
            "Run finished: {} pixels in {} of {} files",
            totals.converted_pixels,
            totals.converted_files,
            paths.len()
        );
        totals
    }

    pub fn convert_all(&self, paths: &[PathBuf]) -> (Vec<FileReport>, RunTotals) {
        let mut reports = Vec::with_capacity(paths.len());
        let totals = self.convert_each(paths, |report| reports.push(report.clone()));
        (reports, totals)
    }
}
