#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use image::{GrayImage, RgbImage, RgbaImage};
use lib_recolor::{ColorTuple, Substitution};

pub const YELLOW: ColorTuple = ColorTuple::from_packed(0xffff00ff);
pub const HALF_YELLOW: ColorTuple = ColorTuple::from_packed(0xffff0080);
pub const CLEAR: ColorTuple = ColorTuple::new(0, 0, 0, 0);

pub fn yellow_to_half(collect_colors: bool) -> Substitution {
    Substitution {
        from: YELLOW,
        to: HALF_YELLOW,
        collect_colors,
    }
}

/// A `width` x `height` transparent image with yellow at each of `spots`.
pub fn spotted_image(width: u32, height: u32, spots: &[(u32, u32)]) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, CLEAR.into());
    for &(x, y) in spots {
        image.put_pixel(x, y, YELLOW.into());
    }
    image
}

fn prepare(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    path
}

pub fn write_rgba(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = prepare(dir, name);
    image.save(&path).unwrap();
    path
}

pub fn write_rgb(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = prepare(dir, name);
    image.save(&path).unwrap();
    path
}

pub fn write_gray(dir: &Path, name: &str, image: &GrayImage) -> PathBuf {
    let path = prepare(dir, name);
    image.save(&path).unwrap();
    path
}

pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = prepare(dir, name);
    fs::write(&path, bytes).unwrap();
    path
}

pub fn read_rgba(path: &Path) -> RgbaImage {
    image::open(path).unwrap().to_rgba8()
}

/// Contents and modification time, for checking a file was left alone.
pub fn snapshot(path: &Path) -> (Vec<u8>, SystemTime) {
    let bytes = fs::read(path).unwrap();
    let modified = fs::metadata(path).unwrap().modified().unwrap();
    (bytes, modified)
}
