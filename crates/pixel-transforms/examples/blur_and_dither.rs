//! Example: grayscale, blur and dither an image file.
//!
//! Decodes the input with the `image` crate, runs the three transforms in
//! sequence and writes one PNG per stage next to `--out`.
//!
//! Run from the workspace root:
//!   cargo run -p pixel-transforms --example blur_and_dither -- --input photo.jpg

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use image::{GrayImage, ImageReader};
use log::info;
use pixel_transforms::{
    GrayscaleStandard, Image, ImageView, dither_to_monochrome, gaussian_blur, grayscale_convert,
};

#[derive(Parser, Debug)]
#[command(about = "Grayscale, blur and dither an image, saving every stage")]
struct Args {
    /// Input image (any format the image crate decodes)
    #[arg(long)]
    input: PathBuf,

    /// Output directory
    #[arg(long, default_value = "out")]
    out: PathBuf,

    /// Luma weights: bt601, bt709 or smpte240m
    #[arg(long, default_value_t = GrayscaleStandard::Bt601)]
    standard: GrayscaleStandard,

    /// Odd kernel side length
    #[arg(long, default_value_t = 5)]
    kernel_size: usize,

    #[arg(long, default_value_t = 1.0)]
    sigma: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let rgb = ImageReader::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?
        .decode()
        .with_context(|| format!("decoding {}", args.input.display()))?
        .into_rgb8();
    let (w, h) = (rgb.width() as usize, rgb.height() as usize);
    let view = ImageView::from_slice(w, h, 3, rgb.as_raw()).context("wrapping decoded pixels")?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let gray = grayscale_convert(&view, args.standard)?;
    save_gray(&args.out.join("gray.png"), &gray)?;

    let blurred = gaussian_blur(&gray.as_view(), args.kernel_size, args.sigma)?;
    save_gray(&args.out.join("blurred.png"), &blurred)?;

    let mono = dither_to_monochrome(&blurred.as_view())?;
    save_gray(&args.out.join("dithered.png"), &mono)?;

    info!("wrote {w}x{h} stages to {}", args.out.display());
    Ok(())
}

fn save_gray(path: &Path, img: &Image<u8>) -> Result<()> {
    let gray = GrayImage::from_raw(img.width() as u32, img.height() as u32, img.data().to_vec())
        .context("constructing GrayImage from raw bytes")?;
    gray.save(path)
        .with_context(|| format!("saving image {}", path.display()))
}
