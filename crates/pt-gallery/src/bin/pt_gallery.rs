use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::{ColorType, DynamicImage, ImageReader};
use log::info;
use pixel_transforms::{
    EdgeMode, GaussianBlurConfig, GrayscaleStandard, Image, ImageView, dither_to_monochrome,
    gaussian_blur_with, grayscale_convert,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "pt_gallery")]
#[command(about = "Run pixel-transforms algorithms on image files")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// RGB to single-channel luma
    #[command(name = "grayscale")]
    Grayscale(GrayscaleArgs),
    /// Gaussian blur on every channel
    #[command(name = "blur")]
    Blur(BlurArgs),
    /// Floyd-Steinberg dithering to black and white
    #[command(name = "dither")]
    Dither(DitherArgs),
    /// Grayscale, blur, then dither; saves every stage
    #[command(name = "pipeline")]
    Pipeline(PipelineArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "out")]
    out: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct StandardArgs {
    /// Luma weights: bt601, bt709 or smpte240m
    #[arg(long, default_value_t = GrayscaleStandard::Bt601)]
    standard: GrayscaleStandard,
}

#[derive(Args, Debug, Clone)]
struct KernelArgs {
    /// Odd kernel side length
    #[arg(long, default_value_t = 5)]
    kernel_size: usize,
    #[arg(long, default_value_t = 1.0)]
    sigma: f64,
    /// Border handling: skip, renormalize, clamp or reflect101
    #[arg(long, default_value_t = EdgeMode::Skip)]
    edge: EdgeMode,
}

impl KernelArgs {
    fn config(&self) -> GaussianBlurConfig {
        GaussianBlurConfig {
            kernel_size: self.kernel_size,
            sigma: self.sigma,
            edge: self.edge,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct GrayscaleArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[command(flatten)]
    standard: StandardArgs,
}

#[derive(Args, Debug, Clone)]
struct BlurArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[command(flatten)]
    kernel: KernelArgs,
}

#[derive(Args, Debug, Clone)]
struct DitherArgs {
    #[command(flatten)]
    common: CommonArgs,
    // only consulted when the input has color channels
    #[command(flatten)]
    standard: StandardArgs,
}

#[derive(Args, Debug, Clone)]
struct PipelineArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[command(flatten)]
    standard: StandardArgs,
    #[command(flatten)]
    kernel: KernelArgs,
}

#[derive(Debug, Clone, Serialize)]
struct InputMeta {
    path: String,
    width: usize,
    height: usize,
    channels: usize,
}

#[derive(Debug, Clone, Serialize)]
struct BlurMeta {
    kernel_size: usize,
    sigma: f64,
    edge: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct DitherMeta {
    kernel: &'static str,
    threshold: f64,
    white_pixels: usize,
    total_pixels: usize,
}

#[derive(Debug, Clone, Serialize)]
struct RunMeta {
    operation: &'static str,
    input: InputMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    standard: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    blur: Option<BlurMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dither: Option<DitherMeta>,
    outputs: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Grayscale(args) => run_grayscale(args),
        Command::Blur(args) => run_blur(args),
        Command::Dither(args) => run_dither(args),
        Command::Pipeline(args) => run_pipeline(args),
    }
}

fn run_grayscale(args: GrayscaleArgs) -> Result<()> {
    let out_dir = prepare_out_dir(&args.common)?;
    let rgb = load_rgb(&args.common.input)?;
    let standard = args.standard.standard;

    let gray = grayscale_convert(&rgb.as_view(), standard).context("converting to grayscale")?;
    let out = out_dir.join("grayscale.png");
    save_image(&out, &gray)?;

    write_meta(
        &out_dir,
        &RunMeta {
            operation: "grayscale",
            input: input_meta(&args.common.input, &rgb),
            standard: Some(standard.as_str()),
            blur: None,
            dither: None,
            outputs: vec![display(&out)],
        },
    )
}

fn run_blur(args: BlurArgs) -> Result<()> {
    let out_dir = prepare_out_dir(&args.common)?;
    let img = load_native(&args.common.input)?;
    let cfg = args.kernel.config();

    let blurred = gaussian_blur_with(&img.as_view(), &cfg)
        .with_context(|| format!("blurring with kernel_size={}", cfg.kernel_size))?;
    let out = out_dir.join("blur.png");
    save_image(&out, &blurred)?;

    write_meta(
        &out_dir,
        &RunMeta {
            operation: "blur",
            input: input_meta(&args.common.input, &img),
            standard: None,
            blur: Some(blur_meta(&cfg)),
            dither: None,
            outputs: vec![display(&out)],
        },
    )
}

fn run_dither(args: DitherArgs) -> Result<()> {
    let out_dir = prepare_out_dir(&args.common)?;
    let img = load_native(&args.common.input)?;
    let standard = args.standard.standard;
    let input = input_meta(&args.common.input, &img);
    let reduced = img.channels() != 1;

    let gray = to_single_channel(img, standard)?;
    let mono = dither_to_monochrome(&gray.as_view()).context("dithering")?;
    let out = out_dir.join("dither.png");
    save_image(&out, &mono)?;

    write_meta(
        &out_dir,
        &RunMeta {
            operation: "dither",
            input,
            standard: reduced.then_some(standard.as_str()),
            blur: None,
            dither: Some(dither_meta(&mono)),
            outputs: vec![display(&out)],
        },
    )
}

fn run_pipeline(args: PipelineArgs) -> Result<()> {
    let out_dir = prepare_out_dir(&args.common)?;
    let rgb = load_rgb(&args.common.input)?;
    let standard = args.standard.standard;
    let cfg = args.kernel.config();

    let gray = grayscale_convert(&rgb.as_view(), standard).context("converting to grayscale")?;
    let blurred = gaussian_blur_with(&gray.as_view(), &cfg)
        .with_context(|| format!("blurring with kernel_size={}", cfg.kernel_size))?;
    let mono = dither_to_monochrome(&blurred.as_view()).context("dithering")?;

    let mut outputs = Vec::new();
    for (name, img) in [
        ("grayscale.png", &gray),
        ("blur.png", &blurred),
        ("dither.png", &mono),
    ] {
        let path = out_dir.join(name);
        save_image(&path, img)?;
        outputs.push(display(&path));
    }

    write_meta(
        &out_dir,
        &RunMeta {
            operation: "pipeline",
            input: input_meta(&args.common.input, &rgb),
            standard: Some(standard.as_str()),
            blur: Some(blur_meta(&cfg)),
            dither: Some(dither_meta(&mono)),
            outputs,
        },
    )
}

fn prepare_out_dir(common: &CommonArgs) -> Result<PathBuf> {
    ensure_file_exists(&common.input, "input")?;
    fs::create_dir_all(&common.out)
        .with_context(|| format!("creating output directory {}", common.out.display()))?;
    Ok(common.out.clone())
}

fn decode(path: &Path) -> Result<DynamicImage> {
    ImageReader::open(path)
        .with_context(|| format!("opening {}", path.display()))?
        .decode()
        .with_context(|| format!("decoding {}", path.display()))
}

fn load_rgb(path: &Path) -> Result<Image<u8>> {
    let rgb = decode(path)?.into_rgb8();
    let (w, h) = (rgb.width() as usize, rgb.height() as usize);
    let img = Image::from_vec(w, h, 3, rgb.into_raw()).context("wrapping decoded RGB pixels")?;
    info!("loaded {} as {w}x{h} RGB", path.display());
    Ok(img)
}

/// Keeps gray inputs single-channel and alpha inputs with their alpha plane.
fn load_native(path: &Path) -> Result<Image<u8>> {
    let decoded = decode(path)?;
    let (w, h) = (decoded.width() as usize, decoded.height() as usize);
    let color = decoded.color();
    let (channels, raw) = match (color.has_color(), color.has_alpha()) {
        (true, true) => (4, decoded.into_rgba8().into_raw()),
        (true, false) => (3, decoded.into_rgb8().into_raw()),
        (false, true) => (2, decoded.into_luma_alpha8().into_raw()),
        (false, false) => (1, decoded.into_luma8().into_raw()),
    };

    let img = Image::from_vec(w, h, channels, raw).context("wrapping decoded pixels")?;
    info!("loaded {} as {w}x{h}x{channels}", path.display());
    Ok(img)
}

fn to_single_channel(img: Image<u8>, standard: GrayscaleStandard) -> Result<Image<u8>> {
    match img.channels() {
        1 => Ok(img),
        3 => grayscale_convert(&img.as_view(), standard).context("converting to grayscale"),
        n => {
            let rgb: Vec<u8> = img
                .data()
                .chunks_exact(n)
                .flat_map(|px| match n {
                    2 => [px[0], px[0], px[0]],
                    _ => [px[0], px[1], px[2]],
                })
                .collect();
            let view = ImageView::from_slice(img.width(), img.height(), 3, &rgb)
                .context("dropping alpha channel")?;
            grayscale_convert(&view, standard).context("converting to grayscale")
        }
    }
}

fn save_image(path: &Path, img: &Image<u8>) -> Result<()> {
    let color = match img.channels() {
        1 => ColorType::L8,
        2 => ColorType::La8,
        3 => ColorType::Rgb8,
        4 => ColorType::Rgba8,
        n => bail!("cannot encode an image with {n} channels"),
    };
    image::save_buffer(
        path,
        img.data(),
        img.width() as u32,
        img.height() as u32,
        color,
    )
    .with_context(|| format!("saving image {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

fn input_meta(path: &Path, img: &Image<u8>) -> InputMeta {
    InputMeta {
        path: display(path),
        width: img.width(),
        height: img.height(),
        channels: img.channels(),
    }
}

fn blur_meta(cfg: &GaussianBlurConfig) -> BlurMeta {
    BlurMeta {
        kernel_size: cfg.kernel_size,
        sigma: cfg.sigma,
        edge: cfg.edge.as_str(),
    }
}

fn dither_meta(mono: &Image<u8>) -> DitherMeta {
    DitherMeta {
        kernel: "floyd-steinberg 7/3/5/1",
        threshold: 0.5,
        white_pixels: mono.data().iter().filter(|&&v| v == u8::MAX).count(),
        total_pixels: mono.data().len(),
    }
}

fn write_meta(out_dir: &Path, meta: &RunMeta) -> Result<()> {
    let path = out_dir.join("meta.json");
    let bytes = serde_json::to_vec_pretty(meta).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
