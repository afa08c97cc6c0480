use pixel_transforms::{
    EdgeMode, Error, GaussianBlurConfig, GrayscaleStandard, Image, ImageView, Kernel2D, convolve,
    dither_to_monochrome, gaussian_blur, gaussian_blur_with, grayscale_convert, to_real,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn gradient_rgb(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 255 / (width - 1)) as u8);
            data.push((y * 255 / (height - 1)) as u8);
            data.push(128);
        }
    }
    data
}

#[test]
fn pure_red_image_reduces_to_76() {
    init_logging();
    let rgb = [255u8, 0, 0].repeat(9);
    let view = ImageView::from_slice(3, 3, 3, &rgb).expect("valid view");

    let gray = grayscale_convert(&view, GrayscaleStandard::Bt601).expect("rgb input");
    assert_eq!(gray.data(), &[76u8; 9]);
}

#[test]
fn white_and_black_reduce_to_extremes_under_every_standard() {
    init_logging();
    let mut rgb = vec![255u8; 6];
    rgb.extend_from_slice(&[0; 6]);
    let view = ImageView::from_slice(2, 2, 3, &rgb).expect("valid view");

    for standard in GrayscaleStandard::ALL {
        let gray = grayscale_convert(&view, standard).expect("rgb input");
        assert_eq!(gray.data(), &[255, 255, 0, 0], "{standard}");
    }
}

#[test]
fn transforms_do_not_touch_their_input() {
    init_logging();
    let rgb = gradient_rgb(12, 9);
    let original = rgb.clone();
    let view = ImageView::from_slice(12, 9, 3, &rgb).expect("valid view");

    let gray = grayscale_convert(&view, GrayscaleStandard::Bt709).expect("rgb input");
    let gray_before = gray.clone();
    let _ = gaussian_blur(&view, 5, 1.4).expect("odd size");
    let _ = dither_to_monochrome(&gray.as_view()).expect("single channel");

    assert_eq!(rgb, original);
    assert_eq!(gray, gray_before);
}

#[test]
fn grayscale_blur_dither_pipeline() {
    init_logging();
    let rgb = gradient_rgb(32, 24);
    let view = ImageView::from_slice(32, 24, 3, &rgb).expect("valid view");

    let gray = grayscale_convert(&view, GrayscaleStandard::Bt601).expect("rgb input");
    let blurred = gaussian_blur(&gray.as_view(), 3, 0.8).expect("odd size");
    let mono = dither_to_monochrome(&blurred.as_view()).expect("single channel");

    assert_eq!((mono.width(), mono.height(), mono.channels()), (32, 24, 1));
    assert!(mono.data().iter().all(|&v| v == 0 || v == 255));
    assert!(mono.data().contains(&0));
    assert!(mono.data().contains(&255));
}

#[test]
fn even_kernel_is_reported_by_generator_and_blur() {
    init_logging();
    let img = Image::new_fill(3, 3, 1, 50u8).expect("valid image");

    assert_eq!(Kernel2D::gaussian(4, 1.0), Err(Error::InvalidKernelSize(4)));
    assert_eq!(
        gaussian_blur(&img.as_view(), 4, 1.0),
        Err(Error::InvalidKernelSize(4))
    );
}

#[test]
fn identity_kernel_and_corner_taps_on_real_buffers() {
    init_logging();
    let rgb = gradient_rgb(5, 5);
    let real = to_real(&ImageView::from_slice(5, 5, 3, &rgb).expect("valid view"));

    let unit = Kernel2D::from_vec(1, vec![1.0]).expect("1x1");
    assert_eq!(convolve(&real, &unit).expect("convolve"), real);

    let k = Kernel2D::gaussian(3, 1.0).expect("3x3");
    let out = convolve(&real, &k).expect("convolve");
    for c in 0..3 {
        let at = |x: usize, y: usize| *real.get(x, y, c).expect("in bounds");
        let expected = at(0, 0) * k.tap(0, 0)
            + at(1, 0) * k.tap(1, 0)
            + at(0, 1) * k.tap(0, 1)
            + at(1, 1) * k.tap(1, 1);
        let got = *out.get(0, 0, c).expect("in bounds");
        assert!((got - expected).abs() < 1e-12, "channel {c}");
    }
}

#[test]
fn edge_modes_only_differ_near_the_border() {
    init_logging();
    let img = Image::new_fill(11, 11, 1, 180u8).expect("valid image");
    let base = GaussianBlurConfig {
        kernel_size: 3,
        sigma: 1.0,
        ..Default::default()
    };

    let skip = gaussian_blur_with(&img.as_view(), &base).expect("odd size");
    let clamp = gaussian_blur_with(
        &img.as_view(),
        &GaussianBlurConfig {
            edge: EdgeMode::Clamp,
            ..base
        },
    )
    .expect("odd size");

    assert_eq!(skip.get(5, 5, 0), clamp.get(5, 5, 0));
    assert!(skip.get(0, 0, 0) < clamp.get(0, 0, 0));
    assert_eq!(clamp, img);
}
