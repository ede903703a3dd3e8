use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
}

/// Build a non-uniform RGB image whose content depends on `seed`
pub fn gradient_image(width: u32, height: u32, seed: u8) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x as u8).wrapping_add(seed),
            (y as u8).wrapping_mul(3),
            ((x * y) as u8).wrapping_add(seed.wrapping_mul(7)),
        ])
    })
}

/// Save a non-uniform RGB JPEG
pub fn create_jpeg(dir: &Path, name: &str, width: u32, height: u32, seed: u8) -> PathBuf {
    let path = dir.join(name);
    ensure_parent(&path);
    gradient_image(width, height, seed)
        .save_with_format(&path, ImageFormat::Jpeg)
        .unwrap();
    path
}

/// Save a single-colour RGB JPEG
pub fn create_solid_jpeg(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    ensure_parent(&path);
    RgbImage::from_pixel(width, height, Rgb(color))
        .save_with_format(&path, ImageFormat::Jpeg)
        .unwrap();
    path
}

/// Save a non-uniform grayscale JPEG
pub fn create_gray_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    ensure_parent(&path);
    GrayImage::from_fn(width, height, |x, y| Luma([(x.wrapping_mul(y) % 256) as u8]))
        .save_with_format(&path, ImageFormat::Jpeg)
        .unwrap();
    path
}

/// Save an RGB image as PNG bytes, whatever the file name says
pub fn create_png(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    ensure_parent(&path);
    image.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

/// Save an RGBA image as PNG bytes
pub fn create_rgba_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    ensure_parent(&path);
    RgbaImage::from_fn(width, height, |x, y| image::Rgba([x as u8, y as u8, 0, 128]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}

/// Write arbitrary bytes
pub fn create_raw(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    ensure_parent(&path);
    fs::write(&path, bytes).unwrap();
    path
}

/// Save a four-channel CMYK JPEG
pub fn create_cmyk_jpeg(dir: &Path, name: &str, width: u16, height: u16) -> PathBuf {
    let path = dir.join(name);
    ensure_parent(&path);
    let data: Vec<u8> = (0..height)
        .flat_map(|y| (0..width).flat_map(move |x| [(x * 2) as u8, y as u8, (x ^ y) as u8, 32]))
        .collect();
    jpeg_encoder::Encoder::new_file(&path, 90)
        .unwrap()
        .encode(&data, width, height, jpeg_encoder::ColorType::Cmyk)
        .unwrap();
    path
}

fn create_encoded_png(
    dir: &Path,
    name: &str,
    (width, height): (u32, u32),
    color: png::ColorType,
    depth: png::BitDepth,
    data: &[u8],
) -> PathBuf {
    let path = dir.join(name);
    ensure_parent(&path);
    let file = fs::File::create(&path).unwrap();
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(depth);
    if color == png::ColorType::Indexed {
        encoder.set_palette(vec![10, 20, 30, 200, 40, 40, 40, 200, 40, 40, 40, 200]);
    }
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    path
}

/// Save an 8-bit palette PNG with four colours
pub fn create_palette_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let data: Vec<u8> = (0..height)
        .flat_map(|y| (0..width).map(move |x| ((x * y + x) % 4) as u8))
        .collect();
    create_encoded_png(
        dir,
        name,
        (width, height),
        png::ColorType::Indexed,
        png::BitDepth::Eight,
        &data,
    )
}

/// Save a 1-bit grayscale PNG
pub fn create_bilevel_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let row_bytes = ((width + 7) / 8) as usize;
    let data: Vec<u8> = (0..height)
        .flat_map(|y| std::iter::repeat(if y % 3 == 0 { 0xF0 } else { 0x0F }).take(row_bytes))
        .collect();
    create_encoded_png(
        dir,
        name,
        (width, height),
        png::ColorType::Grayscale,
        png::BitDepth::One,
        &data,
    )
}
