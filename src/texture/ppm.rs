//! Binary PPM (P6) output
//!
//! Layout: ASCII header `P6\n<width> <height>\n255\n`, then width x height
//! R,G,B byte triples in row-major order with no row padding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;

use crate::constants::{CHANNELS, MAX_CHANNEL};
use crate::error::GenerateError;

/// Header for a P6 image of the given size
pub fn ppm_header(width: u32, height: u32) -> String {
    format!("P6\n{} {}\n{}\n", width, height, MAX_CHANNEL)
}

/// Encode raw RGB bytes as a complete P6 file.
///
/// `pixels` must hold exactly `width * height * 3` bytes.
pub fn encode_ppm(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>, GenerateError> {
    let expected = width as usize * height as usize * CHANNELS;
    if pixels.len() != expected {
        return Err(GenerateError::PixelCount {
            expected,
            actual: pixels.len(),
        });
    }

    let header = ppm_header(width, height);
    let mut bytes = Vec::with_capacity(header.len() + expected);
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(pixels);
    Ok(bytes)
}

/// Write a texture to `path`, replacing any existing file
pub fn write_ppm(path: &Path, texture: &RgbImage) -> Result<(), GenerateError> {
    let bytes = encode_ppm(texture.width(), texture.height(), texture.as_raw())?;
    let write_err = |source| GenerateError::WriteTexture {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb};
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("ppm_test_{}_{}", nanos, name))
    }

    #[test]
    fn test_header_format() {
        assert_eq!(ppm_header(64, 64), "P6\n64 64\n255\n");
        assert_eq!(ppm_header(3, 2), "P6\n3 2\n255\n");
    }

    #[test]
    fn test_encode_layout() {
        // 2x1 image: red then blue
        let bytes = encode_ppm(2, 1, &[255, 0, 0, 0, 0, 255]).unwrap();
        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 255]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_encode_rejects_wrong_pixel_count() {
        let err = encode_ppm(2, 2, &[0; 11]).unwrap_err();
        match err {
            GenerateError::PixelCount { expected, actual } => {
                assert_eq!(expected, 12);
                assert_eq!(actual, 11);
            }
            other => panic!("Wrong error: {}", other),
        }
    }

    #[test]
    fn test_write_is_standard_ppm() {
        let mut texture = RgbImage::new(4, 3);
        texture.put_pixel(0, 0, Rgb([1, 2, 3]));
        texture.put_pixel(3, 2, Rgb([250, 251, 252]));

        let path = temp_path("decode.ppm");
        write_ppm(&path, &texture).expect("write ppm");

        let data = fs::read(&path).expect("read back");
        assert!(data.starts_with(b"P6\n4 3\n255\n"));
        assert_eq!(data.len(), "P6\n4 3\n255\n".len() + 4 * 3 * 3);

        let decoded = image::load_from_memory_with_format(&data, ImageFormat::Pnm)
            .expect("decode ppm")
            .to_rgb8();
        assert_eq!(decoded, texture);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let path = temp_path("overwrite.ppm");
        fs::write(&path, vec![7u8; 10_000]).expect("seed file");

        let texture = RgbImage::from_pixel(2, 2, Rgb([9, 9, 9]));
        write_ppm(&path, &texture).expect("overwrite");

        let data = fs::read(&path).expect("read back");
        assert_eq!(data.len(), "P6\n2 2\n255\n".len() + 12);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let path = temp_path("missing_dir").join("grass.ppm");
        let texture = RgbImage::new(1, 1);
        let err = write_ppm(&path, &texture).unwrap_err();
        assert!(matches!(err, GenerateError::WriteTexture { .. }));
        assert!(err.to_string().contains("grass.ppm"));
    }
}
