//! Decoding JPEG/PNG bytes into a [`PixelBuffer`], with EXIF orientation applied.

use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::PixelBuffer;
use crate::error::{ProcessError, ProcessResult};

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal + rotate 270 CW.
    Transpose = 5,
    Rotate90CW = 6,
    /// Flip horizontal + rotate 90 CW.
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Decode image bytes (JPEG or PNG) into an upright RGBA buffer.
///
/// # Errors
///
/// Returns `ProcessError::Decode` if the format is not recognized or the
/// data is corrupt or truncated.
pub fn decode(bytes: &[u8]) -> ProcessResult<PixelBuffer> {
    let orientation = read_orientation(bytes);

    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ProcessError::Decode(e.to_string()))?
        .decode()
        .map_err(|e| ProcessError::Decode(e.to_string()))?;

    let upright = apply_orientation(img, orientation);
    PixelBuffer::from_rgba_image(upright.into_rgba8())
        .map_err(|e| ProcessError::Decode(e.to_string()))
}

/// Read an image file and decode it.
///
/// The file handle is released before decoding starts.
///
/// # Errors
///
/// * `ProcessError::Io` if the file cannot be read
/// * `ProcessError::Decode` if its contents are not a supported image
pub fn load(path: impl AsRef<Path>) -> ProcessResult<PixelBuffer> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| ProcessError::Io(format!("{}: {}", path.display(), e)))?;
    decode(&bytes)
}

/// Extract the EXIF orientation, defaulting to `Normal` when absent or unreadable.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };
    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgba;
    use image::ImageFormat;

    fn png_bytes(img: &image::RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([120, 130, 140]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Jpeg).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_png_is_pixel_exact() {
        let mut img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        img.put_pixel(2, 1, image::Rgba([200, 100, 50, 128]));

        let buf = decode(&png_bytes(&img)).unwrap();

        assert_eq!(buf.dimensions(), (3, 2));
        assert_eq!(buf.get(0, 0).unwrap(), Rgba::opaque(10, 20, 30));
        assert_eq!(buf.get(2, 1).unwrap(), Rgba::new(200, 100, 50, 128));
    }

    #[test]
    fn test_decode_jpeg_is_opaque() {
        let buf = decode(&jpeg_bytes(8, 4)).unwrap();

        assert_eq!(buf.dimensions(), (8, 4));
        assert!(buf.as_raw().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(ProcessError::Decode(_))));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(matches!(decode(&[]), Err(ProcessError::Decode(_))));
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        let bytes = jpeg_bytes(16, 16);
        let result = decode(&bytes[..20]);
        assert!(matches!(result, Err(ProcessError::Decode(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(dir.path().join("nope.jpg"));
        assert!(matches!(result, Err(ProcessError::Io(_))));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        let img = image::RgbaImage::from_pixel(5, 7, image::Rgba([1, 2, 3, 255]));
        std::fs::write(&path, png_bytes(&img)).unwrap();

        let buf = load(&path).unwrap();
        assert_eq!(buf.dimensions(), (5, 7));
    }

    #[test]
    fn test_orientation_without_exif() {
        assert_eq!(read_orientation(&jpeg_bytes(2, 2)), Orientation::Normal);
        assert_eq!(read_orientation(&[0x00, 0x01]), Orientation::Normal);
    }

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_rotate90_swaps_dimensions() {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::new(4, 1));
        let rotated = apply_orientation(img, Orientation::Rotate90CW);
        assert_eq!((rotated.width(), rotated.height()), (1, 4));
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([0, 255, 0, 255]));

        let flipped = apply_orientation(DynamicImage::ImageRgba8(img), Orientation::FlipHorizontal)
            .into_rgba8();

        assert_eq!(flipped.get_pixel(0, 0).0, [0, 255, 0, 255]);
        assert_eq!(flipped.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }
}
