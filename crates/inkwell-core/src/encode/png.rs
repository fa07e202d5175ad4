//! PNG encoding, used when an output path asks for lossless RGBA.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::buffer::PixelBuffer;
use crate::error::{ProcessError, ProcessResult};

/// Encode a buffer to PNG bytes, alpha included.
pub fn encode_png(buffer: &PixelBuffer) -> ProcessResult<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            buffer.as_raw(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| ProcessError::Io(format!("PNG encoding failed: {e}")))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgba;

    #[test]
    fn test_png_signature() {
        let buf = PixelBuffer::filled(4, 4, Rgba::WHITE).unwrap();
        let bytes = encode_png(&buf).unwrap();
        assert_eq!(&bytes[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_png_keeps_alpha() {
        let buf = PixelBuffer::filled(2, 2, Rgba::new(10, 20, 30, 40)).unwrap();
        let decoded = PixelBuffer::decode(&encode_png(&buf).unwrap()).unwrap();
        assert_eq!(decoded.get(1, 1).unwrap(), Rgba::new(10, 20, 30, 40));
    }
}
