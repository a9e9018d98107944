//! PNG export.

use tiny_skia::Pixmap;

use crate::renderer::RenderResult;

/// Encode a rendered pixmap as a PNG file in memory.
///
/// The pixmap stores premultiplied alpha; PNG wants straight alpha, so
/// every pixel is demultiplied on the way out.
pub fn encode_png(pixmap: &Pixmap) -> RenderResult<Vec<u8>> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let p = pixel.demultiply();
        rgba.extend_from_slice(&[p.red(), p.green(), p.blue(), p.alpha()]);
    }

    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&rgba)?;
    }

    log::info!(
        "encoded {}x{} render into {} PNG bytes",
        pixmap.width(),
        pixmap.height(),
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_bytes_start_with_png_signature() {
        let pixmap = Pixmap::new(8, 8).unwrap();
        let bytes = encode_png(&pixmap).unwrap();
        assert_eq!(&bytes[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_ihdr_carries_the_pixmap_size() {
        let pixmap = Pixmap::new(320, 200).unwrap();
        let bytes = encode_png(&pixmap).unwrap();
        // IHDR is the first chunk: width and height are the first two
        // big-endian u32 fields of its payload.
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        assert_eq!(width, 320);
        assert_eq!(height, 200);
    }
}
