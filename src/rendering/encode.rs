use std::io::Cursor;

use super::raster::Raster;
use crate::error::RenderError;

/// Encode a raster as an 8-bit RGBA PNG.
///
/// Encoder settings are fixed, so the same raster always produces the same
/// bytes.
pub fn encode_png(raster: Raster) -> Result<Vec<u8>, RenderError> {
    let (width, height) = (raster.width(), raster.height());
    let data = raster.into_rgba();

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::compose;
    use chroma_core::PackedColor;

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_png_signature_and_header() {
        let raster = compose(PackedColor::from_rgb(255, 0, 0), &[]).unwrap();
        let bytes = encode_png(raster).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let (info, _) = decode(&bytes);
        assert_eq!((info.width, info.height), (170, 170));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
    }

    #[test]
    fn test_png_round_trips_pixels() {
        let mut raster = Raster::new(3, 2).unwrap();
        raster.fill_rect(0, 0, 1, 2, PackedColor::from_rgb(9, 8, 7));
        let expected = {
            let mut copy = Raster::new(3, 2).unwrap();
            copy.fill_rect(0, 0, 1, 2, PackedColor::from_rgb(9, 8, 7));
            copy.into_rgba()
        };

        let (_, pixels) = decode(&encode_png(raster).unwrap());
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_png_is_byte_identical_for_identical_rasters() {
        let main = PackedColor::from_rgb(64, 224, 208);
        let a = encode_png(compose(main, &[]).unwrap()).unwrap();
        let b = encode_png(compose(main, &[]).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
