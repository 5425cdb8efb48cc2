use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use qrstore_error::error::QrError;
use std::io::Cursor;

/// Pixels per QR module
pub const MODULE_SIZE: u32 = 10;

/// Modules of light border around the symbol
pub const QUIET_ZONE: u32 = 4;

pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Render `data` as a QR code and return the PNG bytes.
///
/// Uses error-correction level M with a 4-module quiet zone, black on white.
pub fn render_png(data: &str) -> Result<Vec<u8>, QrError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
        .map_err(|e| QrError::EncodeError(e.to_string()))?;

    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .dark_color(Luma([0u8]))
        .light_color(Luma([255u8]))
        .build();

    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(image)
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| QrError::PngError(e.to_string()))?;

    Ok(buffer.into_inner())
}
