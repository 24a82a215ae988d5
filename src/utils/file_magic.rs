/// Check that a file's leading bytes match its claimed extension.
///
/// Profile pictures are the only upload surface, so only image formats are
/// recognized; anything else is rejected.
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        ".png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        ".jpg" | ".jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        ".gif" => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
        ".webp" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",
        ".bmp" => data.starts_with(b"BM"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_magic() {
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(validate_magic_bytes(&png_header, ".png"));
        assert!(validate_magic_bytes(&png_header, ".PNG"));
        assert!(!validate_magic_bytes(&png_header, ".jpg"));
    }

    #[test]
    fn test_jpeg_magic() {
        let jpeg_header = [0xFF, 0xD8, 0xFF, 0xE0];
        assert!(validate_magic_bytes(&jpeg_header, ".jpg"));
        assert!(validate_magic_bytes(&jpeg_header, ".jpeg"));
        assert!(!validate_magic_bytes(&jpeg_header, ".png"));
    }

    #[test]
    fn test_webp_magic() {
        let mut webp_header = Vec::from(*b"RIFF");
        webp_header.extend_from_slice(&[0x10, 0x00, 0x00, 0x00]);
        webp_header.extend_from_slice(b"WEBP");
        assert!(validate_magic_bytes(&webp_header, ".webp"));
        assert!(!validate_magic_bytes(b"RIFF", ".webp"));
    }

    #[test]
    fn test_empty_data() {
        assert!(!validate_magic_bytes(&[], ".png"));
    }

    #[test]
    fn test_non_image_extension() {
        let data = b"%PDF-1.4";
        assert!(!validate_magic_bytes(data, ".pdf"));
        assert!(!validate_magic_bytes(data, ".exe"));
    }
}
