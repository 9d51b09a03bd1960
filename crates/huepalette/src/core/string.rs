use crate::error::ColorFormatError;

/// Parse a 24-bit color in hexadecimal format. The string must have exactly
/// six hexadecimal digits, optionally preceded by a `#`. Letters may be upper
/// or lower case.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 {
        return Err(ColorFormatError::WrongLength);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::MalformedHex)?;
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Format the 24-bit color as six lowercase hexadecimal digits without `#`.
pub(crate) fn format_hex(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    format!("{:02x}{:02x}{:02x}", r, g, b)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format_hex, parse_hex};
    use crate::error::ColorFormatError;

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("FfA0c9")?, [0xff_u8, 0xa0, 0xc9]);
        assert_eq!(parse_hex("fff"), Err(ColorFormatError::WrongLength));
        assert_eq!(parse_hex("#1122334"), Err(ColorFormatError::WrongLength));
        assert_eq!(parse_hex(""), Err(ColorFormatError::WrongLength));
        assert_eq!(parse_hex("zzzzzz"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("+1ff00"), Err(ColorFormatError::MalformedHex));

        // Six bytes, but not six digits.
        assert_eq!(parse_hex("💩00"), Err(ColorFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex([0, 0x7f, 0xff]), "007fff");
        assert_eq!(format_hex([0xab, 0xcd, 0xef]), "abcdef");
    }
}
