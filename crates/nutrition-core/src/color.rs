/// Alpha channel applied to every nutrient colour.
pub const OPAQUE: u32 = 0xFF00_0000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0} characters")]
    Length(usize),
    #[error("invalid hex digit {0:?}")]
    Digit(char),
}

/// Parse a 6-digit `rrggbb` string into a fully opaque ARGB value.
pub fn parse_color(hex: &str) -> Result<u32, ColorError> {
    let len = hex.chars().count();
    if len != 6 {
        return Err(ColorError::Length(len));
    }
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::Digit(c));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| ColorError::Length(len))?;
    Ok(OPAQUE | rgb)
}
