//! Parser for compact item references.
//!
//! A reference is `namespace:name` or `namespace:name:variant`. Only a
//! reference with exactly two separators carries a variant; anything else
//! is passed to the catalog whole and left for it to reject.

const SEPARATOR: char = ':';

/// A parsed item reference, borrowing from the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedItemRef<'a> {
    /// The identifier to resolve against the catalog.
    pub base: &'a str,
    /// The explicit variant, if the reference carried one.
    pub variant: Option<u32>,
}

impl ParsedItemRef<'_> {
    pub fn variant_or_default(&self) -> u32 {
        self.variant.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemRefError {
    #[error("empty item reference")]
    Empty,
    #[error("{reference} does not contain valid metadata")]
    InvalidVariant { reference: String },
}

/// Parse a `namespace:name[:variant]` reference.
pub fn parse_item_ref(reference: &str) -> Result<ParsedItemRef<'_>, ItemRefError> {
    if reference.is_empty() {
        return Err(ItemRefError::Empty);
    }

    let split = reference
        .rsplit_once(SEPARATOR)
        .filter(|_| reference.matches(SEPARATOR).count() == 2);
    let Some((base, token)) = split else {
        return Ok(ParsedItemRef {
            base: reference,
            variant: None,
        });
    };
    let variant = parse_variant(token).ok_or_else(|| ItemRefError::InvalidVariant {
        reference: reference.to_string(),
    })?;

    Ok(ParsedItemRef {
        base,
        variant: Some(variant),
    })
}

/// Parse a non-negative integer literal: decimal, hex with a `0x` prefix,
/// or octal with a leading `0`.
pub fn parse_variant(token: &str) -> Option<u32> {
    let (digits, radix) = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None if token.len() > 1 && token.starts_with('0') => (&token[1..], 8),
        None => (token, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}
