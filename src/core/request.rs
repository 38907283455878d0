//! Validated generation parameters.
//!
//! Out-of-range input is rejected rather than clamped: a silently adjusted
//! bit width would render numbers the user did not ask for.

use crate::error::{QrngError, Result};
use crate::format::NumberFormat;

pub const MAX_BIT_WIDTH: u8 = 32;
pub const MAX_COUNT: usize = 10_000;

/// Raw text exactly as read from the form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub bits: String,
    pub count: String,
    pub format: String,
}

impl FormInput {
    pub fn new(bits: impl Into<String>, count: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            bits: bits.into(),
            count: count.into(),
            format: format.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GenerationRequest {
    bit_width: u8,
    count: usize,
    format: NumberFormat,
}

impl GenerationRequest {
    pub fn new(bit_width: i64, count: i64, format: NumberFormat) -> Result<Self> {
        if !(0..=MAX_BIT_WIDTH as i64).contains(&bit_width) {
            return Err(QrngError::BitWidthOutOfRange(bit_width));
        }
        if !(0..=MAX_COUNT as i64).contains(&count) {
            return Err(QrngError::CountOutOfRange(count));
        }
        Ok(Self {
            bit_width: bit_width as u8,
            count: count as usize,
            format,
        })
    }

    /// Parse the form. Numbers must be plain integers (surrounding whitespace
    /// is ignored); the format selector falls back to decimal.
    pub fn from_form(input: &FormInput) -> Result<Self> {
        let bits = input
            .bits
            .trim()
            .parse::<i64>()
            .map_err(|_| QrngError::BitWidthNotNumeric(input.bits.clone()))?;
        let count = input
            .count
            .trim()
            .parse::<i64>()
            .map_err(|_| QrngError::CountNotNumeric(input.count.clone()))?;
        Self::new(bits, count, NumberFormat::from_selector(&input.format))
    }

    pub fn bit_width(&self) -> u8 {
        self.bit_width
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn format(&self) -> NumberFormat {
        self.format
    }

    /// Largest value a number of this width can take.
    pub fn max_value(&self) -> u32 {
        max_value_for(self.bit_width)
    }
}

pub fn max_value_for(bit_width: u8) -> u32 {
    match bit_width {
        0 => 0,
        w if w >= 32 => u32::MAX,
        w => (1u32 << w) - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundaries() {
        let r = GenerationRequest::new(0, 0, NumberFormat::Hex).unwrap();
        assert_eq!((r.bit_width(), r.count(), r.format()), (0, 0, NumberFormat::Hex));
        let r = GenerationRequest::new(32, MAX_COUNT as i64, NumberFormat::Binary).unwrap();
        assert_eq!(r.max_value(), u32::MAX);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            GenerationRequest::new(-1, 5, NumberFormat::Decimal),
            Err(QrngError::BitWidthOutOfRange(-1))
        );
        assert_eq!(
            GenerationRequest::new(33, 5, NumberFormat::Decimal),
            Err(QrngError::BitWidthOutOfRange(33))
        );
        assert_eq!(
            GenerationRequest::new(8, -3, NumberFormat::Decimal),
            Err(QrngError::CountOutOfRange(-3))
        );
        assert_eq!(
            GenerationRequest::new(8, MAX_COUNT as i64 + 1, NumberFormat::Decimal),
            Err(QrngError::CountOutOfRange(10_001))
        );
    }

    #[test]
    fn form_parsing() {
        let r = GenerationRequest::from_form(&FormInput::new(" 8 ", "10", "hex")).unwrap();
        assert_eq!(r.bit_width(), 8);
        assert_eq!(r.count(), 10);
        assert_eq!(r.format(), NumberFormat::Hex);

        let r = GenerationRequest::from_form(&FormInput::new("4", "1", "nonsense")).unwrap();
        assert_eq!(r.format(), NumberFormat::Decimal);
    }

    #[test]
    fn form_rejects_non_numeric() {
        assert_eq!(
            GenerationRequest::from_form(&FormInput::new("eight", "10", "decimal")),
            Err(QrngError::BitWidthNotNumeric("eight".to_string()))
        );
        assert_eq!(
            GenerationRequest::from_form(&FormInput::new("8", "", "decimal")),
            Err(QrngError::CountNotNumeric(String::new()))
        );
        assert!(GenerationRequest::from_form(&FormInput::new("8.5", "1", "decimal")).is_err());
    }

    #[test]
    fn max_values() {
        assert_eq!(max_value_for(0), 0);
        assert_eq!(max_value_for(1), 1);
        assert_eq!(max_value_for(8), 255);
        assert_eq!(max_value_for(31), i32::MAX as u32);
        assert_eq!(max_value_for(32), u32::MAX);
    }
}
