//! Text rendering of generated numbers.

use std::fmt;
use std::str::FromStr;

use crate::error::{QrngError, Result};

/// Display base selected in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberFormat {
    #[default]
    Decimal,
    Binary,
    Hex,
}

impl NumberFormat {
    pub fn label(self) -> &'static str {
        match self {
            NumberFormat::Decimal => "decimal",
            NumberFormat::Binary => "binary",
            NumberFormat::Hex => "hex",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            NumberFormat::Decimal => "Decimal",
            NumberFormat::Binary => "Binary",
            NumberFormat::Hex => "Hexadecimal",
        }
    }

    pub fn all() -> &'static [NumberFormat] {
        &[NumberFormat::Decimal, NumberFormat::Binary, NumberFormat::Hex]
    }

    /// Lenient lookup used for the `<select>` value: anything unrecognised
    /// renders as decimal, same as the selector's default option.
    pub fn from_selector(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    fn radix(self) -> u32 {
        match self {
            NumberFormat::Decimal => 10,
            NumberFormat::Binary => 2,
            NumberFormat::Hex => 16,
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NumberFormat {
    type Err = QrngError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" | "dec" | "10" => Ok(NumberFormat::Decimal),
            "binary" | "bin" | "2" => Ok(NumberFormat::Binary),
            "hex" | "hexadecimal" | "16" => Ok(NumberFormat::Hex),
            _ => Err(QrngError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render `value` in `format`.
///
/// Binary output is left-padded with zeros to `bit_width` characters; a value
/// wider than `bit_width` keeps all of its digits. At width 0 the only
/// representable value is 0, which renders as the empty string.
pub fn format_value(value: u32, format: NumberFormat, bit_width: u8) -> String {
    match format {
        NumberFormat::Decimal => value.to_string(),
        NumberFormat::Hex => format!("0x{value:X}"),
        NumberFormat::Binary => {
            if bit_width == 0 && value == 0 {
                return String::new();
            }
            format!("{:0width$b}", value, width = bit_width as usize)
        }
    }
}

/// Inverse of [`format_value`]. Hex accepts an optional `0x`/`0X` prefix and
/// either case; binary accepts the empty string as zero.
pub fn parse_value(text: &str, format: NumberFormat) -> Result<u32> {
    let trimmed = text.trim();
    let digits = match format {
        NumberFormat::Hex => trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed),
        _ => trimmed,
    };

    if digits.is_empty() && format == NumberFormat::Binary {
        return Ok(0);
    }

    u32::from_str_radix(digits, format.radix()).map_err(|_| QrngError::UnparsableValue {
        text: text.to_string(),
        format: format.label(),
    })
}
