// crates/domain/src/bytes.rs
//! Human readable byte quantities.
//!
//! Malformed input is never an error here: [`FormatOutcome::Passthrough`]
//! hands the caller's original value back so it can be displayed as-is.

use std::{borrow::Cow, fmt};

use file_input_shared_kernel::{ByteUnit, FileSize, value_objects::byte_unit::KILOBYTE};
use log::trace;

use crate::config::FileInputConfig;

/// A number, or text that should parse as one.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericArg<'a> {
    Number(f64),
    Text(Cow<'a, str>),
}

impl NumericArg<'_> {
    /// Finite numeric value, if any.
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }

    #[must_use]
    pub fn into_owned(self) -> NumericArg<'static> {
        match self {
            Self::Number(value) => NumericArg::Number(value),
            Self::Text(text) => NumericArg::Text(Cow::Owned(text.into_owned())),
        }
    }
}

impl fmt::Display for NumericArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&render_number(*value)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

macro_rules! numeric_arg_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for NumericArg<'_> {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

numeric_arg_from!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl From<FileSize> for NumericArg<'_> {
    fn from(size: FileSize) -> Self {
        size.bytes().into()
    }
}

impl<'a> From<&'a str> for NumericArg<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for NumericArg<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for NumericArg<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

/// A unit, or a label that should name one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitArg<'a> {
    Unit(ByteUnit),
    Label(&'a str),
}

impl UnitArg<'_> {
    #[must_use]
    pub fn resolve(self) -> Option<ByteUnit> {
        match self {
            Self::Unit(unit) => Some(unit),
            Self::Label(label) => label.parse().ok(),
        }
    }
}

impl From<ByteUnit> for UnitArg<'_> {
    fn from(unit: ByteUnit) -> Self {
        Self::Unit(unit)
    }
}

impl<'a> From<&'a str> for UnitArg<'a> {
    fn from(label: &'a str) -> Self {
        Self::Label(label)
    }
}

/// Result of a formatting call.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatOutcome<'a> {
    /// `"<number> <unit>"`.
    Formatted(String),
    /// The input was not formattable and is returned untouched.
    Passthrough(NumericArg<'a>),
}

impl FormatOutcome<'_> {
    #[must_use]
    pub fn is_formatted(&self) -> bool {
        matches!(self, Self::Formatted(_))
    }

    #[must_use]
    pub fn as_formatted(&self) -> Option<&str> {
        match self {
            Self::Formatted(text) => Some(text),
            Self::Passthrough(_) => None,
        }
    }

    /// Display text: the formatted quantity, or the original input verbatim.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Formatted(text) => text,
            Self::Passthrough(original) => original.to_string(),
        }
    }
}

impl fmt::Display for FormatOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formatted(text) => f.write_str(text),
            Self::Passthrough(original) => fmt::Display::fmt(original, f),
        }
    }
}

/// Converts byte quantities between units and renders them for display.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesFormatter {
    config: FileInputConfig,
}

impl BytesFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: FileInputConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &FileInputConfig {
        &self.config
    }

    /// Format with every option taken from the configuration.
    pub fn format<'a>(&self, value: impl Into<NumericArg<'a>>) -> FormatOutcome<'a> {
        self.request(value).format()
    }

    /// Start a call that overrides precision or units.
    pub fn request<'a>(&self, value: impl Into<NumericArg<'a>>) -> FormatRequest<'_, 'a> {
        FormatRequest {
            formatter: self,
            value: value.into(),
            precision: None,
            from: None,
            to: None,
        }
    }

    /// Format a file size; sizes are always valid input.
    #[must_use]
    pub fn format_size(&self, size: FileSize) -> String {
        self.format(size).into_string()
    }

    fn transform<'a>(
        &self,
        value: NumericArg<'a>,
        precision: Option<NumericArg<'_>>,
        from: Option<UnitArg<'_>>,
        to: Option<UnitArg<'_>>,
    ) -> FormatOutcome<'a> {
        let number = match &value {
            NumericArg::Text(text) if text.trim().is_empty() => Some(0.0),
            _ => value.to_number(),
        };
        let Some(number) = number else {
            trace!("bytes: '{value}' is not numeric; passing through");
            return FormatOutcome::Passthrough(value);
        };

        let precision = match precision {
            Some(arg) => parse_precision(&arg),
            None => Some(self.config.precision()),
        };
        let Some(precision) = precision else {
            trace!("bytes: invalid precision; passing '{value}' through");
            return FormatOutcome::Passthrough(value);
        };

        let from = match from.map(UnitArg::resolve) {
            Some(Some(unit)) => unit,
            Some(None) => return FormatOutcome::Passthrough(value),
            None => self.config.initial_unit(),
        };
        let to = match to.map(UnitArg::resolve) {
            Some(Some(unit)) => Some(unit),
            Some(None) => return FormatOutcome::Passthrough(value),
            None => self.config.destination_value_unit,
        };

        let bytes = to_bytes(number, from);
        if !bytes.is_finite() {
            trace!("bytes: '{value}' {from} overflows; passing through");
            return FormatOutcome::Passthrough(value);
        }
        let unit = to.unwrap_or_else(|| select_unit(bytes));
        FormatOutcome::Formatted(render(bytes / scale_of(unit), precision, unit))
    }
}

/// Builder for a single formatting call.
#[must_use]
pub struct FormatRequest<'f, 'a> {
    formatter: &'f BytesFormatter,
    value: NumericArg<'a>,
    precision: Option<NumericArg<'a>>,
    from: Option<UnitArg<'a>>,
    to: Option<UnitArg<'a>>,
}

impl<'a> FormatRequest<'_, 'a> {
    pub fn precision(mut self, precision: impl Into<NumericArg<'a>>) -> Self {
        self.precision = Some(precision.into());
        self
    }

    pub fn from_unit(mut self, unit: impl Into<UnitArg<'a>>) -> Self {
        self.from = Some(unit.into());
        self
    }

    pub fn to_unit(mut self, unit: impl Into<UnitArg<'a>>) -> Self {
        self.to = Some(unit.into());
        self
    }

    pub fn format(self) -> FormatOutcome<'a> {
        self.formatter.transform(self.value, self.precision, self.from, self.to)
    }
}

/// Normalizes `value` expressed in `from` to bytes, one factor of 1024 per step.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_bytes(value: f64, from: ByteUnit) -> f64 {
    let mut bytes = value;
    let mut unit = from;
    while let Some(previous) = unit.previous() {
        bytes *= KILOBYTE as f64;
        unit = previous;
    }
    bytes
}

/// Smallest unit whose band contains `bytes`; the top unit takes everything above.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn select_unit(bytes: f64) -> ByteUnit {
    ByteUnit::ALL
        .into_iter()
        .find(|unit| unit.threshold().is_none_or(|max| bytes < max as f64))
        .unwrap_or(ByteUnit::TB)
}

#[allow(clippy::cast_precision_loss)]
fn scale_of(unit: ByteUnit) -> f64 {
    unit.scale() as f64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_precision(arg: &NumericArg<'_>) -> Option<u32> {
    let value = arg.to_number()?;
    if value < 0.0 || value.fract() != 0.0 {
        return None;
    }
    Some(value.min(f64::from(u32::MAX)) as u32)
}

fn render(quotient: f64, precision: u32, unit: ByteUnit) -> String {
    format!("{} {}", render_number(round_half_away(quotient, precision)), unit.label())
}

fn round_half_away(value: f64, precision: u32) -> f64 {
    let Ok(exponent) = i32::try_from(precision) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn render_number(value: f64) -> String {
    // -0 renders as 0
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human(value: impl Into<NumericArg<'static>>) -> String {
        BytesFormatter::new().format(value).into_string()
    }

    #[test]
    fn auto_selects_unit_with_default_precision() {
        for (value, expected) in [
            (0_u64, "0 B"),
            (1, "1 B"),
            (1024, "1 kB"),
            (1048, "1 kB"),
            (1_048_576, "1 MB"),
        ] {
            assert_eq!(human(value), expected);
        }
    }

    #[test]
    fn converts_higher_unit_down_to_bytes() {
        let formatter = BytesFormatter::new();
        for (value, expected) in [(0.0, "0 B"), (1.0, "1073741824 B"), (0.5, "536870912 B")] {
            let out = formatter.request(value).from_unit(ByteUnit::GB).to_unit(ByteUnit::B).format();
            assert_eq!(out.into_string(), expected);
        }
    }

    #[test]
    fn rounds_to_nearest_at_precision() {
        let formatter = BytesFormatter::new();
        let three = formatter.request(861).precision(3).from_unit(ByteUnit::B).to_unit(ByteUnit::KB);
        assert_eq!(three.format().into_string(), "0.841 kB");
        let four = formatter.request(861).precision(4).from_unit(ByteUnit::B).to_unit(ByteUnit::KB);
        assert_eq!(four.format().into_string(), "0.8408 kB");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_half_away(2.5, 0), 3.0);
        assert_eq!(round_half_away(-2.5, 0), -3.0);
        assert_eq!(render_number(round_half_away(-0.2, 0)), "0");
    }

    #[test]
    fn rounding_happens_after_unit_selection() {
        assert_eq!(human(1023.9), "1024 B");
    }

    #[test]
    fn zero_keeps_target_unit() {
        let out = BytesFormatter::new().request(0).to_unit(ByteUnit::GB).format();
        assert_eq!(out.into_string(), "0 GB");
    }

    #[test]
    fn top_unit_has_no_upper_bound() {
        let huge = 5000.0 * scale_of(ByteUnit::TB);
        assert_eq!(select_unit(huge), ByteUnit::TB);
        assert_eq!(human(huge), "5000 TB");
    }

    #[test]
    fn invalid_values_pass_through() {
        let formatter = BytesFormatter::new();
        for text in ["test", "NaN", "inf", "12abc"] {
            let out = formatter.format(text);
            assert_eq!(out, FormatOutcome::Passthrough(NumericArg::from(text)));
            assert_eq!(out.into_string(), text);
        }
        assert!(!formatter.format(f64::NAN).is_formatted());
        assert!(!formatter.format(f64::INFINITY).is_formatted());
    }

    #[test]
    fn blank_strings_read_as_zero() {
        assert_eq!(human(""), "0 B");
        assert_eq!(human("   "), "0 B");
    }

    #[test]
    fn overflowing_normalization_passes_through() {
        let out = BytesFormatter::new().request(1e308).from_unit(ByteUnit::TB).format();
        assert_eq!(out, FormatOutcome::Passthrough(NumericArg::Number(1e308)));
    }

    #[test]
    fn numeric_strings_are_parsed() {
        assert_eq!(human(String::from(" 2048 ")), "2 kB");
        assert_eq!(human("1e3"), "1000 B");
    }

    #[test]
    fn invalid_precision_passes_value_through() {
        let formatter = BytesFormatter::new();
        let precisions: [NumericArg<'static>; 5] =
            ["test".into(), (-1).into(), 1.5.into(), f64::NAN.into(), "".into()];
        for precision in precisions {
            let out = formatter.request(100).precision(precision).format();
            assert_eq!(out, FormatOutcome::Passthrough(NumericArg::Number(100.0)));
            assert_eq!(out.into_string(), "100");
        }
    }

    #[test]
    fn unknown_units_pass_through() {
        let formatter = BytesFormatter::new();
        assert!(!formatter.request(1).from_unit("PB").format().is_formatted());
        assert!(!formatter.request(1).to_unit("kb").format().is_formatted());
        assert_eq!(
            formatter.request(1).from_unit("kB").to_unit("B").format().into_string(),
            "1024 B"
        );
    }

    #[test]
    fn configuration_supplies_defaults() {
        let config = FileInputConfig {
            initial_value_unit: Some(ByteUnit::MB),
            destination_value_unit: Some(ByteUnit::GB),
            default_precision: Some(2),
        };
        let formatter = BytesFormatter::with_config(config);
        assert_eq!(formatter.format(659).into_string(), "0.64 GB");
        // per-call options still win
        let out = formatter.request(1).precision(0).from_unit(ByteUnit::B).to_unit(ByteUnit::B).format();
        assert_eq!(out.into_string(), "1 B");
    }

    #[test]
    fn huge_precision_renders_unrounded() {
        let out = BytesFormatter::new().request(3).precision(400).format();
        assert_eq!(out.into_string(), "3 B");
    }

    #[test]
    fn negative_quantities_stay_in_base_band() {
        assert_eq!(human(-5), "-5 B");
    }

    #[test]
    fn file_size_formats_directly() {
        assert_eq!(BytesFormatter::new().format_size(FileSize::new(3 * 1024 * 1024)), "3 MB");
    }
}
