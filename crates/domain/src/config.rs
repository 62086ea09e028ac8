// crates/domain/src/config.rs
use derive_builder::Builder;
use file_input_shared_kernel::ByteUnit;
use serde::{Deserialize, Serialize};

/// Process-wide defaults for the byte formatter.
///
/// Every field is optional; a missing field falls back to the base unit,
/// automatic unit selection, and zero decimals respectively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileInputConfig {
    /// Unit assumed for formatter inputs when a call does not name one.
    #[serde(default)]
    pub initial_value_unit: Option<ByteUnit>,
    /// Unit every formatter call converts to when a call does not name one.
    #[serde(default)]
    pub destination_value_unit: Option<ByteUnit>,
    /// Decimal digits kept when a call does not name a precision.
    #[serde(default)]
    pub default_precision: Option<u32>,
}

impl FileInputConfig {
    pub fn builder() -> FileInputConfigBuilder {
        FileInputConfigBuilder::default()
    }

    #[must_use]
    pub fn initial_unit(&self) -> ByteUnit {
        self.initial_value_unit.unwrap_or_default()
    }

    #[must_use]
    pub fn precision(&self) -> u32 {
        self.default_precision.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_base_unit_and_zero_precision() {
        let config = FileInputConfig::default();
        assert_eq!(config.initial_unit(), ByteUnit::B);
        assert_eq!(config.destination_value_unit, None);
        assert_eq!(config.precision(), 0);
    }

    #[test]
    fn builder_sets_only_named_fields() {
        let config = FileInputConfig::builder()
            .destination_value_unit(ByteUnit::GB)
            .default_precision(2u32)
            .build()
            .expect("builds");
        assert_eq!(config.initial_value_unit, None);
        assert_eq!(config.destination_value_unit, Some(ByteUnit::GB));
        assert_eq!(config.precision(), 2);
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{"initialValueUnit":"MB","destinationValueUnit":"GB","defaultPrecision":2}"#;
        let config: FileInputConfig = serde_json::from_str(json).expect("parses");
        assert_eq!(config.initial_unit(), ByteUnit::MB);
        assert_eq!(config.destination_value_unit, Some(ByteUnit::GB));
        assert_eq!(config.precision(), 2);
    }

    #[test]
    fn rejects_negative_precision() {
        let json = r#"{"defaultPrecision":-1}"#;
        assert!(serde_json::from_str::<FileInputConfig>(json).is_err());
    }
}
