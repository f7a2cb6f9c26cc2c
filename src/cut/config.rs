/// Immutable run configuration built once from the command line.
use super::errors::CutError;
use super::fields::{FieldSpec, parse_field_spec};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: &str = "\t";

/// What to cut and how to split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fields to extract, in output order.
    pub fields: FieldSpec,
    /// Substring used both to split input and to join output. Never empty.
    pub delimiter: String,
    /// Suppress lines that do not contain the delimiter.
    pub separated_only: bool,
}

impl Config {
    /// Build a configuration from raw flag values.
    ///
    /// # Errors
    ///
    /// - `CutError::MissingFields` — `fields` is absent or empty
    /// - `CutError::EmptyDelimiter` — `delimiter` is empty
    pub fn new(
        fields: Option<&str>,
        delimiter: &str,
        separated_only: bool,
    ) -> Result<Self, CutError> {
        let raw = fields.filter(|f| !f.is_empty()).ok_or(CutError::MissingFields)?;
        if delimiter.is_empty() {
            return Err(CutError::EmptyDelimiter);
        }
        Ok(Self {
            fields: parse_field_spec(raw),
            delimiter: delimiter.to_owned(),
            separated_only,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parses_fields() {
        let cfg = Config::new(Some("1,3"), ",", true).unwrap();
        assert_eq!(cfg.fields.indices_within(usize::MAX).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(cfg.delimiter, ",");
        assert!(cfg.separated_only);
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(
            Config::new(None, DEFAULT_DELIMITER, false),
            Err(CutError::MissingFields)
        ));
        assert!(matches!(
            Config::new(Some(""), DEFAULT_DELIMITER, false),
            Err(CutError::MissingFields)
        ));
    }

    #[test]
    fn test_empty_delimiter() {
        assert!(matches!(
            Config::new(Some("1"), "", false),
            Err(CutError::EmptyDelimiter)
        ));
    }

    #[test]
    fn test_leading_hyphen_token_dropped() {
        let cfg = Config::new(Some("-2,3"), DEFAULT_DELIMITER, false).unwrap();
        assert_eq!(cfg.fields.indices_within(usize::MAX).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_unparseable_fields_still_configures() {
        let cfg = Config::new(Some("abc"), DEFAULT_DELIMITER, false).unwrap();
        assert!(cfg.fields.is_empty());
    }
}
