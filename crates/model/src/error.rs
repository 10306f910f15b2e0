use thiserror::Error;

/// Result type for record-level operations
pub type Result<T> = std::result::Result<T, RecordError>;

/// Errors attributable to a single lesson record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required field is absent or blank
    #[error("record '{title}': missing required field '{field}'")]
    MissingField { title: String, field: &'static str },

    /// The date field does not parse as a calendar date
    #[error("record '{title}': invalid date '{raw}'")]
    InvalidDate { title: String, raw: String },
}

impl RecordError {
    /// Create a missing field error
    pub fn missing_field(title: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            title: title.into(),
            field,
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(title: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::InvalidDate {
            title: title.into(),
            raw: raw.into(),
        }
    }

    /// Title of the record the error belongs to
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::MissingField { title, .. } | Self::InvalidDate { title, .. } => title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_identify_the_record() {
        let missing = RecordError::missing_field("Квадратные уравнения", "date");
        assert_eq!(
            missing.to_string(),
            "record 'Квадратные уравнения': missing required field 'date'"
        );

        let invalid = RecordError::invalid_date("Крепостное право", "15.01.2024");
        assert_eq!(
            invalid.to_string(),
            "record 'Крепостное право': invalid date '15.01.2024'"
        );
    }

    #[test]
    fn title_accessor_covers_both_variants() {
        assert_eq!(RecordError::missing_field("А", "date").title(), "А");
        assert_eq!(RecordError::invalid_date("Б", "?").title(), "Б");
    }
}
