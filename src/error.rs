use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scenario config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Invalid value {value} for reading field '{field}': {reason}")]
    InvalidReading {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl PatternError {
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    pub fn invalid_reading(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidReading {
            field,
            value,
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
