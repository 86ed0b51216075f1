// core/src/error.rs
use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkoutError>;

/// Hva som er galt med en rå økt (sample) før eller etter beregning.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleDefect {
    /// Feil antall posisjonelle verdier for valgt type-kode.
    WrongArity { expected: usize, got: usize },
    /// Varighet må være > 0 (vi deler på den).
    NonPositiveDuration(f64),
    /// Høyde (cm) må være > 0 for gange.
    NonPositiveHeight(f64),
    /// Tellere (skritt/tak, antall bassenglengder) må være hele, ikke-negative tall.
    NotACount { field: &'static str, value: f64 },
    /// NaN/inf i input eller i beregnet verdi.
    NonFinite { field: &'static str },
    /// Vekt og bassenglengde kan ikke være negative.
    Negative { field: &'static str, value: f64 },
}

impl fmt::Display for SampleDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleDefect::WrongArity { expected, got } => {
                write!(f, "expected {expected} values, got {got}")
            }
            SampleDefect::NonPositiveDuration(d) => {
                write!(f, "duration_hours must be > 0 (got {d})")
            }
            SampleDefect::NonPositiveHeight(h) => write!(f, "height_cm must be > 0 (got {h})"),
            SampleDefect::NotACount { field, value } => {
                write!(f, "{field} must be a non-negative whole number (got {value})")
            }
            SampleDefect::NonFinite { field } => write!(f, "{field} is not a finite number"),
            SampleDefect::Negative { field, value } => {
                write!(f, "{field} must be >= 0 (got {value})")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("unknown activity type code: {code:?}")]
    UnknownActivityType { code: String },

    #[error("invalid {code} sample: {defect}")]
    InvalidSample { code: &'static str, defect: SampleDefect },

    #[error("malformed packages at {path}: {message}")]
    MalformedPackages { path: String, message: String },
}

impl WorkoutError {
    pub(crate) fn invalid(code: &'static str, defect: SampleDefect) -> Self {
        WorkoutError::InvalidSample { code, defect }
    }

    /// Kort stabil etikett, brukt i logg og JSON-utdata.
    pub fn reason(&self) -> &'static str {
        match self {
            WorkoutError::UnknownActivityType { .. } => "unknown_activity_type",
            WorkoutError::InvalidSample { .. } => "invalid_sample",
            WorkoutError::MalformedPackages { .. } => "malformed_packages",
        }
    }
}
