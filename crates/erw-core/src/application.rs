//! Basalt application facts
//!
//! Mass and particle size are operator-provided facts. Unlike environmental
//! readings they are never guessed: a missing or non-numeric value is rejected
//! with [`ERWError::InvalidInput`] before any estimation happens.

use crate::errors::{ERWError, ERWResult};
use crate::FloatValue;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// An application event as submitted by an operator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationInput {
    pub application_id: String,
    pub farm_id: String,
    /// ISO-8601 timestamp, optionally with a `Z` or `±HH:MM` offset.
    pub applied_at: Option<String>,
    /// unit: kg
    pub basalt_mass_kg: Option<FloatValue>,
    /// unit: mm
    pub particle_size_mm: Option<FloatValue>,
    pub lat: Option<FloatValue>,
    pub lon: Option<FloatValue>,
}

/// An application that passed validation and can enter the estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedApplication {
    pub application_id: String,
    pub farm_id: String,
    pub applied_at: Option<AppliedAt>,
    /// Always finite and strictly positive.
    pub basalt_mass_kg: FloatValue,
    /// Always finite. Non-positive sizes are clamped by the particle-size factor.
    pub particle_size_mm: FloatValue,
    pub lat: Option<FloatValue>,
    pub lon: Option<FloatValue>,
}

impl ApplicationInput {
    pub fn validate(&self) -> ERWResult<ValidatedApplication> {
        let basalt_mass_kg = require_finite("basalt_mass_kg", self.basalt_mass_kg)?;
        if basalt_mass_kg <= 0.0 {
            warn!(
                application_id = %self.application_id,
                basalt_mass_kg,
                "Rejected application with non-positive basalt mass"
            );
            return Err(ERWError::invalid_input(
                "basalt_mass_kg",
                format!("must be positive, got {}", basalt_mass_kg),
            ));
        }
        let particle_size_mm = require_finite("particle_size_mm", self.particle_size_mm)?;

        let applied_at = self
            .applied_at
            .as_deref()
            .map(AppliedAt::parse)
            .transpose()?;

        Ok(ValidatedApplication {
            application_id: self.application_id.clone(),
            farm_id: self.farm_id.clone(),
            applied_at,
            basalt_mass_kg,
            particle_size_mm,
            lat: self.lat,
            lon: self.lon,
        })
    }
}

fn require_finite(field: &str, value: Option<FloatValue>) -> ERWResult<FloatValue> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => {
            warn!(field, value = v, "Rejected non-finite application input");
            Err(ERWError::invalid_input(field, format!("must be finite, got {}", v)))
        }
        None => {
            warn!(field, "Rejected application with missing input");
            Err(ERWError::invalid_input(field, "value is required"))
        }
    }
}

/// Application timestamp, keeping whether an offset was supplied.
///
/// Timestamps without an offset stay naive rather than being silently
/// assigned a timezone, so the ISO-8601 rendering round-trips what the
/// operator entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedAt {
    Aware(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl AppliedAt {
    /// Parse an ISO-8601 date or date-time. A trailing `Z` means UTC.
    pub fn parse(value: &str) -> ERWResult<Self> {
        let trimmed = value.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(AppliedAt::Aware(dt));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(AppliedAt::Naive(dt));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return Ok(AppliedAt::Naive(dt));
            }
        }
        Err(ERWError::invalid_input(
            "applied_at",
            format!("`{}` is not an ISO-8601 timestamp", value),
        ))
    }

    /// Render as ISO-8601: `YYYY-MM-DDTHH:MM:SS[.ffffff][+HH:MM]`.
    ///
    /// Fractional seconds are written with microsecond precision and only when
    /// non-zero. This string is part of the audit payload, so its shape is fixed.
    pub fn to_iso8601(&self) -> String {
        match self {
            AppliedAt::Aware(dt) => {
                let base = format_naive(&dt.naive_local());
                format!("{}{}", base, dt.format("%:z"))
            }
            AppliedAt::Naive(dt) => format_naive(dt),
        }
    }
}

fn format_naive(dt: &NaiveDateTime) -> String {
    if dt.nanosecond() / 1_000 == 0 {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ApplicationInput {
        ApplicationInput {
            application_id: "app-1".to_string(),
            farm_id: "farm-1".to_string(),
            applied_at: Some("2024-05-01T08:30:00Z".to_string()),
            basalt_mass_kg: Some(10_000.0),
            particle_size_mm: Some(0.25),
            lat: Some(12.97),
            lon: Some(77.59),
        }
    }

    #[test]
    fn test_valid_application() {
        let app = input().validate().expect("should validate");
        assert_eq!(app.basalt_mass_kg, 10_000.0);
        assert_eq!(app.particle_size_mm, 0.25);
        assert_eq!(
            app.applied_at.map(|t| t.to_iso8601()).as_deref(),
            Some("2024-05-01T08:30:00+00:00")
        );
    }

    #[test]
    fn test_missing_mass_is_rejected() {
        let mut raw = input();
        raw.basalt_mass_kg = None;
        match raw.validate() {
            Err(ERWError::InvalidInput { field, .. }) => assert_eq!(field, "basalt_mass_kg"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_particle_size_is_rejected() {
        let mut raw = input();
        raw.particle_size_mm = None;
        match raw.validate() {
            Err(ERWError::InvalidInput { field, .. }) => assert_eq!(field, "particle_size_mm"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_and_non_positive_mass_rejected() {
        let mut raw = input();
        raw.basalt_mass_kg = Some(f64::NAN);
        assert!(raw.validate().is_err());

        raw.basalt_mass_kg = Some(0.0);
        assert!(raw.validate().is_err());

        raw.basalt_mass_kg = Some(-5.0);
        assert!(raw.validate().is_err());
    }

    #[test]
    fn test_non_positive_particle_size_is_accepted() {
        // Clamped later by the particle-size factor
        let mut raw = input();
        raw.particle_size_mm = Some(-1.0);
        assert_eq!(raw.validate().expect("should validate").particle_size_mm, -1.0);
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let mut raw = input();
        raw.applied_at = Some("yesterday".to_string());
        match raw.validate() {
            Err(ERWError::InvalidInput { field, .. }) => assert_eq!(field, "applied_at"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_timestamp_rendering() {
        let cases = [
            ("2024-05-01T08:30:00+05:30", "2024-05-01T08:30:00+05:30"),
            ("2024-05-01T08:30:00", "2024-05-01T08:30:00"),
            ("2024-05-01T08:30:00.25Z", "2024-05-01T08:30:00.250000+00:00"),
            ("2024-05-01", "2024-05-01T00:00:00"),
        ];
        for (raw, expected) in cases {
            let parsed = AppliedAt::parse(raw).expect("should parse");
            assert_eq!(parsed.to_iso8601(), expected, "input {}", raw);
        }
    }
}
