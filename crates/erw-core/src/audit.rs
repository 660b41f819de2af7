//! Audit fingerprint
//!
//! Binds an estimate's key inputs and outputs to a SHA-256 digest. The payload
//! is serialised as canonical JSON (keys sorted, compact `,`/`:` separators)
//! and hashed over its UTF-8 bytes, so identical inputs always give the same
//! hex digest and changing any field changes it.
//!
//! Floats use the shortest round-trip digits, written in exponent form
//! (`8.25e-05`, `1e+16`) when the decimal exponent is below -4 or at least 16.
//! Strings are escaped to ASCII. Both match the form long-lived consumers of
//! the digest already hash.
//!
//! The fingerprint is for tamper evidence only. It is not a signature.

use crate::application::ValidatedApplication;
use crate::errors::{ERWError, ERWResult};
use crate::FloatValue;
use serde::Serialize;
use serde_json::ser::Formatter;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::io;

/// Fields covered by the audit fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditPayload {
    pub application_id: String,
    pub farm_id: String,
    /// ISO-8601 rendering, `null` when unknown.
    pub applied_at: Option<String>,
    pub basalt_mass_kg: FloatValue,
    pub particle_size_mm: FloatValue,
    pub wf: FloatValue,
    pub central_co2_t: FloatValue,
}

impl AuditPayload {
    pub fn new(
        application: &ValidatedApplication,
        wf: FloatValue,
        central_co2_t: FloatValue,
    ) -> Self {
        Self {
            application_id: application.application_id.clone(),
            farm_id: application.farm_id.clone(),
            applied_at: application.applied_at.map(|t| t.to_iso8601()),
            basalt_mass_kg: application.basalt_mass_kg,
            particle_size_mm: application.particle_size_mm,
            wf,
            central_co2_t,
        }
    }

    /// Canonical JSON rendering: keys sorted, no whitespace.
    pub fn canonical_json(&self) -> ERWResult<String> {
        let value =
            serde_json::to_value(self).map_err(|e| ERWError::Serialization(e.to_string()))?;
        // Sort explicitly so the order does not depend on serde_json's map features
        let sorted: BTreeMap<String, serde_json::Value> = serde_json::from_value(value)
            .map_err(|e| ERWError::Serialization(e.to_string()))?;

        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, CanonicalFormatter);
        sorted
            .serialize(&mut serializer)
            .map_err(|e| ERWError::Serialization(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| ERWError::Serialization(e.to_string()))
    }

    /// Lower-case hex SHA-256 of the canonical JSON.
    pub fn fingerprint(&self) -> ERWResult<String> {
        let canonical = self.canonical_json()?;
        Ok(sha256_hex(canonical.as_bytes()))
    }
}

/// Compact JSON with exponent-form floats and ASCII-only strings.
///
/// serde_json writes non-finite floats as `null` before reaching the formatter.
struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_float(value).as_bytes())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() && c != '\x7f' {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Shortest round-trip rendering of a finite float.
///
/// Positional between `1e-4` and `1e16` (always with a fractional part),
/// otherwise `d.ddde±XX`.
pub fn format_float(value: f64) -> String {
    // `{:e}` gives the shortest round-trip digits, e.g. `-8.25e-5`
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let integer_len = exponent + 1;

    let body = if integer_len <= 0 {
        format!("0.{}{}", "0".repeat((-integer_len) as usize), digits)
    } else if digits.len() <= integer_len as usize {
        format!("{}{}.0", digits, "0".repeat(integer_len as usize - digits.len()))
    } else {
        let (int_part, frac_part) = digits.split_at(integer_len as usize);
        format!("{}.{}", int_part, frac_part)
    };
    format!("{}{}", sign, body)
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
