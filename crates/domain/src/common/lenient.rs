//! Lenient numeric deserializers for character records.
//!
//! Saved records come from hand-edited JSON backups and older format revisions,
//! so numeric fields may arrive as strings ("12"), booleans, null, or garbage.
//! These helpers coerce anything non-numeric to the field's documented default
//! instead of failing the whole document. NaN and infinite floats also collapse
//! to the default so they never propagate through the calculators.
//!
//! Use together with `#[serde(default)]`: `deserialize_with` only runs when the
//! field is present.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// A value that might be a number in some other clothing.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Int(i64),
    Float(f64),
    Text(String),
    Flag(bool),
    Other(IgnoredAny),
}

impl Lenient {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Lenient::Int(v) => Some(*v as f64),
            Lenient::Float(v) if v.is_finite() => Some(*v),
            Lenient::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            Lenient::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            Lenient::Int(v) => Some(*v),
            _ => self.as_f64().map(|v| v.trunc() as i64),
        }
    }
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Lenient::deserialize(deserializer)?.as_f64().unwrap_or(0.0))
}

pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Lenient::deserialize(deserializer)?.as_i64().unwrap_or(0))
}

pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Lenient::deserialize(deserializer)?
        .as_i64()
        .map(|v| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
        .unwrap_or(0))
}

pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Lenient::deserialize(deserializer)?
        .as_i64()
        .map(|v| v.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0))
}

/// Attribute base scores default to 10, not 0, when malformed.
pub fn lenient_score<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Lenient::deserialize(deserializer)?
        .as_i64()
        .map(|v| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
        .unwrap_or(10))
}

/// Optional floats: null/absent/garbage mean "not set", not zero.
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Lenient>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

/// Optional ints: null/absent/garbage mean "not set", not zero.
pub fn lenient_opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Lenient>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_i64().map(|v| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)))
}
