use std::{fmt, str::FromStr};

use crate::foundation::error::{StackError, StackResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// A length that is either absolute pixels or a percentage of a container dimension.
///
/// Deserializes from a JSON number (pixels) or a string such as `"20%"`, `"120"` or `"120px"`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "DistanceRepr", into = "String")]
pub enum Distance {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the container (`20.0` means 20%).
    Percent(f64),
}

impl Distance {
    /// Parse a percentage or absolute pixel quantity.
    pub fn parse(value: &str) -> StackResult<Self> {
        let s = value.trim();
        if let Some(num) = s.strip_suffix('%') {
            return parse_finite(num, value).map(Self::Percent);
        }
        let num = s.strip_suffix("px").unwrap_or(s);
        parse_finite(num, value).map(Self::Px)
    }

    /// Resolve into pixels against `container` (only percentages depend on it).
    pub fn resolve(self, container: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => (p / 100.0) * container,
        }
    }

    pub(crate) fn is_finite(self) -> bool {
        match self {
            Self::Px(v) | Self::Percent(v) => v.is_finite(),
        }
    }
}

fn parse_finite(num: &str, original: &str) -> StackResult<f64> {
    let v = num.trim().parse::<f64>().map_err(|_| {
        StackError::invalid_configuration(format!(
            "'{original}' is neither a percentage nor a pixel value"
        ))
    })?;
    if !v.is_finite() {
        return Err(StackError::invalid_configuration(format!(
            "'{original}' must be finite"
        )));
    }
    Ok(v)
}

impl FromStr for Distance {
    type Err = StackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

impl From<Distance> for String {
    fn from(value: Distance) -> Self {
        value.to_string()
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum DistanceRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<DistanceRepr> for Distance {
    type Error = String;

    fn try_from(value: DistanceRepr) -> Result<Self, Self::Error> {
        let parsed = match value {
            DistanceRepr::Number(v) if v.is_finite() => Ok(Self::Px(v)),
            DistanceRepr::Number(v) => Err(StackError::invalid_configuration(format!(
                "distance {v} must be finite"
            ))),
            DistanceRepr::Text(s) => Self::parse(&s),
        };
        parsed.map_err(|e| match e {
            StackError::InvalidConfiguration(msg) => msg,
            other => other.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
