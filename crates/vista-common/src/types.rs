use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A display dimension: either an absolute length in logical pixels or a
/// percentage of the space available to the widget.
///
/// Accepts a bare number (`480`), a pixel length (`"480px"`) or a
/// percentage (`"100%"`) when deserialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Pixels(f64),
    Percent(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid dimension '{0}': expected a number, '<n>px' or '<n>%'")]
pub struct DimensionParseError(pub String);

impl Dimension {
    /// Resolve to logical pixels against the available extent.
    pub fn resolve(&self, available: f64) -> f64 {
        match *self {
            Self::Pixels(px) => px,
            Self::Percent(pct) => available * pct / 100.0,
        }
    }

    /// CSS length for the chrome panel.
    pub fn to_css(&self) -> String {
        match *self {
            Self::Pixels(px) => format!("{px}px"),
            Self::Percent(pct) => format!("{pct}%"),
        }
    }

    /// The numeric magnitude, regardless of unit.
    pub fn value(&self) -> f64 {
        match *self {
            Self::Pixels(v) | Self::Percent(v) => v,
        }
    }
}

impl FromStr for Dimension {
    type Err = DimensionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || DimensionParseError(s.to_string());

        let (number, percent) = if let Some(n) = trimmed.strip_suffix('%') {
            (n, true)
        } else if let Some(n) = trimmed.strip_suffix("px") {
            (n, false)
        } else {
            (trimmed, false)
        };

        let value: f64 = number.trim().parse().map_err(|_| err())?;
        if !value.is_finite() {
            return Err(err());
        }

        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Pixels(value)
        })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Pixels(px) => serializer.serialize_f64(px),
            Self::Percent(_) => serializer.serialize_str(&self.to_css()),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Ok(Self::Pixels(n as f64)),
            Raw::Float(n) => Ok(Self::Pixels(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
