use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Device class reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeviceType {
    #[default]
    Default,
    Phone,
    Tablet,
    Tv,
    Car,
    Wearable,
    TwoInOne,
}

/// Strict parse failure for [`Orientation`] and [`DeviceType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{text}'")]
pub struct UnknownVariant {
    kind: &'static str,
    text: String,
}

impl Orientation {
    /// Lenient form used by query evaluation: anything unrecognized is portrait.
    #[must_use]
    pub fn from_query_value(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl FromStr for Orientation {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            other => Err(UnknownVariant {
                kind: "orientation",
                text: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DeviceType {
    /// Lenient form used by query evaluation: anything unrecognized is
    /// [`DeviceType::Default`].
    #[must_use]
    pub fn from_query_value(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Default => "default",
            DeviceType::Phone => "phone",
            DeviceType::Tablet => "tablet",
            DeviceType::Tv => "tv",
            DeviceType::Car => "car",
            DeviceType::Wearable => "wearable",
            DeviceType::TwoInOne => "2in1",
        }
    }
}

impl FromStr for DeviceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "default" => Ok(DeviceType::Default),
            "phone" => Ok(DeviceType::Phone),
            "tablet" => Ok(DeviceType::Tablet),
            "tv" => Ok(DeviceType::Tv),
            "car" => Ok(DeviceType::Car),
            "wearable" => Ok(DeviceType::Wearable),
            "2in1" | "two_in_one" | "two-in-one" => Ok(DeviceType::TwoInOne),
            other => Err(UnknownVariant {
                kind: "device type",
                text: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict `true`/`false` used by boolean features. Anything else is `false`.
pub(crate) fn parse_query_bool(value: &str) -> bool {
    value.trim() == "true"
}
