use std::fmt;
use std::str::FromStr;

use super::error::UnitError;

/// Baseline density: 160 dpi is 1 dp per physical pixel.
pub const BASELINE_DPI: f64 = 160.0;

const CM_PER_INCH: f64 = 2.54;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    Vp,
    #[default]
    Dp,
    Px,
    Pt,
}

impl LengthUnit {
    /// Case-insensitive unit suffix lookup. An empty suffix is the default unit.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "" => Some(LengthUnit::default()),
            "vp" => Some(LengthUnit::Vp),
            "dp" => Some(LengthUnit::Dp),
            "px" => Some(LengthUnit::Px),
            "pt" => Some(LengthUnit::Pt),
            _ => None,
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Vp => "vp",
            LengthUnit::Dp => "dp",
            LengthUnit::Px => "px",
            LengthUnit::Pt => "pt",
        }
    }
}

/// A length with its unit, as written in a query.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LengthValue {
    pub value: f64,
    pub unit: LengthUnit,
}

impl LengthValue {
    #[must_use]
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Parse a literal such as `600vp`, `1080PX` or `320`. Returns `None` on
    /// anything else.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    /// Convert to dp. `vp`, `dp` and `pt` are all device-independent here;
    /// `px` is divided by `density` (physical pixels per dp).
    #[must_use]
    pub fn to_dp(self, density: f64) -> f64 {
        match self.unit {
            LengthUnit::Vp | LengthUnit::Dp | LengthUnit::Pt => self.value,
            LengthUnit::Px => self.value / density,
        }
    }
}

impl FromStr for LengthValue {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, suffix) = crate::parse::grammar::split_unit_literal(s)?;
        let unit = LengthUnit::from_suffix(suffix).ok_or_else(|| UnitError::UnknownUnit {
            unit: suffix.to_owned(),
        })?;
        Ok(Self { value, unit })
    }
}

impl fmt::Display for LengthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResolutionUnit {
    Dpi,
    Dpcm,
    #[default]
    Dppx,
}

impl ResolutionUnit {
    /// Case-insensitive unit suffix lookup. An empty suffix is the default unit.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "" => Some(ResolutionUnit::default()),
            "dpi" => Some(ResolutionUnit::Dpi),
            "dpcm" => Some(ResolutionUnit::Dpcm),
            "dppx" => Some(ResolutionUnit::Dppx),
            _ => None,
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            ResolutionUnit::Dpi => "dpi",
            ResolutionUnit::Dpcm => "dpcm",
            ResolutionUnit::Dppx => "dppx",
        }
    }
}

/// A screen resolution with its unit, as written in a query.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolutionValue {
    pub value: f64,
    pub unit: ResolutionUnit,
}

impl ResolutionValue {
    #[must_use]
    pub fn new(value: f64, unit: ResolutionUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    #[must_use]
    pub fn to_dpi(self) -> f64 {
        match self.unit {
            ResolutionUnit::Dpi => self.value,
            ResolutionUnit::Dpcm => self.value * CM_PER_INCH,
            ResolutionUnit::Dppx => self.value * BASELINE_DPI,
        }
    }
}

impl FromStr for ResolutionValue {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, suffix) = crate::parse::grammar::split_unit_literal(s)?;
        let unit = ResolutionUnit::from_suffix(suffix).ok_or_else(|| UnitError::UnknownUnit {
            unit: suffix.to_owned(),
        })?;
        Ok(Self { value, unit })
    }
}

impl fmt::Display for ResolutionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}
