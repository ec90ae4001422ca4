//! A media-query condition engine.
//!
//! Conditions such as `"(width >= 600vp) and (orientation: landscape)"` are
//! parsed into a [`Condition`] tree and matched against a [`MediaContext`]
//! snapshot of the device. Malformed input never fails loudly: it parses to
//! `None` and never matches.
//!
//! ```
//! use mediaq::{DeviceType, MediaContext, evaluate_media_query};
//!
//! let ctx = MediaContext::new(700.0, 1000.0)
//!     .with_density_dpi(320.0)
//!     .with_device_type(DeviceType::Tablet);
//!
//! assert!(evaluate_media_query("(device-type: phone), (device-type: tablet)", &ctx));
//! assert!(!evaluate_media_query("(min-width: 800)", &ctx));
//! ```

mod evaluate;
mod parse;
mod types;

pub use evaluate::{Evaluator, evaluate, evaluate_media_query};
pub use parse::{ParseError, has_matching_outer_parens, is_range_query, parse, try_parse};
pub use types::{
    BASELINE_DPI, Condition, DeviceType, EvalConfig, FeatureBuilder, FeatureOp, LengthUnit,
    LengthValue, MatchChange, MediaContext, MediaQuery, Orientation, QueryRegistry,
    ResolutionUnit, ResolutionValue, UnitError, UnknownVariant, feature,
};
