mod condition;
mod config;
mod context;
mod device;
mod error;
mod query;
mod registry;
mod units;

pub use condition::{Condition, FeatureBuilder, FeatureOp, feature};
pub use config::EvalConfig;
pub use context::MediaContext;
pub use device::{DeviceType, Orientation, UnknownVariant};
pub(crate) use device::parse_query_bool;
pub use error::UnitError;
pub use query::MediaQuery;
pub use registry::{MatchChange, QueryRegistry};
pub use units::{BASELINE_DPI, LengthUnit, LengthValue, ResolutionUnit, ResolutionValue};
