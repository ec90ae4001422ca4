use crate::types::parse_query_bool;
use crate::{
    Condition, DeviceType, EvalConfig, FeatureOp, LengthValue, MediaContext, Orientation,
    ResolutionValue,
};

/// Matches conditions against [`MediaContext`] snapshots.
///
/// Stateless apart from its [`EvalConfig`]; share one across threads freely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Evaluator {
    config: EvalConfig,
}

/// Comparison actually applied to a numeric feature, after `min-`/`max-`
/// prefixes and the `:` form have been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Gte,
    Lte,
    Gt,
    Lt,
    Eq,
}

impl Comparison {
    fn resolve(name: &str, op: FeatureOp) -> Self {
        if name.starts_with("min-") {
            return Comparison::Gte;
        }
        if name.starts_with("max-") {
            return Comparison::Lte;
        }
        match op {
            FeatureOp::Gte => Comparison::Gte,
            FeatureOp::Lte => Comparison::Lte,
            FeatureOp::Gt => Comparison::Gt,
            FeatureOp::Lt => Comparison::Lt,
            FeatureOp::Colon => Comparison::Eq,
        }
    }

    fn apply(self, actual: f64, expected: f64, tolerance: f64) -> bool {
        match self {
            Comparison::Gte => actual >= expected,
            Comparison::Lte => actual <= expected,
            Comparison::Gt => actual > expected,
            Comparison::Lt => actual < expected,
            Comparison::Eq => (actual - expected).abs() < tolerance,
        }
    }
}

impl Evaluator {
    /// Evaluator with the default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EvalConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Match `cond` against `ctx`. Unknown features and unreadable values are
    /// a non-match, never an error.
    #[must_use]
    pub fn evaluate(&self, cond: &Condition, ctx: &MediaContext) -> bool {
        match cond {
            Condition::Feature { name, op, value } => self.eval_feature(name, *op, value, ctx),
            Condition::And(a, b) => self.evaluate(a, ctx) && self.evaluate(b, ctx),
            Condition::Or(a, b) => self.evaluate(a, ctx) || self.evaluate(b, ctx),
            Condition::Not(inner) => !self.evaluate(inner, ctx),
        }
    }

    /// Parse `text` and match it against `ctx`. Unparseable text never matches.
    #[must_use]
    pub fn evaluate_media_query(&self, text: &str, ctx: &MediaContext) -> bool {
        crate::parse(text).is_some_and(|cond| self.evaluate(&cond, ctx))
    }

    fn eval_feature(&self, name: &str, op: FeatureOp, value: &str, ctx: &MediaContext) -> bool {
        let matched = match name {
            "orientation" => Orientation::from_query_value(value) == ctx.orientation(),
            "dark-mode" => parse_query_bool(value) == ctx.is_dark_mode(),
            "round-screen" => parse_query_bool(value) == ctx.is_round_screen(),
            "device-type" => DeviceType::from_query_value(value) == ctx.device_type(),
            "width" | "min-width" | "max-width" => {
                self.eval_length(name, op, value, ctx.width_dp(), ctx.density())
            }
            "height" | "min-height" | "max-height" => {
                self.eval_length(name, op, value, ctx.height_dp(), ctx.density())
            }
            "device-width" | "min-device-width" | "max-device-width" => {
                self.eval_length(name, op, value, ctx.device_width_dp(), ctx.density())
            }
            "device-height" | "min-device-height" | "max-device-height" => {
                self.eval_length(name, op, value, ctx.device_height_dp(), ctx.density())
            }
            "resolution" | "min-resolution" | "max-resolution" => {
                self.eval_resolution(name, op, value, ctx.density_dpi())
            }
            _ => {
                tracing::debug!(feature = name, "unknown media feature");
                false
            }
        };
        tracing::trace!(feature = name, %op, value, matched, "evaluated media feature");
        matched
    }

    fn eval_length(
        &self,
        name: &str,
        op: FeatureOp,
        value: &str,
        actual_dp: f64,
        density: f64,
    ) -> bool {
        let Some(length) = LengthValue::parse(value) else {
            tracing::debug!(feature = name, value, "unreadable length");
            return false;
        };
        Comparison::resolve(name, op).apply(
            actual_dp,
            length.to_dp(density),
            self.config.length_tolerance,
        )
    }

    fn eval_resolution(&self, name: &str, op: FeatureOp, value: &str, actual_dpi: f64) -> bool {
        let Some(resolution) = ResolutionValue::parse(value) else {
            tracing::debug!(feature = name, value, "unreadable resolution");
            return false;
        };
        Comparison::resolve(name, op).apply(
            actual_dpi,
            resolution.to_dpi(),
            self.config.resolution_tolerance,
        )
    }
}

/// Match `cond` against `ctx` with the default [`EvalConfig`].
#[must_use]
pub fn evaluate(cond: &Condition, ctx: &MediaContext) -> bool {
    Evaluator::default().evaluate(cond, ctx)
}

/// Parse `text` and match it against `ctx`. Returns `false` if the text does
/// not parse.
///
/// # Example
///
/// ```
/// use mediaq::{MediaContext, evaluate_media_query};
///
/// let ctx = MediaContext::new(700.0, 1000.0);
/// assert!(evaluate_media_query("(width >= 600vp)", &ctx));
/// assert!(!evaluate_media_query("(width >= ", &ctx));
/// ```
#[must_use]
pub fn evaluate_media_query(text: &str, ctx: &MediaContext) -> bool {
    Evaluator::default().evaluate_media_query(text, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature;

    fn tablet() -> MediaContext {
        MediaContext::new(700.0, 1000.0)
            .with_density_dpi(320.0)
            .with_orientation(Orientation::Portrait)
            .with_dark_mode(true)
            .with_device_type(DeviceType::Tablet)
            .with_round_screen(false)
    }

    #[test]
    fn comparison_prefix_overrides_operator() {
        assert_eq!(
            Comparison::resolve("min-width", FeatureOp::Lt),
            Comparison::Gte
        );
        assert_eq!(
            Comparison::resolve("max-width", FeatureOp::Gt),
            Comparison::Lte
        );
        assert_eq!(Comparison::resolve("width", FeatureOp::Colon), Comparison::Eq);
        assert_eq!(Comparison::resolve("width", FeatureOp::Gt), Comparison::Gt);
    }

    #[test]
    fn comparison_eq_uses_tolerance() {
        assert!(Comparison::Eq.apply(600.0, 600.005, 0.01));
        assert!(!Comparison::Eq.apply(600.0, 600.01, 0.01));
        assert!(Comparison::Eq.apply(320.0, 320.9, 1.0));
    }

    #[test]
    fn eval_width_ops() {
        let ctx = tablet();
        let cases = [
            (feature("width").gte("600vp"), true),
            (feature("width").gte("700vp"), true),
            (feature("width").gt("700vp"), false),
            (feature("width").lt("800"), true),
            (feature("width").lte("699.99"), false),
            (feature("width").is("700"), true),
            (feature("width").is("700.005dp"), true),
            (feature("width").is("701"), false),
            (feature("min-width").is("800"), false),
            (feature("max-width").is("800"), true),
        ];
        for (cond, expected) in cases {
            assert_eq!(evaluate(&cond, &ctx), expected, "failed for {cond}");
        }
    }

    #[test]
    fn eval_px_uses_density() {
        let ctx = tablet();
        // 1400px at density 2 is 700dp
        assert!(evaluate(&feature("width").is("1400px"), &ctx));
        assert!(evaluate(&feature("min-width").is("1200px"), &ctx));
        assert!(!evaluate(&feature("min-width").is("1600px"), &ctx));
    }

    #[test]
    fn eval_height_and_device_size() {
        let ctx = tablet().with_device_width_dp(1280.0);
        assert!(evaluate(&feature("min-height").is("1000vp"), &ctx));
        assert!(!evaluate(&feature("max-height").is("999vp"), &ctx));
        assert!(evaluate(&feature("min-device-width").is("1200"), &ctx));
        assert!(!evaluate(&feature("min-width").is("1200"), &ctx));
        assert!(evaluate(&feature("device-height").is("1000"), &ctx));
    }

    #[test]
    fn eval_resolution() {
        let ctx = tablet();
        assert!(evaluate(&feature("resolution").is("2dppx"), &ctx));
        assert!(evaluate(&feature("resolution").is("320dpi"), &ctx));
        assert!(evaluate(&feature("resolution").is("320.5dpi"), &ctx));
        assert!(evaluate(&feature("min-resolution").is("2"), &ctx));
        assert!(!evaluate(&feature("min-resolution").is("3dppx"), &ctx));
        assert!(evaluate(&feature("max-resolution").is("130dpcm"), &ctx));
        assert!(!evaluate(&feature("resolution").is("2vp"), &ctx));
    }

    #[test]
    fn eval_enum_and_bool_features() {
        let ctx = tablet();
        assert!(evaluate(&feature("orientation").is("portrait"), &ctx));
        assert!(!evaluate(&feature("orientation").is("landscape"), &ctx));
        // unrecognized orientation reads as portrait
        assert!(evaluate(&feature("orientation").is("upside-down"), &ctx));
        assert!(evaluate(&feature("dark-mode").is("true"), &ctx));
        assert!(!evaluate(&feature("dark-mode").is("yes"), &ctx));
        assert!(evaluate(&feature("round-screen").is("false"), &ctx));
        assert!(evaluate(&feature("device-type").is("tablet"), &ctx));
        assert!(!evaluate(&feature("device-type").is("phone"), &ctx));
    }

    #[test]
    fn eval_unknown_feature_is_false() {
        let ctx = tablet();
        assert!(!evaluate(&feature("bogus-feature").is("x"), &ctx));
        assert!(evaluate(&!feature("bogus-feature").is("x"), &ctx));
    }

    #[test]
    fn eval_unreadable_length_is_false() {
        let ctx = tablet();
        assert!(!evaluate(&feature("width").gte("wide"), &ctx));
        assert!(!evaluate(&feature("width").gte("600em"), &ctx));
    }

    #[test]
    fn eval_combinators() {
        let ctx = tablet();
        let yes = || feature("dark-mode").is("true");
        let no = || feature("dark-mode").is("false");
        assert!(evaluate(&yes().and(yes()), &ctx));
        assert!(!evaluate(&yes().and(no()), &ctx));
        assert!(evaluate(&no().or(yes()), &ctx));
        assert!(!evaluate(&no().or(no()), &ctx));
        assert!(evaluate(&!no(), &ctx));
    }

    #[test]
    fn custom_tolerance() {
        let ctx = tablet();
        let loose = Evaluator::with_config(EvalConfig::new().length_tolerance(5.0));
        let cond = feature("width").is("703");
        assert!(loose.evaluate(&cond, &ctx));
        assert!(!evaluate(&cond, &ctx));
    }

    #[test]
    fn evaluate_media_query_unparseable_is_false() {
        let ctx = tablet();
        assert!(!evaluate_media_query("", &ctx));
        assert!(!evaluate_media_query("not", &ctx));
        assert!(!evaluate_media_query("600vp <= width < 840vp", &ctx));
    }
}
