use mediaq::{Condition, DeviceType, MediaContext, Orientation, feature};
use proptest::prelude::*;

const DENSITIES: &[f64] = &[120.0, 160.0, 240.0, 320.0, 480.0, 640.0];
const DEVICE_TYPES: &[DeviceType] = &[
    DeviceType::Default,
    DeviceType::Phone,
    DeviceType::Tablet,
    DeviceType::Tv,
    DeviceType::Car,
    DeviceType::Wearable,
    DeviceType::TwoInOne,
];
const LENGTH_FEATURES: &[&str] = &[
    "width",
    "min-width",
    "max-width",
    "height",
    "min-height",
    "max-height",
    "device-width",
    "device-height",
];
const LENGTH_UNITS: &[&str] = &["", "vp", "dp", "px", "pt"];
const RESOLUTION_UNITS: &[&str] = &["", "dpi", "dpcm", "dppx"];
const DEVICE_NAMES: &[&str] = &["default", "phone", "tablet", "tv", "car", "wearable", "2in1"];

/// Generate a device snapshot with realistic sizes and densities.
pub fn arb_context() -> impl Strategy<Value = MediaContext> {
    (
        0_u32..2000,
        0_u32..2000,
        prop::sample::select(DENSITIES),
        any::<bool>(),
        any::<bool>(),
        prop::sample::select(DEVICE_TYPES),
        any::<bool>(),
    )
        .prop_map(|(w, h, dpi, landscape, dark, device_type, round)| {
            let orientation = if landscape {
                Orientation::Landscape
            } else {
                Orientation::Portrait
            };
            MediaContext::new(f64::from(w), f64::from(h))
                .with_density_dpi(dpi)
                .with_orientation(orientation)
                .with_dark_mode(dark)
                .with_device_type(device_type)
                .with_round_screen(round)
        })
}

fn arb_op_applied(name: &'static str, value: String) -> impl Strategy<Value = Condition> {
    (0_u8..5).prop_map(move |op| {
        let f = feature(name);
        let value = value.clone();
        match op {
            0 => f.gte(value),
            1 => f.lte(value),
            2 => f.gt(value),
            3 => f.lt(value),
            _ => f.is(value),
        }
    })
}

/// Generate a single feature leaf. Mostly known features, plus one named
/// like the `not` keyword.
pub fn arb_leaf() -> impl Strategy<Value = Condition> {
    prop_oneof![
        (
            prop::sample::select(LENGTH_FEATURES),
            0_u32..2000,
            prop::sample::select(LENGTH_UNITS),
        )
            .prop_flat_map(|(name, v, unit)| arb_op_applied(name, format!("{v}{unit}"))),
        (0_u32..700, prop::sample::select(RESOLUTION_UNITS))
            .prop_flat_map(|(v, unit)| arb_op_applied("resolution", format!("{v}{unit}"))),
        prop::sample::select(&["portrait", "landscape"][..])
            .prop_map(|v| feature("orientation").is(v)),
        any::<bool>().prop_map(|v| feature("dark-mode").is(v.to_string())),
        any::<bool>().prop_map(|v| feature("round-screen").is(v.to_string())),
        prop::sample::select(DEVICE_NAMES).prop_map(|v| feature("device-type").is(v)),
        (0_u32..10).prop_flat_map(|v| arb_op_applied("not", v.to_string())),
    ]
}

/// Generate a condition tree (AND, OR, NOT over leaves) of bounded depth.
pub fn arb_condition(max_depth: u32) -> impl Strategy<Value = Condition> {
    arb_leaf().prop_recursive(max_depth, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.and(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.or(b)),
            inner.prop_map(|c| !c),
        ]
    })
}
