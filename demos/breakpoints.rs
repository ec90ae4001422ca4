use mediaq::{DeviceType, MediaContext, Orientation, QueryRegistry, try_parse};

const BREAKPOINTS: &[(&str, &str)] = &[
    ("sm", "(width < 600vp)"),
    ("md", "(width >= 600vp) and (width < 840vp)"),
    ("lg", "(width >= 840vp)"),
];

fn main() {
    let mut registry = QueryRegistry::new();
    for (_, query) in BREAKPOINTS {
        registry.acquire(query);
    }

    let snapshots = [
        ("phone", MediaContext::new(360.0, 780.0).with_density_dpi(480.0)),
        (
            "phone rotated",
            MediaContext::new(780.0, 360.0)
                .with_density_dpi(480.0)
                .with_orientation(Orientation::Landscape),
        ),
        (
            "tablet",
            MediaContext::new(900.0, 1280.0).with_device_type(DeviceType::Tablet),
        ),
    ];

    for (label, ctx) in &snapshots {
        println!("{label}:");
        for change in registry.refresh(ctx) {
            let name = BREAKPOINTS
                .iter()
                .find(|(_, q)| *q == change.query)
                .map_or("?", |(n, _)| *n);
            println!("  {name} -> {}", change.matches);
        }
    }

    match try_parse("600vp <= width < 840vp") {
        Ok(cond) => println!("parsed: {cond}"),
        Err(err) => println!("rejected: {err}"),
    }
}
