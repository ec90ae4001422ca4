use std::sync::Arc;
use std::thread;

use mediaq::{DeviceType, MediaContext, MediaQuery, Orientation};

#[test]
fn evaluate_across_threads() {
    let query = Arc::new(MediaQuery::new(
        "(min-width: 600vp) and (dark-mode: true), (device-type: tv)",
    ));

    let mut handles = vec![];

    // Thread 1: wide, dark tablet -> match
    let q = Arc::clone(&query);
    handles.push(thread::spawn(move || {
        let ctx = MediaContext::new(800.0, 1280.0)
            .with_dark_mode(true)
            .with_device_type(DeviceType::Tablet);
        q.matches(&ctx)
    }));

    // Thread 2: wide but light -> no match
    let q = Arc::clone(&query);
    handles.push(thread::spawn(move || {
        let ctx = MediaContext::new(800.0, 1280.0).with_device_type(DeviceType::Tablet);
        q.matches(&ctx)
    }));

    // Thread 3: narrow light tv -> match through the comma branch
    let q = Arc::clone(&query);
    handles.push(thread::spawn(move || {
        let ctx = MediaContext::new(400.0, 300.0)
            .with_orientation(Orientation::Landscape)
            .with_device_type(DeviceType::Tv);
        q.matches(&ctx)
    }));

    // Thread 4: narrow dark phone -> no match
    let q = Arc::clone(&query);
    handles.push(thread::spawn(move || {
        let ctx = MediaContext::new(360.0, 780.0)
            .with_dark_mode(true)
            .with_device_type(DeviceType::Phone);
        q.matches(&ctx)
    }));

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false, true, false]);
}

#[test]
fn parse_concurrently_yields_identical_trees() {
    let text = "(width >= 600vp) and (orientation: landscape), not (round-screen: true)";
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(move || mediaq::parse(text)))
        .collect();
    let trees: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(trees[0].is_some());
    assert!(trees.iter().all(|t| t == &trees[0]));
}
