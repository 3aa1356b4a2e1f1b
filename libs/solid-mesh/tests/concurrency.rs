use std::thread;

use solid_mesh::{generate_stl, ShapeParams, SolidKind};

#[test]
fn builders_run_in_parallel_without_interference() {
    let expected: Vec<String> = SolidKind::ALL
        .into_iter()
        .map(|kind| generate_stl(&ShapeParams::defaults(kind)).unwrap())
        .collect();

    let handles: Vec<_> = (0..12)
        .map(|i| {
            let kind = SolidKind::ALL[i % 3];
            thread::spawn(move || generate_stl(&ShapeParams::defaults(kind)).unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), expected[i % 3]);
    }
}
