//! Run every planar routine on a few small shapes and log the results.
//!
//! Usage: `cargo run -p planar --example square_report`

use planar::prelude::*;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let square = vec![
        Point::new(0, 0),
        Point::new(4, 0),
        Point::new(4, 4),
        Point::new(0, 4),
    ];
    tracing::info!(
        area = polygon_area(&square),
        diameter = polygon_diameter(&square),
        center_inside = is_inside(&square, Point::new(2, 2)),
        far_inside = is_inside(&square, Point::new(5, 5)),
        "square"
    );

    let triangle = vec![Point::new(0, 0), Point::new(3, 0), Point::new(0, 4)];
    if let Some((a, b, d)) = closest_pair_points(&triangle) {
        tracing::info!(%a, %b, distance = d, "closest_pair");
    }

    let line = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
        Point::new(3.0, 3.0),
    ];
    let hull: Vec<String> = convex_hull(&line).iter().map(|p| p.to_string()).collect();
    tracing::info!(hull = ?hull, diameter = polygon_diameter(&line), "collinear");

    let cloud = draw_point_cloud(1_000, Bounds2::default(), ReplayToken { seed: 1, index: 0 });
    if let Some((a, b, d)) = diameter_pair(&cloud) {
        tracing::info!(
            hull = convex_hull(&cloud).len(),
            closest = closest_pair(&cloud),
            %a,
            %b,
            diameter = d,
            "random cloud"
        );
    }
}
