/*!
 * Group normalization.
 *
 * Each group is translated and uniformly scaled on its own so that its
 * circle edges fit a `scale` x `scale` square centered on the origin.
 * The longer side of the bounding box spans the whole square and the
 * shorter side is centered within it.
 */

mod proc_errors;

use crate::geo_2d::{Circle, CircleGroup, Point};

pub use proc_errors::{
    NormalizeError,
    ProcResult,
    err_str,
};

/// Side length of the target square when none is configured.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Normalize every group into the `scale` square, preserving order.
pub fn normalize_groups(groups: &[CircleGroup], scale: f64) -> ProcResult<Vec<CircleGroup>> {
    if !(scale.is_finite() && scale > 0.0) {
        return err_str(&format!("Scale must be a positive number, got {}", scale));
    }
    groups
        .iter()
        .enumerate()
        .map(|(group_idx, group)| normalize_group(group, group_idx, scale))
        .collect()
}

/// Normalize a single group. `group_idx` is only used for diagnostics.
pub fn normalize_group(group: &CircleGroup, group_idx: usize, scale: f64) -> ProcResult<CircleGroup> {
    if let Some((circle_idx, circle)) = group.iter().enumerate().find(|(_, c)| c.radius < 0.0) {
        return Err(NormalizeError::NegativeRadius{group: group_idx, circle: circle_idx, radius: circle.radius});
    }

    let bounds = match group.bounds() {
        Some(bounds) if bounds.size() > 0.0 => bounds,
        _ => return Err(NormalizeError::DegenerateGroup{group: group_idx}),
    };
    let box_size = bounds.size();

    // Offset that centers the shorter axis inside the unit square
    let centering = Point::new(
        (1.0 - bounds.width() / box_size) / 2.0,
        (1.0 - bounds.height() / box_size) / 2.0,
    );
    let half = Point::new(0.5, 0.5);

    let circles = group
        .iter()
        .map(|circle| {
            let offset = circle.origin - bounds.min;
            debug_assert!(offset.x >= 0.0 && offset.y >= 0.0);
            let origin = (offset * (1.0 / box_size) + centering - half) * scale;
            Circle{origin, radius: circle.radius * scale / box_size}
        })
        .collect();

    tracing::trace!(group = group_idx, box_size, "normalized group");
    Ok(CircleGroup::new(circles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-12;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPS, "{} != {}", a, b);
    }

    fn assert_groups_close(a: &CircleGroup, b: &CircleGroup) {
        assert_eq!(a.len(), b.len());
        for (ca, cb) in a.iter().zip(b.iter()) {
            assert_close(ca.origin.x, cb.origin.x);
            assert_close(ca.origin.y, cb.origin.y);
            assert_close(ca.radius, cb.radius);
        }
    }

    #[test]
    fn square_group_fills_the_frame() {
        let group = CircleGroup::new(vec![
            Circle::new(0.0, 0.0, 1.0),
            Circle::new(2.0, 2.0, 1.0),
        ]);
        let normalized = normalize_group(&group, 0, 10.0).unwrap();
        // Box is [-1, 3] on both axes, size 4
        assert_close(normalized[0].origin.x, -2.5);
        assert_close(normalized[0].origin.y, -2.5);
        assert_close(normalized[1].origin.x, 2.5);
        assert_close(normalized[1].origin.y, 2.5);
        assert_close(normalized[0].radius, 2.5);

        let bounds = normalized.bounds().unwrap();
        assert_close(bounds.min.x, -5.0);
        assert_close(bounds.max.y, 5.0);
    }

    #[test]
    fn shorter_axis_is_centered_not_stretched() {
        let group = CircleGroup::new(vec![
            Circle::new(10.0, 7.0, 1.0),
            Circle::new(16.0, 7.0, 1.0),
        ]);
        let normalized = normalize_group(&group, 0, 1.0).unwrap();
        // Width 8, height 2
        assert_close(normalized[0].origin.x, -0.375);
        assert_close(normalized[1].origin.x, 0.375);
        assert_close(normalized[0].origin.y, 0.0);
        assert_close(normalized[0].radius, 0.125);

        let bounds = normalized.bounds().unwrap();
        assert_close(bounds.width(), 1.0);
        assert_close(bounds.height(), 0.25);
        assert_close(bounds.min.y + bounds.max.y, 0.0);
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let groups = vec![
            CircleGroup::new(vec![
                Circle::new(3.0, -1.0, 0.5),
                Circle::new(-2.0, 4.0, 2.0),
                Circle::new(0.0, 0.0, 0.0),
            ]),
        ];
        let once = normalize_groups(&groups, 10.0).unwrap();
        let twice = normalize_groups(&once, 10.0).unwrap();
        assert_groups_close(&once[0], &twice[0]);
    }

    #[test]
    fn circle_touching_box_minimum_is_fine() {
        // Zero radius circle sits exactly on the box edge
        let group = CircleGroup::new(vec![
            Circle::new(0.0, 0.0, 0.0),
            Circle::new(1.0, 1.0, 0.0),
        ]);
        let normalized = normalize_group(&group, 0, 2.0).unwrap();
        assert_close(normalized[0].origin.x, -1.0);
        assert_close(normalized[1].origin.y, 1.0);
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let groups = vec![
            CircleGroup::new(vec![Circle::new(0.0, 0.0, 1.0)]),
            CircleGroup::new(vec![Circle::new(1.0, 1.0, 0.0), Circle::new(1.0, 1.0, 0.0)]),
        ];
        assert!(matches!(normalize_groups(&groups, 1.0), Err(NormalizeError::DegenerateGroup{group: 1})));
        assert!(matches!(normalize_group(&CircleGroup::default(), 4, 1.0), Err(NormalizeError::DegenerateGroup{group: 4})));
    }

    #[test]
    fn negative_radius_is_rejected() {
        let group = CircleGroup::new(vec![Circle::new(0.0, 0.0, 1.0), Circle::new(2.0, 0.0, -0.5)]);
        assert!(matches!(
            normalize_group(&group, 3, 1.0),
            Err(NormalizeError::NegativeRadius{group: 3, circle: 1, ..})
        ));
    }

    #[test]
    fn bad_scale_is_rejected() {
        let groups = vec![CircleGroup::new(vec![Circle::new(0.0, 0.0, 1.0)])];
        assert!(normalize_groups(&groups, 0.0).is_err());
        assert!(normalize_groups(&groups, f64::NAN).is_err());
        assert!(normalize_groups(&groups, DEFAULT_SCALE).is_ok());
    }

    fn arb_group() -> impl Strategy<Value = CircleGroup> {
        prop::collection::vec((-50.0..50.0f64, -50.0..50.0f64, 0.0..10.0f64), 1..6)
            .prop_map(|circles| circles.into_iter().map(|(x, y, r)| Circle::new(x, y, r)).collect::<Vec<_>>())
            .prop_map(CircleGroup::new)
            .prop_filter("non-degenerate", |group| group.bounds().is_some_and(|b| b.size() > 1e-3))
    }

    proptest! {
        #[test]
        fn normalized_groups_fill_a_centered_frame(group in arb_group(), scale in 0.5..20.0f64) {
            let tol = 1e-9 * scale.max(1.0);
            let once = normalize_group(&group, 0, scale).unwrap();
            let bounds = once.bounds().unwrap();
            prop_assert!((bounds.size() - scale).abs() < tol);
            prop_assert!((bounds.min.x + bounds.max.x).abs() < tol);
            prop_assert!((bounds.min.y + bounds.max.y).abs() < tol);

            let twice = normalize_group(&once, 0, scale).unwrap();
            for (a, b) in once.iter().zip(twice.iter()) {
                prop_assert!((a.origin.x - b.origin.x).abs() < tol);
                prop_assert!((a.origin.y - b.origin.y).abs() < tol);
                prop_assert!((a.radius - b.radius).abs() < tol);
            }
        }
    }
}
