/// Maximum drift of the hero backdrop, in CSS pixels, reached when the
/// pointer touches the edge of the viewport.
pub const PARALLAX_RANGE: f64 = 60.0;

/// Displacement the backdrop glides back to when the pointer leaves the
/// viewport, whatever it was displaced to before.
pub const REST_SHIFT: (f64, f64) = (0.0, 0.0);

/// Backdrop displacement for a pointer position in client coordinates.
///
/// The pointer offset from the viewport center is normalized per axis to
/// roughly [-1, 1], scaled by [`PARALLAX_RANGE`] and negated so the
/// backdrop drifts against the pointer. Half-extents are clamped to at
/// least one pixel, which keeps the result finite for zero-sized
/// viewports.
pub fn shift(pointer_x: f64, pointer_y: f64, viewport_w: f64, viewport_h: f64) -> (f64, f64) {
    let center_x = viewport_w / 2.0;
    let center_y = viewport_h / 2.0;
    let rel_x = (pointer_x - center_x) / center_x.max(1.0);
    let rel_y = (pointer_y - center_y) / center_y.max(1.0);
    (-rel_x * PARALLAX_RANGE, -rel_y * PARALLAX_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_leaves_the_backdrop_at_rest() {
        assert_eq!(shift(960.0, 540.0, 1920.0, 1080.0), (0.0, 0.0));
    }

    #[test]
    fn right_edge_pushes_the_backdrop_fully_left() {
        let (x, y) = shift(1920.0, 540.0, 1920.0, 1080.0);
        assert_eq!(x, -PARALLAX_RANGE);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn top_left_corner_pushes_down_and_right() {
        let (x, y) = shift(0.0, 0.0, 1920.0, 1080.0);
        assert_eq!((x, y), (PARALLAX_RANGE, PARALLAX_RANGE));
    }

    #[test]
    fn displacement_is_an_odd_function_of_the_center_offset() {
        let (w, h) = (1280.0, 800.0);
        let (ax, ay) = shift(w / 2.0 + 300.0, h / 2.0 + 120.0, w, h);
        let (bx, by) = shift(w / 2.0 - 300.0, h / 2.0 - 120.0, w, h);
        assert_eq!((ax, ay), (-bx, -by));
    }

    #[test]
    fn zero_sized_viewport_stays_finite() {
        let (x, y) = shift(15.0, -4.0, 0.0, 0.0);
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn pointer_outside_the_viewport_overshoots_proportionally() {
        // Client coordinates can exceed the viewport during fast exits.
        let (x, _) = shift(2880.0, 540.0, 1920.0, 1080.0);
        assert_eq!(x, -2.0 * PARALLAX_RANGE);
    }

    #[test]
    fn leaving_rests_at_the_centered_pointer_shift() {
        let (w, h) = (1920.0, 1080.0);
        assert_eq!(REST_SHIFT, shift(w / 2.0, h / 2.0, w, h));
    }

    #[test]
    fn rest_is_reached_from_any_prior_displacement() {
        use crate::motion::tween::Tween;

        for from in [(-60.0, -60.0), (37.5, -12.25), (60.0, 60.0)] {
            let glide = Tween::new(0.0, from, REST_SHIFT, 400.0);
            assert_eq!(glide.sample(400.0), (0.0, 0.0));
        }
    }
}
