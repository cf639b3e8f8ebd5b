/// A fixed-duration linear interpolation between two 2D points.
///
/// Starting a new tween from the sampled position of the previous one is
/// how the backdrop retargets: the fresh tween departs from wherever the
/// old one currently is, so pointer samples replace each other instead of
/// queuing. Timestamps are milliseconds on whatever monotonic clock the
/// caller uses, as long as it is the same one for `new` and `sample`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: (f64, f64),
    to: (f64, f64),
    started_at: f64,
    duration_ms: f64,
}

impl Tween {
    pub fn new(started_at: f64, from: (f64, f64), to: (f64, f64), duration_ms: f64) -> Self {
        Self {
            from,
            to,
            started_at,
            duration_ms,
        }
    }

    /// Position at `now_ms`, clamped to the endpoints outside the
    /// tween's time window.
    pub fn sample(&self, now_ms: f64) -> (f64, f64) {
        let t = self.progress(now_ms);
        (
            self.from.0 + (self.to.0 - self.from.0) * t,
            self.from.1 + (self.to.1 - self.from.1) * t,
        )
    }

    pub fn finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween() -> Tween {
        Tween::new(1_000.0, (0.0, 0.0), (40.0, -20.0), 400.0)
    }

    #[test]
    fn starts_at_the_origin_point() {
        assert_eq!(tween().sample(1_000.0), (0.0, 0.0));
    }

    #[test]
    fn interpolates_linearly() {
        assert_eq!(tween().sample(1_100.0), (10.0, -5.0));
        assert_eq!(tween().sample(1_200.0), (20.0, -10.0));
        assert_eq!(tween().sample(1_300.0), (30.0, -15.0));
    }

    #[test]
    fn clamps_at_both_ends() {
        let t = tween();
        assert_eq!(t.sample(900.0), (0.0, 0.0));
        assert_eq!(t.sample(5_000.0), (40.0, -20.0));
    }

    #[test]
    fn finishes_exactly_at_the_duration() {
        let t = tween();
        assert!(!t.finished(1_399.0));
        assert!(t.finished(1_400.0));
    }

    #[test]
    fn zero_duration_jumps_to_the_target() {
        let t = Tween::new(50.0, (3.0, 3.0), (9.0, 9.0), 0.0);
        assert_eq!(t.sample(50.0), (9.0, 9.0));
        assert!(t.finished(50.0));
    }

    #[test]
    fn retargeting_departs_from_the_sampled_position() {
        let first = tween();
        let mid = first.sample(1_200.0);
        let second = Tween::new(1_200.0, mid, (0.0, 0.0), 400.0);
        assert_eq!(second.sample(1_200.0), mid);
        assert_eq!(second.sample(1_400.0), (10.0, -5.0));
        assert_eq!(second.sample(1_600.0), (0.0, 0.0));
    }
}
