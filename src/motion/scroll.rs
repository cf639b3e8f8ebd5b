/// Scroll-direction rule for the fixed site header.
///
/// The header is shown only while the page is scrolling back toward the
/// top, and never while the page sits at the very top. Each sample is
/// judged on its own against the previous one; there is no hysteresis or
/// debounce, so rapid up/down flicks toggle the result sample by sample.
pub struct HeaderVisibility {
    last_y: f64,
}

impl HeaderVisibility {
    pub fn new() -> Self {
        Self { last_y: 0.0 }
    }

    /// Feeds one vertical scroll offset and returns whether the header
    /// should be visible after that sample.
    pub fn observe(&mut self, y: f64) -> bool {
        let show = if y == 0.0 { false } else { y < self.last_y };
        self.last_y = y;
        show
    }
}

impl Default for HeaderVisibility {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_only_while_scrolling_up() {
        let mut vis = HeaderVisibility::new();
        let shown: Vec<bool> = [0.0, 50.0, 30.0, 30.0, 40.0]
            .into_iter()
            .map(|y| vis.observe(y))
            .collect();
        assert_eq!(shown, vec![false, false, true, false, false]);
    }

    #[test]
    fn hidden_at_the_top_even_when_arriving_from_below() {
        let mut vis = HeaderVisibility::new();
        vis.observe(120.0);
        assert!(vis.observe(40.0));
        assert!(!vis.observe(0.0));
    }

    #[test]
    fn equal_offsets_count_as_not_scrolling_up() {
        let mut vis = HeaderVisibility::new();
        vis.observe(80.0);
        assert!(!vis.observe(80.0));
    }

    #[test]
    fn previous_offset_is_recorded_even_while_hidden() {
        let mut vis = HeaderVisibility::new();
        assert!(!vis.observe(200.0));
        assert!(!vis.observe(200.0));
        // The 200 above is the reference point, not the initial 0.
        assert!(vis.observe(199.0));
    }

    #[test]
    fn fresh_tracker_treats_any_downward_start_as_hidden() {
        let mut vis = HeaderVisibility::new();
        assert!(!vis.observe(1.0));
    }
}
