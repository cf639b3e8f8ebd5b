/// Fraction of the viewport height the top of an element must cross
/// before its fade-in plays. 0.85 means "85% of the way down the screen".
pub const REVEAL_POINT: f64 = 0.85;

/// Whether an element top, in client coordinates, has crossed the reveal
/// line for the given viewport height.
pub fn crossed(top: f64, viewport_h: f64) -> bool {
    top <= viewport_h * REVEAL_POINT
}

/// One-shot bookkeeping for a batch of fade-in targets.
///
/// Every slot is armed at construction and fires at most once; an element
/// that scrolls back out and crosses the reveal line again stays played.
pub struct RevealSet {
    armed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            armed: vec![true; len],
        }
    }

    pub fn is_armed(&self, index: usize) -> bool {
        self.armed.get(index).copied().unwrap_or(false)
    }

    /// Consumes the slot. Returns `true` only on the first call for an
    /// in-range index.
    pub fn fire(&mut self, index: usize) -> bool {
        match self.armed.get_mut(index) {
            Some(armed) if *armed => {
                *armed = false;
                true
            }
            _ => false,
        }
    }

    /// `false` once every slot has fired, letting callers skip scans.
    pub fn any_armed(&self) -> bool {
        self.armed.iter().any(|armed| *armed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_is_inclusive_at_the_reveal_line() {
        assert!(crossed(850.0, 1000.0));
        assert!(!crossed(850.1, 1000.0));
        assert!(crossed(0.0, 1000.0));
        assert!(crossed(-400.0, 1000.0));
    }

    #[test]
    fn slots_fire_exactly_once() {
        let mut set = RevealSet::new(3);
        assert!(set.fire(1));
        assert!(!set.fire(1));
        assert!(set.is_armed(0));
        assert!(!set.is_armed(1));
    }

    #[test]
    fn out_of_range_slots_never_fire() {
        let mut set = RevealSet::new(2);
        assert!(!set.fire(2));
        assert!(!set.is_armed(7));
    }

    #[test]
    fn any_armed_clears_after_the_last_shot() {
        let mut set = RevealSet::new(2);
        assert!(set.any_armed());
        set.fire(0);
        assert!(set.any_armed());
        set.fire(1);
        assert!(!set.any_armed());
    }

    #[test]
    fn empty_sets_start_exhausted() {
        assert!(!RevealSet::new(0).any_armed());
    }
}
