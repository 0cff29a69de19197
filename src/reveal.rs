use std::collections::HashSet;
use std::hash::Hash;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample<K> {
    pub key: K,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl<K> IntersectionSample<K> {
    fn reveals(&self) -> bool {
        self.is_intersecting && self.ratio >= REVEAL_THRESHOLD
    }
}

pub struct RevealTracker<K> {
    observed: HashSet<K>,
    revealed: HashSet<K>,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            observed: HashSet::new(),
            revealed: HashSet::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> RevealTracker<K> {
    pub fn observe(&mut self, key: K) -> bool {
        if self.revealed.contains(&key) {
            return false;
        }
        self.observed.insert(key)
    }

    pub fn forget(&mut self, key: K) {
        self.observed.remove(&key);
        self.revealed.remove(&key);
    }

    /// Newly revealed keys, each of which stops being observed.
    pub fn handle(&mut self, samples: &[IntersectionSample<K>]) -> Vec<K> {
        let mut newly_revealed = Vec::new();

        for sample in samples {
            if !sample.reveals() || !self.observed.remove(&sample.key) {
                continue;
            }
            self.revealed.insert(sample.key);
            newly_revealed.push(sample.key);
        }

        newly_revealed
    }
}

#[cfg(test)]
impl<K: Copy + Eq + Hash> RevealTracker<K> {
    fn is_observed(&self, key: K) -> bool {
        self.observed.contains(&key)
    }

    fn is_revealed(&self, key: K) -> bool {
        self.revealed.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(key: u32, is_intersecting: bool, ratio: f64) -> IntersectionSample<u32> {
        IntersectionSample {
            key,
            is_intersecting,
            ratio,
        }
    }

    #[test]
    fn element_is_revealed_once_and_unobserved() {
        let mut tracker = RevealTracker::default();
        tracker.observe(1);

        assert_eq!(tracker.handle(&[sample(1, true, 0.25)]), vec![1]);
        assert!(tracker.is_revealed(1));
        assert!(!tracker.is_observed(1));

        assert!(tracker.handle(&[sample(1, false, 0.0)]).is_empty());
        assert!(tracker.handle(&[sample(1, true, 1.0)]).is_empty());
        assert!(tracker.is_revealed(1));
    }

    #[test]
    fn below_threshold_entries_do_not_reveal() {
        let mut tracker = RevealTracker::default();
        tracker.observe(7);

        assert!(tracker.handle(&[sample(7, true, 0.05)]).is_empty());
        assert!(tracker.handle(&[sample(7, false, 0.5)]).is_empty());
        assert!(tracker.is_observed(7));

        assert_eq!(tracker.handle(&[sample(7, true, 0.1)]), vec![7]);
    }

    #[test]
    fn unobserved_keys_are_ignored() {
        let mut tracker = RevealTracker::default();

        assert!(tracker.handle(&[sample(3, true, 1.0)]).is_empty());
        assert!(!tracker.is_revealed(3));
    }

    #[test]
    fn batch_reveals_only_matching_entries() {
        let mut tracker = RevealTracker::default();
        for key in 0..3 {
            tracker.observe(key);
        }

        let revealed = tracker.handle(&[
            sample(0, true, 0.5),
            sample(1, false, 0.0),
            sample(2, true, 0.2),
            sample(0, true, 0.9),
        ]);
        assert_eq!(revealed, vec![0, 2]);
        assert!(tracker.is_observed(1));
    }

    #[test]
    fn revealed_key_cannot_be_observed_again() {
        let mut tracker = RevealTracker::default();
        tracker.observe(5);
        tracker.handle(&[sample(5, true, 1.0)]);

        assert!(!tracker.observe(5));
        tracker.forget(5);
        assert!(tracker.observe(5));
    }
}
