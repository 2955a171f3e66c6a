//! One-shot scroll reveal.
//!
//! Each key starts hidden and is revealed the first time it intersects the
//! viewport. Revealed keys are never hidden again. With reduced motion
//! everything is revealed up front and no observer is needed.

use std::collections::BTreeSet;

use crate::observe::{visible_subset, Intersection};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealTracker {
    pending: BTreeSet<String>,
    revealed: BTreeSet<String>,
}

impl RevealTracker {
    pub fn new<I, K>(keys: I, reduced_motion: bool) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: BTreeSet<String> = keys.into_iter().map(Into::into).collect();
        if reduced_motion {
            Self {
                pending: BTreeSet::new(),
                revealed: keys,
            }
        } else {
            Self {
                pending: keys,
                revealed: BTreeSet::new(),
            }
        }
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    /// Keys still waiting for their first intersection.
    #[cfg(test)]
    fn pending(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(String::as_str)
    }

    pub fn needs_observer(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Apply a batch. Returns the keys revealed by it, nearest the viewport
    /// top first; the caller should stop observing them.
    pub fn on_intersect(&mut self, batch: &[Intersection]) -> Vec<String> {
        let mut newly = Vec::new();
        for entry in visible_subset(batch) {
            if self.pending.remove(&entry.key) {
                self.revealed.insert(entry.key.clone());
                newly.push(entry.key.clone());
            }
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_reveals_everything() {
        let tracker = RevealTracker::new(["hero", "experience", "contact"], true);
        assert!(tracker.is_revealed("hero"));
        assert!(tracker.is_revealed("experience"));
        assert!(tracker.is_revealed("contact"));
        assert!(!tracker.needs_observer());
        assert_eq!(tracker.pending().count(), 0);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker = RevealTracker::new(["hero", "contact"], false);
        assert!(tracker.needs_observer());
        assert!(!tracker.is_revealed("hero"));

        let newly = tracker.on_intersect(&[
            Intersection::new("hero", true, 0.0),
            Intersection::new("contact", false, 900.0),
        ]);
        assert_eq!(newly, vec!["hero".to_string()]);
        assert!(tracker.is_revealed("hero"));
        assert!(!tracker.is_revealed("contact"));

        // Leaving the viewport does not hide it; re-entering reports nothing new.
        assert!(tracker.on_intersect(&[Intersection::new("hero", false, -500.0)]).is_empty());
        assert!(tracker.is_revealed("hero"));
        assert!(tracker.on_intersect(&[Intersection::new("hero", true, 0.0)]).is_empty());

        tracker.on_intersect(&[Intersection::new("contact", true, 100.0)]);
        assert!(!tracker.needs_observer());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut tracker = RevealTracker::new(["hero"], false);
        assert!(tracker.on_intersect(&[Intersection::new("footer", true, 0.0)]).is_empty());
        assert!(!tracker.is_revealed("footer"));
    }
}
