//! Active-section tracking for the navigation bar.
//!
//! An observer batch only carries the sections whose intersection changed,
//! so the tracker keeps every known section that is still in the band along
//! with its last reported top edge.

use std::collections::BTreeMap;

use crate::observe::Intersection;

/// Which navigable section is current. At most one id is current at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveSection {
    ids: Vec<String>,
    current: Option<String>,
    /// Known sections currently intersecting, by last reported top.
    visible: BTreeMap<String, f64>,
}

impl ActiveSection {
    /// `fragment` is the URL hash, with or without the leading `#`. When it
    /// names a known section that section is current before any batch.
    pub fn new<I, K>(ids: I, fragment: Option<&str>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let current = fragment
            .map(|f| f.trim_start_matches('#'))
            .filter(|f| ids.iter().any(|id| id == f))
            .map(str::to_string);
        Self {
            ids,
            current,
            visible: BTreeMap::new(),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Fold a batch into the visible set, then mark the visible section
    /// nearest the viewport top as current. While nothing known is visible
    /// the marker stays where it is. Returns whether the marker moved.
    pub fn observe(&mut self, batch: &[Intersection]) -> bool {
        for entry in batch {
            if !self.ids.iter().any(|id| *id == entry.key) {
                continue;
            }
            if entry.is_intersecting {
                self.visible.insert(entry.key.clone(), entry.top);
            } else {
                self.visible.remove(&entry.key);
            }
        }

        let Some(nearest) = self
            .visible
            .iter()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(id, _)| id.clone())
        else {
            return false;
        };
        if self.is_current(&nearest) {
            return false;
        }
        self.current = Some(nearest);
        true
    }
}
