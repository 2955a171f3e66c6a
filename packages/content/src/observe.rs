//! Viewport intersection batches, independent of the browser primitive
//! that produces them.

use serde::{Deserialize, Serialize};

/// One observed element in a batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intersection {
    /// Reveal key or section id of the observed element.
    pub key: String,
    pub is_intersecting: bool,
    /// Distance from the viewport top to the element's top edge, in CSS px.
    pub top: f64,
}

impl Intersection {
    pub fn new(key: impl Into<String>, is_intersecting: bool, top: f64) -> Self {
        Self {
            key: key.into(),
            is_intersecting,
            top,
        }
    }
}

/// Intersecting entries of a batch, nearest to the viewport top first.
pub fn visible_subset(batch: &[Intersection]) -> Vec<&Intersection> {
    let mut visible: Vec<&Intersection> = batch.iter().filter(|e| e.is_intersecting).collect();
    visible.sort_by(|a, b| a.top.total_cmp(&b.top));
    visible
}
