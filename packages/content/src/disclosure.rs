//! Open/closed state of the collapsible roles.

use std::collections::BTreeSet;

use crate::layout::RoleBlock;

/// Tracks which collapsible roles (by index into the experience list) are
/// open. Indices of static roles are never tracked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisclosureState {
    collapsible: BTreeSet<usize>,
    open: BTreeSet<usize>,
    exclusive: bool,
}

impl DisclosureState {
    /// Initial state from the rendered blocks: only the roles marked
    /// `initially_open` start open.
    pub fn from_blocks(blocks: &[RoleBlock], exclusive: bool) -> Self {
        let mut state = Self {
            exclusive,
            ..Self::default()
        };
        for (index, block) in blocks.iter().enumerate() {
            if let RoleBlock::Collapsible { initially_open } = block {
                state.collapsible.insert(index);
                if *initially_open {
                    state.open.insert(index);
                }
            }
        }
        state
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn is_collapsible(&self, index: usize) -> bool {
        self.collapsible.contains(&index)
    }

    pub fn open_set(&self) -> &BTreeSet<usize> {
        &self.open
    }

    /// Open or close one role. In exclusive mode opening a role closes the rest.
    pub fn set_open(&mut self, index: usize, open: bool) {
        if !self.is_collapsible(index) {
            return;
        }
        if open {
            if self.exclusive {
                self.open.clear();
            }
            self.open.insert(index);
        } else {
            self.open.remove(&index);
        }
    }

    pub fn toggle(&mut self, index: usize) {
        let open = !self.is_open(index);
        self.set_open(index, open);
    }

    /// Open every collapsible role, ignoring exclusive mode.
    pub fn open_all(&mut self) {
        self.open = self.collapsible.clone();
    }

    pub fn close_all(&mut self) {
        self.open.clear();
    }

    /// Re-open exactly `indices`, ignoring exclusive mode.
    pub fn restore(&mut self, indices: &BTreeSet<usize>) {
        self.open = indices.intersection(&self.collapsible).copied().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks() -> Vec<RoleBlock> {
        vec![
            RoleBlock::Collapsible { initially_open: true },
            RoleBlock::Static,
            RoleBlock::Collapsible { initially_open: false },
            RoleBlock::Collapsible { initially_open: false },
        ]
    }

    #[test]
    fn test_initial_state_follows_blocks() {
        let state = DisclosureState::from_blocks(&blocks(), false);
        assert!(state.is_open(0));
        assert!(!state.is_open(2));
        assert!(!state.is_collapsible(1));
    }

    #[test]
    fn test_static_roles_cannot_open() {
        let mut state = DisclosureState::from_blocks(&blocks(), false);
        state.toggle(1);
        state.open_all();
        assert!(!state.is_open(1));
        assert_eq!(state.open_set().len(), 3);
    }

    #[test]
    fn test_independent_mode_keeps_others_open() {
        let mut state = DisclosureState::from_blocks(&blocks(), false);
        state.toggle(2);
        assert!(state.is_open(0));
        assert!(state.is_open(2));
        state.toggle(0);
        assert!(!state.is_open(0));
    }

    #[test]
    fn test_exclusive_mode_closes_others() {
        let mut state = DisclosureState::from_blocks(&blocks(), true);
        state.toggle(3);
        assert!(state.is_open(3));
        assert!(!state.is_open(0));
        state.toggle(3);
        assert!(state.open_set().is_empty());
    }

    #[test]
    fn test_no_roles() {
        let mut state = DisclosureState::from_blocks(&[], true);
        state.open_all();
        state.toggle(0);
        assert!(state.open_set().is_empty());
    }
}
