//! Expand every role for printing, then put things back.

use std::collections::BTreeSet;

use crate::disclosure::DisclosureState;

/// Holds the reader's open set while the page is forced open for print.
///
/// A second `begin` before `end` (print button followed by the browser's own
/// `beforeprint`) keeps the first snapshot, so the forced state is never
/// mistaken for the reader's choice. Each print cycle replaces the snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrintCoordinator {
    saved: Option<BTreeSet<usize>>,
}

impl PrintCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether roles are currently forced open for print.
    #[cfg(test)]
    fn is_forced(&self) -> bool {
        self.saved.is_some()
    }

    pub fn begin(&mut self, state: &mut DisclosureState) {
        if self.saved.is_none() {
            self.saved = Some(state.open_set().clone());
        }
        state.open_all();
    }

    /// Restore the snapshot taken by the first `begin` of this cycle.
    /// Without a pending snapshot this does nothing.
    pub fn end(&mut self, state: &mut DisclosureState) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        state.close_all();
        state.restore(&saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RoleBlock;

    fn two_roles() -> DisclosureState {
        DisclosureState::from_blocks(
            &[
                RoleBlock::Collapsible { initially_open: true },
                RoleBlock::Collapsible { initially_open: false },
            ],
            false,
        )
    }

    #[test]
    fn test_print_restores_exact_state() {
        let mut state = two_roles();
        let mut print = PrintCoordinator::new();

        print.begin(&mut state);
        assert!(state.is_open(0));
        assert!(state.is_open(1));
        assert!(print.is_forced());

        print.end(&mut state);
        assert!(state.is_open(0));
        assert!(!state.is_open(1));
        assert!(!print.is_forced());
    }

    #[test]
    fn test_repeated_begin_keeps_reader_state() {
        let mut state = two_roles();
        let mut print = PrintCoordinator::new();

        print.begin(&mut state);
        print.begin(&mut state);
        print.end(&mut state);
        assert_eq!(state.open_set().iter().copied().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_cycles_do_not_accumulate() {
        let mut state = two_roles();
        let mut print = PrintCoordinator::new();

        print.begin(&mut state);
        print.end(&mut state);

        state.toggle(0);
        state.toggle(1);
        print.begin(&mut state);
        print.end(&mut state);
        assert!(!state.is_open(0));
        assert!(state.is_open(1));
    }

    #[test]
    fn test_end_without_begin_is_noop() {
        let mut state = two_roles();
        let mut print = PrintCoordinator::new();
        print.end(&mut state);
        assert!(state.is_open(0));
        assert!(!state.is_open(1));
    }

    #[test]
    fn test_exclusive_mode_restores_single_open() {
        let mut state = DisclosureState::from_blocks(
            &[
                RoleBlock::Collapsible { initially_open: false },
                RoleBlock::Collapsible { initially_open: false },
                RoleBlock::Collapsible { initially_open: true },
            ],
            true,
        );
        let mut print = PrintCoordinator::new();
        print.begin(&mut state);
        assert_eq!(state.open_set().len(), 3);
        print.end(&mut state);
        assert_eq!(state.open_set().iter().copied().collect::<Vec<_>>(), vec![2]);
    }
}
