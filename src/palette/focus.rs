/// Things in the UI that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Dashboard,
    Notifications,
    PaletteInput,
    PaletteResults,
}

/// Confines Tab cycling to a fixed ring of targets while a modal is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap {
    targets: Vec<FocusTarget>,
}

impl FocusTrap {
    #[must_use]
    pub fn new(targets: Vec<FocusTarget>) -> Self {
        Self { targets }
    }

    #[must_use]
    pub fn palette() -> Self {
        Self::new(vec![FocusTarget::PaletteInput, FocusTarget::PaletteResults])
    }

    /// Next target after `current`, wrapping at the last. Focus outside the
    /// ring is pulled back to its first element.
    #[must_use]
    pub fn next(&self, current: FocusTarget) -> FocusTarget {
        match self.targets.iter().position(|t| *t == current) {
            Some(i) => self.targets[(i + 1) % self.targets.len()],
            None => self.targets.first().copied().unwrap_or(current),
        }
    }

    #[must_use]
    pub fn prev(&self, current: FocusTarget) -> FocusTarget {
        match self.targets.iter().position(|t| *t == current) {
            Some(0) => self.targets.last().copied().unwrap_or(current),
            Some(i) => self.targets[i - 1],
            None => self.targets.last().copied().unwrap_or(current),
        }
    }
}

/// Focus to return to when a modal closes. A target that is no longer on
/// screen falls back to the dashboard.
#[must_use]
pub fn restore_focus(captured: Option<FocusTarget>, notifications_visible: bool) -> FocusTarget {
    match captured {
        Some(FocusTarget::Notifications) if notifications_visible => FocusTarget::Notifications,
        _ => FocusTarget::Dashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trap_wraps_both_ways() {
        let trap = FocusTrap::palette();
        assert_eq!(trap.next(FocusTarget::PaletteInput), FocusTarget::PaletteResults);
        assert_eq!(trap.next(FocusTarget::PaletteResults), FocusTarget::PaletteInput);
        assert_eq!(trap.prev(FocusTarget::PaletteInput), FocusTarget::PaletteResults);
        assert_eq!(trap.prev(FocusTarget::PaletteResults), FocusTarget::PaletteInput);
    }

    #[test]
    fn test_trap_pulls_outside_focus_in() {
        let trap = FocusTrap::palette();
        assert_eq!(trap.next(FocusTarget::Dashboard), FocusTarget::PaletteInput);
        assert_eq!(trap.prev(FocusTarget::Dashboard), FocusTarget::PaletteResults);
    }

    #[test]
    fn test_restore_focus_falls_back_when_gone() {
        assert_eq!(
            restore_focus(Some(FocusTarget::Notifications), true),
            FocusTarget::Notifications
        );
        assert_eq!(
            restore_focus(Some(FocusTarget::Notifications), false),
            FocusTarget::Dashboard
        );
        assert_eq!(restore_focus(None, true), FocusTarget::Dashboard);
    }
}
