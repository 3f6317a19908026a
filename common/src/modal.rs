use tracing::debug;

// the ways an open detail view can be closed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dismiss {
    CloseButton,
    Escape,
    Overlay,
}

impl Dismiss {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Dismiss::Escape),
            _ => None,
        }
    }
}

// ModalState
//
// at most one item is open at a time; opening another replaces it
#[derive(Clone, Debug, PartialEq)]
pub struct ModalState<T> {
    current: Option<T>,
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState { current: None }
    }
}

impl<T> ModalState<T> {
    pub fn open(&mut self, item: T) {
        self.current = Some(item);
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    // hands back whatever was open, if anything
    pub fn dismiss(&mut self, how: Dismiss) -> Option<T> {
        let closed = self.current.take();

        if closed.is_some() {
            debug!("modal dismissed via {how:?}");
        }

        closed
    }
}

// tab_target
//
// keeps keyboard focus inside the open panel.  given the number of focusable
// elements and the position of the active one among them (None when focus is
// elsewhere), returns the index that should be focused instead of letting the
// browser move on, or None when the browser's own tab order is fine
pub fn tab_target(count: usize, active: Option<usize>, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let last = count - 1;

    match (active, backwards) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(0), true) => Some(last),
        (Some(idx), false) if idx == last => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_shows_the_item() {
        let mut modal = ModalState::default();
        assert!(!modal.is_open());

        modal.open(3);
        assert_eq!(modal.current(), Some(&3));

        modal.open(5);
        assert_eq!(modal.current(), Some(&5));
    }

    #[test]
    fn every_dismissal_closes() {
        for how in [Dismiss::CloseButton, Dismiss::Escape, Dismiss::Overlay] {
            let mut modal = ModalState::default();
            modal.open("project");

            assert_eq!(modal.dismiss(how), Some("project"));
            assert!(!modal.is_open());
            assert_eq!(modal.current(), None);
        }
    }

    #[test]
    fn dismissing_nothing_is_harmless() {
        let mut modal = ModalState::<u32>::default();
        assert_eq!(modal.dismiss(Dismiss::Escape), None);
    }

    #[test]
    fn only_escape_dismisses_from_the_keyboard() {
        assert_eq!(Dismiss::from_key("Escape"), Some(Dismiss::Escape));
        assert_eq!(Dismiss::from_key("Enter"), None);
        assert_eq!(Dismiss::from_key("Tab"), None);
    }

    #[test]
    fn tab_wraps_at_the_ends() {
        // forward off the last element goes back to the first
        assert_eq!(tab_target(3, Some(2), false), Some(0));
        // backward off the first goes to the last
        assert_eq!(tab_target(3, Some(0), true), Some(2));
    }

    #[test]
    fn tab_in_the_middle_is_left_alone() {
        assert_eq!(tab_target(3, Some(1), false), None);
        assert_eq!(tab_target(3, Some(1), true), None);
        assert_eq!(tab_target(3, Some(0), false), None);
        assert_eq!(tab_target(3, Some(2), true), None);
    }

    #[test]
    fn focus_outside_the_panel_is_pulled_back() {
        assert_eq!(tab_target(4, None, false), Some(0));
        assert_eq!(tab_target(4, None, true), Some(3));
    }

    #[test]
    fn single_or_no_focusable_element() {
        assert_eq!(tab_target(1, Some(0), false), Some(0));
        assert_eq!(tab_target(1, Some(0), true), Some(0));
        assert_eq!(tab_target(0, None, false), None);
    }
}
