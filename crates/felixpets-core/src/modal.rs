//! Confirmation Modal State

/// Input events understood by the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    CloseClicked,
    BackdropClicked,
    EscapePressed,
    /// "New appointment" control
    NewAppointment,
}

/// Side effect the view must perform after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffect {
    /// Focus the first focusable control inside the dialog
    FocusFirstControl,
    /// Return focus to the appointment form's submit button
    FocusSubmit,
    /// Reset the form, scroll its section into view, focus submit
    StartNewAppointment,
}

impl ModalEffect {
    /// True when focusing the submit button must leave the scroll position
    /// alone because a smooth scroll to the form section is in flight
    pub fn focus_without_scroll(&self) -> bool {
        matches!(self, ModalEffect::StartNewAppointment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfirmationModal {
    open: bool,
}

impl ConfirmationModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle(&mut self, event: ModalEvent) -> Option<ModalEffect> {
        match event {
            ModalEvent::Open => {
                self.open = true;
                Some(ModalEffect::FocusFirstControl)
            }
            _ if !self.open => None,
            ModalEvent::CloseClicked | ModalEvent::BackdropClicked | ModalEvent::EscapePressed => {
                self.open = false;
                Some(ModalEffect::FocusSubmit)
            }
            ModalEvent::NewAppointment => {
                self.open = false;
                Some(ModalEffect::StartNewAppointment)
            }
        }
    }
}

/// Focus trap for Tab inside the dialog
///
/// `active` is the index of the focused control among `count` focusable
/// ones (None when focus is outside). Returns the index to focus when the
/// browser's default move must be overridden, i.e. when wrapping.
pub fn trap_tab(count: usize, active: Option<usize>, shift: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (active, shift) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_paths() {
        for event in [
            ModalEvent::CloseClicked,
            ModalEvent::BackdropClicked,
            ModalEvent::EscapePressed,
        ] {
            let mut modal = ConfirmationModal::default();
            assert_eq!(modal.handle(ModalEvent::Open), Some(ModalEffect::FocusFirstControl));
            assert!(modal.is_open());
            assert_eq!(modal.handle(event), Some(ModalEffect::FocusSubmit));
            assert!(!modal.is_open());
        }
    }

    #[test]
    fn test_new_appointment() {
        let mut modal = ConfirmationModal::default();
        modal.handle(ModalEvent::Open);
        assert_eq!(
            modal.handle(ModalEvent::NewAppointment),
            Some(ModalEffect::StartNewAppointment)
        );
        assert!(!modal.is_open());
    }

    #[test]
    fn test_only_new_appointment_keeps_scroll_on_focus() {
        assert!(ModalEffect::StartNewAppointment.focus_without_scroll());
        assert!(!ModalEffect::FocusSubmit.focus_without_scroll());
        assert!(!ModalEffect::FocusFirstControl.focus_without_scroll());
    }

    #[test]
    fn test_escape_ignored_when_closed() {
        let mut modal = ConfirmationModal::default();
        assert_eq!(modal.handle(ModalEvent::EscapePressed), None);
    }

    #[test]
    fn test_trap_tab_wraps() {
        assert_eq!(trap_tab(3, Some(2), false), Some(0));
        assert_eq!(trap_tab(3, Some(0), true), Some(2));
        assert_eq!(trap_tab(3, Some(1), false), None);
        assert_eq!(trap_tab(3, Some(1), true), None);
        assert_eq!(trap_tab(1, Some(0), false), Some(0));
        assert_eq!(trap_tab(3, None, false), Some(0));
        assert_eq!(trap_tab(3, None, true), Some(2));
        assert_eq!(trap_tab(0, None, false), None);
    }
}
