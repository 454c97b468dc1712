//! Navigation Menu State
//!
//! The collapsible menu is a small state value; the view reads it to set
//! classes, ARIA attributes, backdrop and icon, and applies the returned
//! focus request.

/// Input events understood by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Trigger clicked, or Enter/Space pressed on it
    TriggerActivated,
    BackdropClicked,
    LinkClicked,
    EscapePressed,
    /// Debounced viewport resize
    Resized { width: u32 },
}

/// Where focus should move after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    FirstLink,
    Trigger,
}

/// Menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
    expanded: bool,
    desktop: bool,
    breakpoint_px: u32,
}

impl NavMenu {
    pub fn new(breakpoint_px: u32, viewport_width: u32) -> Self {
        Self {
            expanded: false,
            desktop: viewport_width > breakpoint_px,
            breakpoint_px,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_desktop(&self) -> bool {
        self.desktop
    }

    /// Apply an event, returning the focus move it implies
    pub fn handle(&mut self, event: NavEvent) -> Option<FocusRequest> {
        match event {
            NavEvent::TriggerActivated => {
                if self.expanded {
                    self.close()
                } else {
                    self.expanded = true;
                    Some(FocusRequest::FirstLink)
                }
            }
            NavEvent::BackdropClicked | NavEvent::LinkClicked | NavEvent::EscapePressed => {
                self.close()
            }
            NavEvent::Resized { width } => {
                self.desktop = width > self.breakpoint_px;
                if self.desktop {
                    self.expanded = false;
                }
                None
            }
        }
    }

    /// Whether Escape is the menu's to handle; an open dialog takes it
    /// first so its own focus return is not overridden
    pub fn takes_escape(&self, dialog_open: bool) -> bool {
        self.expanded && !dialog_open
    }

    fn close(&mut self) -> Option<FocusRequest> {
        if !self.expanded {
            return None;
        }
        self.expanded = false;
        Some(FocusRequest::Trigger)
    }

    /// `aria-hidden` for the menu; always visible on the desktop layout
    pub fn menu_hidden(&self) -> bool {
        !self.expanded && !self.desktop
    }

    pub fn backdrop_active(&self) -> bool {
        self.expanded
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.expanded {
            "Fechar menu"
        } else {
            "Abrir menu"
        }
    }

    /// FontAwesome icon class for the trigger
    pub fn trigger_icon(&self) -> &'static str {
        if self.expanded {
            "fa-times"
        } else {
            "fa-bars"
        }
    }
}

/// Last path segment, or `index.html` for the site root
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => "index.html",
    }
}

/// Exact match, with the root page falling back to the home link
pub fn is_active_link(href: &str, page: &str) -> bool {
    href == page || (page == "index.html" && href.ends_with("index.html"))
}
