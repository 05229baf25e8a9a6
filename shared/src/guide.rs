//! Sidebar state and section scroll-spy for the documentation-style guide
//! page.

use crate::config::{GUIDE_HEADER_OFFSET, GUIDE_SPY_OFFSET, MOBILE_BREAKPOINT, MOBILE_SCROLL_DELAY_MS};

/// Layout box of one guide section, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    /// Element id, the sidebar link's fragment.
    pub id: String,
    /// Offset from the top of the document.
    pub top: f64,
    /// Rendered height.
    pub height: f64,
}

/// The section containing `scroll_y`, each section's range starting
/// `spy_offset` pixels early. When ranges overlap the later section wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBox], spy_offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let start = section.top - spy_offset;
            scroll_y >= start && scroll_y < start + section.height
        })
        .map(|section| section.id.as_str())
}

/// [`active_section`] with the page's standard offset.
pub fn current_section(scroll_y: f64, sections: &[SectionBox]) -> Option<&str> {
    active_section(scroll_y, sections, GUIDE_SPY_OFFSET)
}

/// Viewports at or below the breakpoint use the drawer layout.
pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width <= MOBILE_BREAKPOINT
}

/// Where to scroll for a section whose viewport top is `section_top`.
pub fn section_scroll_target(section_top: f64, scroll_y: f64) -> f64 {
    crate::toc::scroll_target(section_top, scroll_y, GUIDE_HEADER_OFFSET)
}

/// What happens after a sidebar link click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkScroll {
    /// Close the mobile drawer before scrolling.
    pub close_drawer: bool,
    /// Wait this long before scrolling.
    pub delay_ms: u32,
}

/// Desktop collapse and mobile drawer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    /// Desktop: navigation list hidden.
    pub collapsed: bool,
    /// Mobile: drawer and overlay shown.
    pub drawer_open: bool,
}

impl SidebarState {
    /// The sidebar's own toggle button: closes the drawer on mobile,
    /// collapses or expands the list on desktop.
    pub fn toggle_button(&mut self, mobile: bool) {
        if mobile {
            self.drawer_open = false;
        } else {
            self.collapsed = !self.collapsed;
        }
    }

    /// The floating button that opens and closes the mobile drawer.
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Overlay click or escape.
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Closes the drawer on mobile and reports how to scroll.
    pub fn link_clicked(&mut self, mobile: bool) -> LinkScroll {
        if mobile {
            self.drawer_open = false;
            LinkScroll {
                close_drawer: true,
                delay_ms: MOBILE_SCROLL_DELAY_MS,
            }
        } else {
            LinkScroll {
                close_drawer: false,
                delay_ms: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox { id: "intro".into(), top: 200.0, height: 500.0 },
            SectionBox { id: "setup".into(), top: 700.0, height: 800.0 },
            SectionBox { id: "faq".into(), top: 1500.0, height: 300.0 },
        ]
    }

    #[test]
    fn spy_uses_offset_window() {
        let sections = sections();
        assert_eq!(current_section(0.0, &sections), None);
        assert_eq!(current_section(50.0, &sections), Some("intro"));
        assert_eq!(current_section(549.0, &sections), Some("intro"));
        assert_eq!(current_section(550.0, &sections), Some("setup"));
        assert_eq!(current_section(1400.0, &sections), Some("faq"));
        assert_eq!(current_section(1650.0, &sections), None);
    }

    #[test]
    fn toggle_button_depends_on_viewport() {
        let mut state = SidebarState { collapsed: false, drawer_open: true };
        state.toggle_button(true);
        assert_eq!(state, SidebarState { collapsed: false, drawer_open: false });
        state.toggle_button(false);
        assert!(state.collapsed);
        state.toggle_button(false);
        assert!(!state.collapsed);
    }

    #[test]
    fn mobile_link_click_closes_drawer_and_delays() {
        let mut state = SidebarState::default();
        state.toggle_drawer();
        assert!(state.drawer_open);
        let scroll = state.link_clicked(true);
        assert!(!state.drawer_open);
        assert_eq!(scroll, LinkScroll { close_drawer: true, delay_ms: 350 });
        assert_eq!(state.link_clicked(false).delay_ms, 0);
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile(1024.0));
        assert!(!is_mobile(1025.0));
        assert_eq!(section_scroll_target(300.0, 1000.0), 1180.0);
    }
}
