//! In-page section switching.
//!
//! The site is one document with several `.section` blocks. Only one of them
//! carries the `active` marker at a time, and the nav link pointing at it
//! mirrors that marker. Section activation is split in two steps so the CSS
//! entry animation restarts: `Navigate` clears every marker and activates the
//! link right away, and `Reveal` (dispatched a tick later) shows the section.

use std::rc::Rc;

use yew::prelude::*;

use crate::config::layout;
use crate::consultation::modal::ConsultationTopic;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Services,
    Research,
    Team,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::Research,
        SectionId::Team,
        SectionId::Contact,
    ];

    /// Value used for the element id and the `data-section` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Research => "research",
            SectionId::Team => "team",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_attr() == value.trim())
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Services => "Services",
            SectionId::Research => "Research",
            SectionId::Team => "Team",
            SectionId::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Drawer {
    open: bool,
}

impl Drawer {
    pub const CLOSED_GLYPH: &'static str = "☰";
    pub const OPEN_GLYPH: &'static str = "✕";

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn glyph(&self) -> &'static str {
        if self.open {
            Self::OPEN_GLYPH
        } else {
            Self::CLOSED_GLYPH
        }
    }
}

pub enum RouterAction {
    Navigate(SectionId),
    Reveal(SectionId),
    ToggleDrawer,
    CloseDrawer,
}

/// Window keys that act on the open overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKey {
    Dismiss,
}

impl OverlayKey {
    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(Self::Dismiss)
    }

    pub fn router_action(self) -> RouterAction {
        match self {
            OverlayKey::Dismiss => RouterAction::CloseDrawer,
        }
    }

    /// Modal topic left open after the key.
    pub fn next_modal(self, _open: Option<ConsultationTopic>) -> Option<ConsultationTopic> {
        match self {
            OverlayKey::Dismiss => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewRouter {
    sections: Vec<SectionId>,
    active_link: Option<SectionId>,
    visible: Option<SectionId>,
    pending: Option<SectionId>,
    drawer: Drawer,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new(SectionId::ALL.to_vec(), SectionId::Home)
    }
}

impl ViewRouter {
    /// `initial` is shown straight away; an unregistered initial section
    /// leaves nothing visible until the first navigation.
    pub fn new(sections: Vec<SectionId>, initial: SectionId) -> Self {
        let initial = sections.contains(&initial).then_some(initial);
        Self {
            sections,
            active_link: initial,
            visible: initial,
            pending: None,
            drawer: Drawer::default(),
        }
    }

    /// Returns the section to reveal after the transition delay, or `None`
    /// when the target is not part of this page.
    pub fn navigate(&mut self, target: SectionId) -> Option<SectionId> {
        if !self.sections.contains(&target) {
            return None;
        }
        self.visible = None;
        self.active_link = Some(target);
        self.pending = Some(target);
        self.drawer.close();
        Some(target)
    }

    /// Reveals whatever navigation is still outstanding for `target`. A
    /// reveal left over from a superseded navigation does nothing.
    pub fn reveal(&mut self, target: SectionId) -> bool {
        if self.pending != Some(target) {
            return false;
        }
        self.pending = None;
        self.visible = Some(target);
        true
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer.toggle();
    }

    pub fn close_drawer(&mut self) {
        self.drawer.close();
    }

    pub fn drawer(&self) -> Drawer {
        self.drawer
    }

    pub fn is_visible(&self, id: SectionId) -> bool {
        self.visible == Some(id)
    }

    pub fn is_link_active(&self, id: SectionId) -> bool {
        self.active_link == Some(id)
    }

    pub fn visible(&self) -> Option<SectionId> {
        self.visible
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }
}

impl Reducible for ViewRouter {
    type Action = RouterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RouterAction::Navigate(target) => {
                if next.navigate(target).is_none() {
                    return self;
                }
            }
            RouterAction::Reveal(target) => {
                if !next.reveal(target) {
                    return self;
                }
            }
            RouterAction::ToggleDrawer => next.toggle_drawer(),
            RouterAction::CloseDrawer => {
                if !next.drawer.is_open() {
                    return self;
                }
                next.close_drawer();
            }
        }
        Rc::new(next)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Tracks the page's vertical offset for the header's visual markers.
#[derive(Clone, Debug)]
pub struct HeaderTracker {
    last_y: f64,
    hide_on_scroll_down: bool,
}

impl HeaderTracker {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y,
            hide_on_scroll_down: false,
        }
    }

    pub fn hiding_on_scroll_down(mut self) -> Self {
        self.hide_on_scroll_down = true;
        self
    }

    pub fn observe(&mut self, y: f64) -> HeaderState {
        let hidden = self.hide_on_scroll_down && y > self.last_y && y > layout::HEADER_HIDE_AFTER;
        self.last_y = y;
        HeaderState {
            scrolled: y > layout::HEADER_SCROLLED_THRESHOLD,
            hidden,
        }
    }
}

/// Document offset that puts an element just below the fixed header.
pub fn anchor_offset(rect_top: f64, page_y: f64) -> f64 {
    rect_top + page_y - layout::ANCHOR_HEADER_OFFSET
}

pub fn scroll_to_top() {
    scroll_window_to(0.0);
}

pub fn scroll_window_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls to the element with `id`, if the document has one.
pub fn scroll_to_element(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let top = element.get_bounding_client_rect().top();
    scroll_window_to(anchor_offset(top, page_y));
}

/// Callbacks that page content uses to reach the app shell.
#[derive(Clone, PartialEq)]
pub struct SiteActions {
    /// Takes a raw `data-section` value; unknown values do nothing.
    pub navigate_attr: Callback<String>,
    pub open_consultation: Callback<(ConsultationTopic, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(router: &mut ViewRouter, target: SectionId) {
        if let Some(pending) = router.navigate(target) {
            router.reveal(pending);
        }
    }

    fn visible_count(router: &ViewRouter) -> usize {
        SectionId::ALL.iter().filter(|id| router.is_visible(**id)).count()
    }

    fn active_count(router: &ViewRouter) -> usize {
        SectionId::ALL.iter().filter(|id| router.is_link_active(**id)).count()
    }

    #[test]
    fn exactly_one_section_and_link_after_navigation() {
        let mut router = ViewRouter::default();
        for target in SectionId::ALL {
            settle(&mut router, target);
            assert_eq!(visible_count(&router), 1);
            assert_eq!(active_count(&router), 1);
            assert!(router.is_visible(target));
            assert!(router.is_link_active(target));
        }
    }

    #[test]
    fn link_activates_before_section_is_revealed() {
        let mut router = ViewRouter::default();
        let pending = router.navigate(SectionId::Team);
        assert_eq!(pending, Some(SectionId::Team));
        assert!(router.is_link_active(SectionId::Team));
        assert_eq!(router.visible(), None);

        assert!(router.reveal(SectionId::Team));
        assert_eq!(router.visible(), Some(SectionId::Team));
    }

    #[test]
    fn navigating_to_active_section_is_idempotent() {
        let mut router = ViewRouter::default();
        settle(&mut router, SectionId::Services);
        let before = router.clone();
        settle(&mut router, SectionId::Services);
        assert_eq!(router, before);
    }

    #[test]
    fn stale_reveal_is_ignored() {
        let mut router = ViewRouter::default();
        router.navigate(SectionId::Research);
        router.navigate(SectionId::Contact);

        assert!(!router.reveal(SectionId::Research));
        assert!(router.reveal(SectionId::Contact));
        assert_eq!(visible_count(&router), 1);
        assert!(router.is_link_active(SectionId::Contact));
    }

    #[test]
    fn unknown_target_is_a_no_op() {
        let mut router = ViewRouter::new(vec![SectionId::Home, SectionId::Team], SectionId::Home);
        let before = router.clone();

        assert_eq!(router.navigate(SectionId::Research), None);
        assert_eq!(router, before);

        let state = Rc::new(router);
        let next = state.clone().reduce(RouterAction::Navigate(SectionId::Services));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn cta_attribute_resolves_section() {
        assert_eq!(SectionId::from_attr("contact"), Some(SectionId::Contact));
        assert_eq!(SectionId::from_attr(" team "), Some(SectionId::Team));
        assert_eq!(SectionId::from_attr("pricing"), None);
        assert_eq!(SectionId::from_attr(""), None);
    }

    #[test]
    fn navigation_closes_drawer() {
        let mut router = ViewRouter::default();
        router.toggle_drawer();
        assert!(router.drawer().is_open());

        router.navigate(SectionId::Team);
        assert!(!router.drawer().is_open());
        assert_eq!(router.drawer().glyph(), Drawer::CLOSED_GLYPH);
    }

    #[test]
    fn double_toggle_restores_drawer_and_glyph() {
        let mut drawer = Drawer::default();
        let initial = (drawer.is_open(), drawer.glyph());

        drawer.toggle();
        assert!(drawer.is_open());
        assert_eq!(drawer.glyph(), Drawer::OPEN_GLYPH);

        drawer.toggle();
        assert_eq!((drawer.is_open(), drawer.glyph()), initial);
    }

    #[test]
    fn close_drawer_forces_closed_from_any_state() {
        let mut router = ViewRouter::default();
        router.close_drawer();
        assert!(!router.drawer().is_open());

        router.toggle_drawer();
        router.close_drawer();
        assert!(!router.drawer().is_open());
        assert_eq!(router.drawer().glyph(), Drawer::CLOSED_GLYPH);
    }

    #[test]
    fn escape_closes_drawer_and_modal_from_any_state() {
        let key = OverlayKey::from_key("Escape").expect("escape is bound");
        let topics = [
            None,
            Some(ConsultationTopic::Consultation),
            Some(ConsultationTopic::Industrial),
            Some(ConsultationTopic::Training),
        ];
        for drawer_open in [false, true] {
            for section in SectionId::ALL {
                let mut router = ViewRouter::default();
                router.navigate(section);
                router.reveal(section);
                if drawer_open {
                    router.toggle_drawer();
                }
                let router = Rc::new(router).reduce(key.router_action());
                assert!(!router.drawer().is_open());
                assert_eq!(router.visible(), Some(section));

                for topic in topics {
                    assert_eq!(key.next_modal(topic), None);
                }
            }
        }
    }

    #[test]
    fn other_keys_leave_overlays_alone() {
        for key in ["Enter", "Esc", "escape", " ", "Tab", ""] {
            assert_eq!(OverlayKey::from_key(key), None);
        }
    }

    #[test]
    fn reducer_keeps_same_state_for_noop_actions() {
        let state = Rc::new(ViewRouter::default());
        let next = state.clone().reduce(RouterAction::CloseDrawer);
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(RouterAction::Reveal(SectionId::Team));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn header_marks_scrolled_past_threshold() {
        let mut tracker = HeaderTracker::new(0.0);
        assert!(!tracker.observe(50.0).scrolled);
        assert!(tracker.observe(51.0).scrolled);
        assert!(!tracker.observe(10.0).scrolled);
    }

    #[test]
    fn header_hides_only_when_enabled_and_scrolling_down() {
        let mut plain = HeaderTracker::new(0.0);
        assert!(!plain.observe(400.0).hidden);

        let mut hiding = HeaderTracker::new(0.0).hiding_on_scroll_down();
        assert!(!hiding.observe(150.0).hidden);
        assert!(hiding.observe(300.0).hidden);
        assert!(!hiding.observe(250.0).hidden);
    }

    #[test]
    fn anchor_offset_accounts_for_header() {
        assert_eq!(anchor_offset(300.0, 1000.0), 1220.0);
    }
}
