use std::time::Duration;

use super::config::PortfolioConfig;
use super::menu::MobileMenu;
use super::nav::{anchor_target, ScrollTracker};
use super::reveal::{RevealAnimator, RevealEntry};
use super::ripple::{Ripple, RippleId};
use super::shortcuts::{is_keyboard_navigation, shortcut_target, KeyInput};
use super::skills::{plan_fills, BarFill, Progress};
use super::typing::TypingCycle;
use super::viewport::{Rect, Viewport};

/// Deferred work the page schedules on behalf of the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Timer {
    Loaded,
    TypingTick,
    SkillBars,
    SkillBar(BarFill),
    RippleExpired(RippleId),
}

/// The document as the controller sees it: geometry queries, the visual
/// markers it toggles, and a timer queue.
pub trait Page: Viewport {
    fn has_typing_text(&self) -> bool;
    fn set_navbar_scrolled(&mut self, scrolled: bool);
    fn set_navbar_hidden(&mut self, hidden: bool);
    /// Mark the nav link for `section` active and clear every other link.
    /// An empty `section` clears them all.
    fn set_active_link(&mut self, section: &str);
    /// Show or hide the menu overlay, the toggle's active state and the body
    /// scroll lock together.
    fn set_menu_open(&mut self, open: bool);
    fn set_typing_text(&mut self, text: &str);
    fn reveal(&mut self, index: usize);
    /// Raw `data-progress` of every skill bar in document order.
    fn skill_bar_targets(&self) -> Vec<Option<String>>;
    fn set_skill_bar_width(&mut self, index: usize, progress: Progress);
    /// Smoothly scroll the document to `top`.
    fn scroll_to(&mut self, top: f64);
    fn show_ripple(&mut self, id: RippleId, target: usize, style: &str);
    fn remove_ripple(&mut self, id: RippleId);
    fn set_contact_shifted(&mut self, index: usize, shifted: bool);
    fn set_keyboard_navigation(&mut self, active: bool);
    fn mark_loaded(&mut self);
    fn schedule(&mut self, delay: Duration, timer: Timer);
}

/// Owns all page-lifetime state and reacts to page events.
pub struct PageController {
    config: PortfolioConfig,
    scroll: ScrollTracker,
    menu: MobileMenu,
    typing: Option<TypingCycle>,
    reveal: RevealAnimator,
    next_ripple: u32,
}

impl PageController {
    pub fn new(config: PortfolioConfig) -> Self {
        let scroll = ScrollTracker::new(config.nav.clone());
        let typing = TypingCycle::new(config.roles.clone(), config.typing.clone());
        let reveal = RevealAnimator::new(config.skills_section.clone());
        Self {
            config,
            scroll,
            menu: MobileMenu::default(),
            typing,
            reveal,
            next_ripple: 0,
        }
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn current_section(&self) -> &str {
        self.scroll.current_section()
    }

    pub fn skills_animated(&self) -> bool {
        self.reveal.skills_animated()
    }

    /// Kick off the timers and sync the nav with the initial scroll position.
    pub fn start(&mut self, page: &mut impl Page) {
        page.schedule(self.config.loaded_delay(), Timer::Loaded);
        match &self.typing {
            Some(typing) if page.has_typing_text() => {
                page.schedule(typing.start_delay(), Timer::TypingTick);
            }
            Some(_) => log::debug!("no #typing-text on page, typing effect disabled"),
            None => log::debug!("no roles configured, typing effect disabled"),
        }
        self.on_scroll(page);
    }

    pub fn on_scroll(&mut self, page: &mut impl Page) {
        let offset = page.scroll_offset();
        let sections = page.sections();
        let update = self.scroll.on_scroll(offset, &sections);
        page.set_navbar_scrolled(update.scrolled);
        page.set_navbar_hidden(update.hidden);
        if let Some(section) = update.active {
            log::debug!("active section: {section:?}");
            page.set_active_link(&section);
        }
    }

    /// Scroll so the section clears the fixed navbar. Unknown ids are ignored.
    pub fn scroll_to_section(&mut self, page: &mut impl Page, id: &str) -> bool {
        let top = match page.section_top(id) {
            Some(top) => top,
            None => return false,
        };
        page.scroll_to((top - self.config.nav.scroll_offset).max(0.0));
        true
    }

    /// Returns whether the link's default navigation should be suppressed.
    pub fn on_nav_click(&mut self, page: &mut impl Page, href: &str) -> bool {
        let handled = match anchor_target(href) {
            Some(id) => {
                self.scroll_to_section(page, id);
                true
            }
            None => false,
        };
        self.close_menu(page);
        handled
    }

    pub fn on_toggle_click(&mut self, page: &mut impl Page) {
        let open = self.menu.toggle();
        page.set_menu_open(open);
    }

    /// Click landing outside both the toggle and the menu.
    pub fn on_outside_click(&mut self, page: &mut impl Page) {
        self.close_menu(page);
    }

    pub fn close_menu(&mut self, page: &mut impl Page) {
        if self.menu.close() {
            page.set_menu_open(false);
        }
    }

    pub fn on_intersection(&mut self, page: &mut impl Page, entries: &[RevealEntry]) {
        let outcome = self.reveal.observe(entries);
        for index in outcome.revealed {
            page.reveal(index);
        }
        if outcome.start_skill_bars {
            page.schedule(
                Duration::from_millis(self.config.reveal.skills_delay_ms),
                Timer::SkillBars,
            );
        }
    }

    /// Returns whether the key was a shortcut and its default should be
    /// prevented.
    pub fn on_keydown(&mut self, page: &mut impl Page, input: &KeyInput) -> bool {
        if is_keyboard_navigation(&input.key) {
            page.set_keyboard_navigation(true);
        }
        let target = shortcut_target(input, &self.config.shortcut_sections).map(str::to_string);
        match target {
            Some(id) => {
                self.scroll_to_section(page, &id);
                true
            }
            None => false,
        }
    }

    pub fn on_mousedown(&mut self, page: &mut impl Page) {
        page.set_keyboard_navigation(false);
    }

    pub fn on_social_click(
        &mut self,
        page: &mut impl Page,
        target: usize,
        rect: &Rect,
        x: f64,
        y: f64,
    ) {
        let ripple = Ripple::at(rect, x, y);
        let id = RippleId(self.next_ripple);
        self.next_ripple = self.next_ripple.wrapping_add(1);
        page.show_ripple(id, target, &ripple.css(self.config.ripple.duration_ms));
        page.schedule(
            Duration::from_millis(self.config.ripple.duration_ms),
            Timer::RippleExpired(id),
        );
    }

    pub fn on_contact_hover(&mut self, page: &mut impl Page, index: usize, entered: bool) {
        page.set_contact_shifted(index, entered);
    }

    pub fn on_timer(&mut self, page: &mut impl Page, timer: Timer) {
        match timer {
            Timer::Loaded => page.mark_loaded(),
            Timer::TypingTick => {
                if let Some(typing) = self.typing.as_mut() {
                    let frame = typing.tick();
                    page.set_typing_text(&frame.text);
                    page.schedule(frame.next, Timer::TypingTick);
                }
            }
            Timer::SkillBars => {
                let stagger = Duration::from_millis(self.config.reveal.stagger_ms);
                for fill in plan_fills(&page.skill_bar_targets(), stagger) {
                    page.schedule(fill.delay, Timer::SkillBar(fill));
                }
            }
            Timer::SkillBar(fill) => page.set_skill_bar_width(fill.index, fill.progress),
            Timer::RippleExpired(id) => page.remove_ripple(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;
    use crate::portfolio::viewport::SectionBounds;

    /// In-memory page with a virtual clock.
    #[derive(Default)]
    struct MockPage {
        offset: f64,
        sections: Vec<SectionBounds>,
        typing_element: bool,
        skill_targets: Vec<Option<String>>,

        navbar_scrolled: bool,
        navbar_hidden: bool,
        active_link: String,
        menu_open: bool,
        menu_updates: usize,
        typing_text: String,
        revealed: BTreeSet<usize>,
        skill_widths: BTreeMap<usize, f64>,
        scrolls: Vec<f64>,
        ripples: BTreeMap<RippleId, (usize, String)>,
        contact_shifted: BTreeSet<usize>,
        keyboard_navigation: bool,
        loaded: bool,

        now: Duration,
        timers: Vec<(Duration, Timer)>,
    }

    impl MockPage {
        fn portfolio() -> Self {
            Self {
                sections: vec![
                    SectionBounds::new("home", 0.0, 800.0),
                    SectionBounds::new("about", 800.0, 600.0),
                    SectionBounds::new("experience", 1400.0, 1000.0),
                    SectionBounds::new("certifications", 2400.0, 500.0),
                    SectionBounds::new("skills", 2900.0, 700.0),
                    SectionBounds::new("projects", 3600.0, 900.0),
                    SectionBounds::new("contact", 4500.0, 600.0),
                ],
                typing_element: true,
                skill_targets: vec![
                    Some("95".to_string()),
                    Some("80".to_string()),
                    Some("65".to_string()),
                ],
                ..Default::default()
            }
        }
    }

    impl Viewport for MockPage {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn sections(&self) -> Vec<SectionBounds> {
            self.sections.clone()
        }

        fn viewport_height(&self) -> f64 {
            800.0
        }
    }

    impl Page for MockPage {
        fn has_typing_text(&self) -> bool {
            self.typing_element
        }

        fn set_navbar_scrolled(&mut self, scrolled: bool) {
            self.navbar_scrolled = scrolled;
        }

        fn set_navbar_hidden(&mut self, hidden: bool) {
            self.navbar_hidden = hidden;
        }

        fn set_active_link(&mut self, section: &str) {
            self.active_link = section.to_string();
        }

        fn set_menu_open(&mut self, open: bool) {
            self.menu_open = open;
            self.menu_updates += 1;
        }

        fn set_typing_text(&mut self, text: &str) {
            self.typing_text = text.to_string();
        }

        fn reveal(&mut self, index: usize) {
            self.revealed.insert(index);
        }

        fn skill_bar_targets(&self) -> Vec<Option<String>> {
            self.skill_targets.clone()
        }

        fn set_skill_bar_width(&mut self, index: usize, progress: Progress) {
            self.skill_widths.insert(index, progress.percent());
        }

        fn scroll_to(&mut self, top: f64) {
            self.scrolls.push(top);
        }

        fn show_ripple(&mut self, id: RippleId, target: usize, style: &str) {
            self.ripples.insert(id, (target, style.to_string()));
        }

        fn remove_ripple(&mut self, id: RippleId) {
            self.ripples.remove(&id);
        }

        fn set_contact_shifted(&mut self, index: usize, shifted: bool) {
            if shifted {
                self.contact_shifted.insert(index);
            } else {
                self.contact_shifted.remove(&index);
            }
        }

        fn set_keyboard_navigation(&mut self, active: bool) {
            self.keyboard_navigation = active;
        }

        fn mark_loaded(&mut self) {
            self.loaded = true;
        }

        fn schedule(&mut self, delay: Duration, timer: Timer) {
            self.timers.push((self.now + delay, timer));
        }
    }

    /// Run every timer due within `by`, in due order.
    fn advance(controller: &mut PageController, page: &mut MockPage, by: Duration) {
        let until = page.now + by;
        loop {
            let next = page
                .timers
                .iter()
                .enumerate()
                .filter(|(_, (due, _))| *due <= until)
                .min_by_key(|(_, (due, _))| *due)
                .map(|(i, _)| i);
            let i = match next {
                Some(i) => i,
                None => break,
            };
            let (due, timer) = page.timers.remove(i);
            page.now = due;
            controller.on_timer(page, timer);
        }
        page.now = until;
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn started() -> (PageController, MockPage) {
        let mut controller = PageController::new(PortfolioConfig::default());
        let mut page = MockPage::portfolio();
        controller.start(&mut page);
        (controller, page)
    }

    #[test]
    fn test_start_marks_loaded_and_home_active() {
        let (mut controller, mut page) = started();
        assert_eq!(page.active_link, "home");
        assert_eq!(controller.current_section(), "home");
        assert!(!page.loaded);
        advance(&mut controller, &mut page, ms(100));
        assert!(page.loaded);
    }

    #[test]
    fn test_scroll_updates_navbar_and_active_link() {
        let (mut controller, mut page) = started();
        page.offset = 40.0;
        controller.on_scroll(&mut page);
        assert!(!page.navbar_scrolled);

        page.offset = 120.0;
        controller.on_scroll(&mut page);
        assert!(page.navbar_scrolled);
        assert!(page.navbar_hidden);

        page.offset = 2850.0;
        controller.on_scroll(&mut page);
        assert_eq!(page.active_link, "skills");

        page.offset = 2000.0;
        controller.on_scroll(&mut page);
        assert!(!page.navbar_hidden);
        assert_eq!(page.active_link, "experience");

        page.offset = 9000.0;
        controller.on_scroll(&mut page);
        assert_eq!(page.active_link, "");
    }

    #[test]
    fn test_typing_runs_on_timers() {
        let (mut controller, mut page) = started();
        advance(&mut controller, &mut page, ms(999));
        assert_eq!(page.typing_text, "");
        advance(&mut controller, &mut page, ms(1));
        assert_eq!(page.typing_text, "D");
        // remaining 14 characters of "DevOps Engineer"
        advance(&mut controller, &mut page, ms(1400));
        assert_eq!(page.typing_text, "DevOps Engineer");
        // held for exactly 2000ms, through the pause tick
        advance(&mut controller, &mut page, ms(1999));
        assert_eq!(page.typing_text, "DevOps Engineer");
        advance(&mut controller, &mut page, ms(1));
        assert_eq!(page.typing_text, "DevOps Enginee");
    }

    #[test]
    fn test_typing_skipped_without_element() {
        let mut controller = PageController::new(PortfolioConfig::default());
        let mut page = MockPage {
            typing_element: false,
            ..MockPage::portfolio()
        };
        controller.start(&mut page);
        assert!(!page.timers.iter().any(|(_, t)| *t == Timer::TypingTick));
    }

    #[test]
    fn test_menu_toggle_and_idempotent_close() {
        let (mut controller, mut page) = started();
        controller.on_toggle_click(&mut page);
        assert!(page.menu_open);
        assert!(controller.menu_open());

        controller.on_outside_click(&mut page);
        assert!(!page.menu_open);
        assert_eq!(page.menu_updates, 2);

        controller.on_outside_click(&mut page);
        controller.close_menu(&mut page);
        assert_eq!(page.menu_updates, 2);
    }

    #[test]
    fn test_nav_click_scrolls_and_closes_menu() {
        let (mut controller, mut page) = started();
        controller.on_toggle_click(&mut page);
        assert!(controller.on_nav_click(&mut page, "#about"));
        assert_eq!(page.scrolls, vec![720.0]);
        assert!(!page.menu_open);

        assert!(!controller.on_nav_click(&mut page, "/resume.pdf"));
        assert_eq!(page.scrolls.len(), 1);
    }

    #[test]
    fn test_scroll_to_unknown_section_is_noop() {
        let (mut controller, mut page) = started();
        assert!(!controller.scroll_to_section(&mut page, "blog"));
        assert!(page.scrolls.is_empty());
        assert!(controller.scroll_to_section(&mut page, "home"));
        assert_eq!(page.scrolls, vec![0.0]);
    }

    #[test]
    fn test_keyboard_shortcuts() {
        let (mut controller, mut page) = started();
        assert!(controller.on_keydown(&mut page, &KeyInput::new("3", true, false)));
        assert_eq!(page.scrolls, vec![1400.0 - 80.0]);

        assert!(!controller.on_keydown(&mut page, &KeyInput::new("3", false, false)));
        assert!(!controller.on_keydown(&mut page, &KeyInput::new("9", false, true)));
        assert_eq!(page.scrolls.len(), 1);

        assert!(!controller.on_keydown(&mut page, &KeyInput::new("Tab", false, false)));
        assert!(page.keyboard_navigation);
        controller.on_mousedown(&mut page);
        assert!(!page.keyboard_navigation);
    }

    #[test]
    fn test_skill_bars_fill_once() {
        let (mut controller, mut page) = started();
        let skills = RevealEntry {
            index: 4,
            id: Some("skills".to_string()),
            intersecting: true,
        };
        controller.on_intersection(&mut page, std::slice::from_ref(&skills));
        assert!(page.revealed.contains(&4));
        assert!(controller.skills_animated());

        advance(&mut controller, &mut page, ms(300));
        assert_eq!(page.skill_widths.get(&0), Some(&95.0));
        assert_eq!(page.skill_widths.get(&1), None);
        advance(&mut controller, &mut page, ms(200));
        assert_eq!(page.skill_widths.get(&1), Some(&80.0));
        assert_eq!(page.skill_widths.get(&2), Some(&65.0));

        // leave and re-enter the viewport
        page.skill_widths.clear();
        let left = RevealEntry {
            intersecting: false,
            ..skills.clone()
        };
        controller.on_intersection(&mut page, &[left]);
        controller.on_intersection(&mut page, &[skills]);
        advance(&mut controller, &mut page, ms(5000));
        assert!(page.skill_widths.is_empty());
    }

    #[test]
    fn test_ripple_expires() {
        let (mut controller, mut page) = started();
        let rect = Rect::new(10.0, 10.0, 40.0, 40.0);
        controller.on_social_click(&mut page, 1, &rect, 30.0, 30.0);
        controller.on_social_click(&mut page, 2, &rect, 30.0, 30.0);
        assert_eq!(page.ripples.len(), 2);
        let (target, style) = &page.ripples[&RippleId(0)];
        assert_eq!(*target, 1);
        assert!(style.contains("left: 0px; top: 0px;"));

        advance(&mut controller, &mut page, ms(599));
        assert_eq!(page.ripples.len(), 2);
        advance(&mut controller, &mut page, ms(1));
        assert!(page.ripples.is_empty());
    }

    #[test]
    fn test_contact_hover() {
        let (mut controller, mut page) = started();
        controller.on_contact_hover(&mut page, 0, true);
        assert!(page.contact_shifted.contains(&0));
        controller.on_contact_hover(&mut page, 0, false);
        assert!(page.contact_shifted.is_empty());
    }
}
