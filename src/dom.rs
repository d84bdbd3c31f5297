//! Binds [`PageController`] to the live document.
//!
//! The controller and the page share one `Rc<RefCell<_>>`; every listener and
//! timer goes through [`dispatch`], which releases the borrow before handing
//! newly scheduled timers to `set_timeout`. Window and document listeners are
//! attached here; element handlers live on the components and reach the
//! runtime through the `pub` entry points below.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::set_timeout;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, ErrorEvent, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent, Node,
    PerformanceEntry, ScrollBehavior, ScrollToOptions, Window,
};

use crate::portfolio::{
    banner_for_host, KeyInput, Page, PageController, PortfolioConfig, PortfolioError, Progress,
    Rect, RevealEntry, RippleId, SectionBounds, Timer, Viewport, BUILD_TIME, CONFIG_ELEMENT_ID,
    PROGRESS_ATTR, REVEAL_SELECTOR, RIPPLE_KEYFRAMES,
};

struct Runtime {
    controller: PageController,
    page: DomPage,
}

type Shared = Rc<RefCell<Runtime>>;

thread_local! {
    static RUNTIME: OnceCell<Shared> = const { OnceCell::new() };
}

/// [`Page`] over `web-sys`. Elements are looked up once at install.
pub struct DomPage {
    window: Window,
    body: HtmlElement,
    document: Document,
    navbar: Option<HtmlElement>,
    nav_links: Vec<Element>,
    menu_toggle: Option<Element>,
    menu: Option<Element>,
    typing_text: Option<Element>,
    sections: Vec<HtmlElement>,
    reveal_targets: Vec<Element>,
    skill_bars: Vec<HtmlElement>,
    social_links: Vec<HtmlElement>,
    contact_items: Vec<HtmlElement>,
    ripples: HashMap<RippleId, Element>,
    pending: Vec<(Duration, Timer)>,
}

impl DomPage {
    fn new(window: Window, document: Document, body: HtmlElement) -> Self {
        Self {
            navbar: query_one(&document, ".navbar"),
            nav_links: query_all(&document, ".nav-link"),
            menu_toggle: query_one(&document, ".nav-toggle"),
            menu: query_one(&document, ".nav-menu"),
            typing_text: document.get_element_by_id("typing-text"),
            sections: query_all::<HtmlElement>(&document, "section")
                .into_iter()
                .filter(|s| !s.id().is_empty())
                .collect(),
            reveal_targets: query_all(&document, REVEAL_SELECTOR),
            skill_bars: query_all(&document, ".skill-progress"),
            social_links: query_all(&document, ".social-link"),
            contact_items: query_all(&document, ".contact-item"),
            ripples: HashMap::new(),
            pending: Vec::new(),
            window,
            document,
            body,
        }
    }

    fn reveal_entries(&self, config: &PortfolioConfig) -> Vec<RevealEntry> {
        let viewport_height = self.viewport_height();
        self.reveal_targets
            .iter()
            .enumerate()
            .map(|(index, el)| {
                RevealEntry::measure(
                    index,
                    element_id(el),
                    &client_rect(el),
                    viewport_height,
                    &config.reveal,
                )
            })
            .collect()
    }
}

impl Viewport for DomPage {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn sections(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|s| SectionBounds::new(s.id(), s.offset_top() as f64, s.offset_height() as f64))
            .collect()
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }
}

impl Page for DomPage {
    fn has_typing_text(&self) -> bool {
        self.typing_text.is_some()
    }

    fn set_navbar_scrolled(&mut self, scrolled: bool) {
        if let Some(navbar) = &self.navbar {
            let _ = navbar.class_list().toggle_with_force("scrolled", scrolled);
        }
    }

    fn set_navbar_hidden(&mut self, hidden: bool) {
        if let Some(navbar) = &self.navbar {
            let transform = if hidden {
                "translateY(-100%)"
            } else {
                "translateY(0)"
            };
            let _ = navbar.style().set_property("transform", transform);
        }
    }

    fn set_active_link(&mut self, section: &str) {
        let href = format!("#{section}");
        for link in &self.nav_links {
            let active =
                !section.is_empty() && link.get_attribute("href").as_deref() == Some(href.as_str());
            let _ = link.class_list().toggle_with_force("active", active);
        }
    }

    fn set_menu_open(&mut self, open: bool) {
        for el in self.menu.iter().chain(self.menu_toggle.iter()) {
            let _ = el.class_list().toggle_with_force("active", open);
        }
        let style = self.body.style();
        if open {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }

    fn set_typing_text(&mut self, text: &str) {
        if let Some(el) = &self.typing_text {
            el.set_text_content(Some(text));
        }
    }

    fn reveal(&mut self, index: usize) {
        if let Some(el) = self.reveal_targets.get(index) {
            let _ = el.class_list().add_1("animate-in");
        }
    }

    fn skill_bar_targets(&self) -> Vec<Option<String>> {
        self.skill_bars
            .iter()
            .map(|bar| bar.get_attribute(PROGRESS_ATTR))
            .collect()
    }

    fn set_skill_bar_width(&mut self, index: usize, progress: Progress) {
        if let Some(bar) = self.skill_bars.get(index) {
            let _ = bar.style().set_property("width", &progress.css_width());
        }
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn show_ripple(&mut self, id: RippleId, target: usize, style: &str) {
        let Some(link) = self.social_links.get(target) else {
            return;
        };
        let ripple = match self.document.create_element("span") {
            Ok(el) => el,
            Err(e) => {
                log::warn!("couldn't create ripple: {e:?}");
                return;
            }
        };
        let _ = ripple.set_attribute("style", style);
        let link_style = link.style();
        let _ = link_style.set_property("position", "relative");
        let _ = link_style.set_property("overflow", "hidden");
        if link.append_child(&ripple).is_ok() {
            self.ripples.insert(id, ripple);
        }
    }

    fn remove_ripple(&mut self, id: RippleId) {
        if let Some(ripple) = self.ripples.remove(&id) {
            ripple.remove();
        }
    }

    fn set_contact_shifted(&mut self, index: usize, shifted: bool) {
        if let Some(item) = self.contact_items.get(index) {
            let transform = if shifted {
                "translateX(8px)"
            } else {
                "translateX(0)"
            };
            let _ = item.style().set_property("transform", transform);
        }
    }

    fn set_keyboard_navigation(&mut self, active: bool) {
        let _ = self
            .body
            .class_list()
            .toggle_with_force("keyboard-navigation", active);
    }

    fn mark_loaded(&mut self) {
        let _ = self.body.class_list().add_1("loaded");
    }

    fn schedule(&mut self, delay: Duration, timer: Timer) {
        self.pending.push((delay, timer));
    }
}

/// Run `f` against the shared runtime, then arm any timers it scheduled.
fn dispatch<R>(runtime: &Shared, f: impl FnOnce(&mut PageController, &mut DomPage) -> R) -> R {
    let (result, pending) = {
        let mut rt = runtime.borrow_mut();
        let Runtime { controller, page } = &mut *rt;
        let result = f(controller, page);
        (result, std::mem::take(&mut page.pending))
    };
    arm_timers(runtime, pending);
    result
}

fn arm_timers(runtime: &Shared, pending: Vec<(Duration, Timer)>) {
    for (delay, timer) in pending {
        let runtime = Rc::clone(runtime);
        set_timeout(move || fire(&runtime, timer), delay);
    }
}

fn fire(runtime: &Shared, timer: Timer) {
    dispatch(runtime, |c, p| c.on_timer(p, timer));
}

/// Dispatch into the installed runtime; `None` before [`install`] succeeds.
fn with_runtime<R>(f: impl FnOnce(&mut PageController, &mut DomPage) -> R) -> Option<R> {
    let runtime = RUNTIME.with(|cell| cell.get().cloned())?;
    Some(dispatch(&runtime, f))
}

pub fn nav_click(ev: &MouseEvent, href: &str) {
    if with_runtime(|c, p| c.on_nav_click(p, href)).unwrap_or(false) {
        ev.prevent_default();
    }
}

pub fn toggle_menu() {
    with_runtime(|c, p| c.on_toggle_click(p));
}

pub fn social_click(ev: &MouseEvent, index: usize) {
    let Some(link) = ev
        .current_target()
        .and_then(|t| t.dyn_into::<Element>().ok())
    else {
        return;
    };
    let rect = client_rect(&link);
    let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
    with_runtime(|c, p| c.on_social_click(p, index, &rect, x, y));
}

pub fn contact_hover(index: usize, entered: bool) {
    with_runtime(|c, p| c.on_contact_hover(p, index, entered));
}

/// Wire every page behavior to the current document.
pub fn install() -> Result<(), PortfolioError> {
    let window = web_sys::window().ok_or(PortfolioError::MissingRoot("window"))?;
    let document = window
        .document()
        .ok_or(PortfolioError::MissingRoot("document"))?;
    let body = document.body().ok_or(PortfolioError::MissingRoot("body"))?;

    let config = read_config(&document);
    inject_ripple_keyframes(&document);
    print_banner(&window, &config);

    let runtime: Shared = Rc::new(RefCell::new(Runtime {
        controller: PageController::new(config),
        page: DomPage::new(window.clone(), document.clone(), body),
    }));
    dispatch(&runtime, |c, p| c.start(p));

    wire_scroll(&runtime, &window);
    wire_outside_click(&runtime, &document);
    wire_reveal(&runtime, &window);
    wire_keyboard(&runtime, &document);
    wire_diagnostics(&window);

    if RUNTIME.with(|cell| cell.set(runtime)).is_err() {
        log::warn!("page controller was already installed");
    }

    log::info!("Portfolio initialized");
    Ok(())
}

fn read_config(document: &Document) -> PortfolioConfig {
    let json = match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) => json,
        None => {
            log::warn!("no #{CONFIG_ELEMENT_ID} on page, using defaults");
            return PortfolioConfig::default();
        }
    };
    PortfolioConfig::from_json(&json).unwrap_or_else(|e| {
        log::warn!("{e}, using defaults");
        PortfolioConfig::default()
    })
}

fn wire_scroll(runtime: &Shared, window: &Window) {
    let rt = Rc::clone(runtime);
    listen::<Event>(window, "scroll", move |_| dispatch(&rt, |c, p| c.on_scroll(p)));
}

fn wire_outside_click(runtime: &Shared, document: &Document) {
    let (toggle, menu) = {
        let rt = runtime.borrow();
        match (&rt.page.menu_toggle, &rt.page.menu) {
            (Some(toggle), Some(menu)) => (toggle.clone(), menu.clone()),
            _ => {
                log::debug!("no .nav-toggle/.nav-menu on page, mobile menu disabled");
                return;
            }
        }
    };

    let rt = Rc::clone(runtime);
    listen::<MouseEvent>(document, "click", move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        if !toggle.contains(target.as_ref()) && !menu.contains(target.as_ref()) {
            dispatch(&rt, |c, p| c.on_outside_click(p));
        }
    });
}

fn wire_reveal(runtime: &Shared, window: &Window) {
    let (targets, reveal) = {
        let rt = runtime.borrow();
        (
            rt.page.reveal_targets.clone(),
            rt.controller.config().reveal.clone(),
        )
    };

    let rt = Rc::clone(runtime);
    let observed = targets.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    let node: &Node = &target;
                    let index = observed.iter().position(|el| el.is_same_node(Some(node)))?;
                    Some(RevealEntry {
                        index,
                        id: element_id(&target),
                        intersecting: entry.is_intersecting(),
                    })
                })
                .collect::<Vec<_>>();
            dispatch(&rt, |c, p| c.on_intersection(p, &entries));
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal.threshold));
    options.set_root_margin(&reveal.root_margin());
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for target in &targets {
                observer.observe(target);
            }
            callback.forget();
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable ({e:?}), revealing on scroll");
            let scan = |rt: &Shared| {
                dispatch(rt, |c, p| {
                    let entries = p.reveal_entries(c.config());
                    c.on_intersection(p, &entries);
                })
            };
            scan(runtime);
            let rt = Rc::clone(runtime);
            listen::<Event>(window, "scroll", move |_| scan(&rt));
        }
    }
}

fn wire_keyboard(runtime: &Shared, document: &Document) {
    let rt = Rc::clone(runtime);
    listen::<KeyboardEvent>(document, "keydown", move |ev| {
        let input = KeyInput::new(ev.key(), ev.ctrl_key(), ev.meta_key());
        if dispatch(&rt, |c, p| c.on_keydown(p, &input)) {
            ev.prevent_default();
        }
    });

    let rt = Rc::clone(runtime);
    listen::<MouseEvent>(document, "mousedown", move |_| {
        dispatch(&rt, |c, p| c.on_mousedown(p))
    });
}

fn wire_diagnostics(window: &Window) {
    listen::<ErrorEvent>(window, "error", |ev| {
        log::error!("Portfolio Error: {}", ev.message());
    });

    let perf_window = window.clone();
    listen::<Event>(window, "load", move |_| {
        let Some(performance) = perf_window.performance() else {
            return;
        };
        log::info!("Portfolio loaded in {:.2}ms", performance.now());
        for entry in performance.get_entries_by_type("paint").iter() {
            if let Ok(entry) = entry.dyn_into::<PerformanceEntry>() {
                log::info!("{}: {:.2}ms", entry.name(), entry.start_time());
            }
        }
    });
}

fn print_banner(window: &Window, config: &PortfolioConfig) {
    let host = window.location().hostname().unwrap_or_default();
    let Some(lines) = banner_for_host(&host, &config.dev_hosts, BUILD_TIME) else {
        return;
    };
    for line in lines {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{}", line.text)),
            &JsValue::from_str(line.css),
        );
    }
}

fn inject_ripple_keyframes(document: &Document) {
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        log::debug!("couldn't add ripple keyframes");
        return;
    };
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    let _ = head.append_child(&style);
}

/// Attach a page-lifetime listener; the closure is intentionally leaked.
fn listen<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure =
        Closure::<dyn FnMut(Event)>::new(move |ev: Event| handler(ev.unchecked_into::<E>()));
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("couldn't listen for {event}: {e:?}");
    }
    closure.forget();
}

fn query_one<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

fn element_id(el: &Element) -> Option<String> {
    let id = el.id();
    (!id.is_empty()).then_some(id)
}

fn client_rect(el: &Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}
