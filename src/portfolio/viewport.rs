//! Geometry the page behaviors read from the document.
//!
//! Everything here is expressed in CSS pixels of the scrolling document, so
//! the navigation and reveal logic can be exercised with synthetic layouts.

/// Vertical extent of a `<section>` measured from the top of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `offset` falls into `[top - bias, top - bias + height)`.
    pub fn contains(&self, offset: f64, bias: f64) -> bool {
        let start = self.top - bias;
        offset >= start && offset < start + self.height
    }
}

/// Client rect of an element relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Read-only queries against the rendered page.
pub trait Viewport {
    /// Current vertical scroll offset of the document.
    fn scroll_offset(&self) -> f64;
    /// All page sections in document order.
    fn sections(&self) -> Vec<SectionBounds>;
    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;

    /// Document top of the section with `id`, if there is one.
    fn section_top(&self, id: &str) -> Option<f64> {
        self.sections()
            .into_iter()
            .find(|s| s.id == id)
            .map(|s| s.top)
    }
}

/// Fraction of `rect` visible inside a viewport whose bottom edge is pulled up
/// by `bottom_margin`, matching an `IntersectionObserver` with
/// `rootMargin: 0px 0px -<bottom_margin>px 0px`.
///
/// Zero-height elements count as fully visible while their top edge is inside
/// the adjusted viewport.
pub fn intersection_ratio(rect: &Rect, viewport_height: f64, bottom_margin: f64) -> f64 {
    let root_bottom = (viewport_height - bottom_margin).max(0.0);
    if rect.height <= 0.0 {
        return if rect.top >= 0.0 && rect.top <= root_bottom {
            1.0
        } else {
            0.0
        };
    }
    let visible_top = rect.top.max(0.0);
    let visible_bottom = rect.bottom().min(root_bottom);
    let visible = (visible_bottom - visible_top).max(0.0);
    (visible / rect.height).min(1.0)
}
