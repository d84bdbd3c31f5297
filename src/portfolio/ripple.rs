use super::viewport::Rect;

/// Keyframes the ripple span animates with; injected into `<head>` once.
pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple {
    from {
        transform: scale(0);
        opacity: 1;
    }
    to {
        transform: scale(2);
        opacity: 0;
    }
}";

/// Identifies a live ripple node until its expiry timer removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RippleId(pub u32);

/// Square ripple placed so its center sits on the click point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// `rect` is the clicked element's client rect, `(x, y)` the click's client
    /// coordinates.
    pub fn at(rect: &Rect, x: f64, y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: x - rect.left - size / 2.0,
            top: y - rect.top - size / 2.0,
        }
    }

    pub fn css(&self, duration_ms: u64) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             background: rgba(72, 187, 120, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple {secs}s ease-out; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
            secs = duration_ms as f64 / 1000.0,
        )
    }
}
