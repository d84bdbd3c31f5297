use super::config::NavConfig;
use super::viewport::SectionBounds;

/// What a scroll event changed on the navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollUpdate {
    pub scrolled: bool,
    pub hidden: bool,
    /// `Some` only when the active section changed; the inner value is the new
    /// section id, empty when no section contains the offset.
    pub active: Option<String>,
}

/// Tracks the previous scroll offset and the currently highlighted section.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    config: NavConfig,
    last_offset: f64,
    current_section: String,
}

impl ScrollTracker {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            last_offset: 0.0,
            current_section: String::new(),
        }
    }

    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn on_scroll(&mut self, offset: f64, sections: &[SectionBounds]) -> ScrollUpdate {
        let scrolled = offset > self.config.scrolled_threshold;
        let hidden = offset > self.last_offset && offset > self.config.hide_threshold;
        self.last_offset = offset.max(0.0);

        let section = active_section(sections, offset, self.config.section_bias);
        let active = if section != self.current_section {
            self.current_section = section.to_string();
            Some(self.current_section.clone())
        } else {
            None
        };

        ScrollUpdate {
            scrolled,
            hidden,
            active,
        }
    }
}

/// Id of the section whose biased span contains `offset`, or `""`.
/// Later sections win when spans overlap.
pub fn active_section(sections: &[SectionBounds], offset: f64, bias: f64) -> &str {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(offset, bias))
        .map(|s| s.id.as_str())
        .unwrap_or("")
}

/// Target section of an in-page anchor such as `#about`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
