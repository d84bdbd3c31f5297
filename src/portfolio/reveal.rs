use std::collections::HashSet;

use super::config::RevealConfig;
use super::viewport::{intersection_ratio, Rect};

/// Selector of every element that animates in on first sight.
pub const REVEAL_SELECTOR: &str = "section, .timeline-item, .project-card, .skills-category";

/// Visibility report for one observed element, identified by its index in
/// the observed list.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealEntry {
    pub index: usize,
    pub id: Option<String>,
    pub intersecting: bool,
}

impl RevealEntry {
    /// Build an entry from measured geometry instead of an observer callback.
    pub fn measure(
        index: usize,
        id: Option<String>,
        rect: &Rect,
        viewport_height: f64,
        config: &RevealConfig,
    ) -> Self {
        let ratio = intersection_ratio(rect, viewport_height, config.bottom_margin);
        Self {
            index,
            id,
            intersecting: ratio > 0.0 && ratio >= config.threshold,
        }
    }
}

/// Outcome of processing a batch of visibility entries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RevealOutcome {
    /// Elements that should receive the `animate-in` marker now.
    pub revealed: Vec<usize>,
    /// The skills section came into view for the first time.
    pub start_skill_bars: bool,
}

/// One-way reveal bookkeeping plus the "skills animated" latch.
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    skills_section: String,
    revealed: HashSet<usize>,
    skills_animated: bool,
}

impl RevealAnimator {
    pub fn new(skills_section: impl Into<String>) -> Self {
        Self {
            skills_section: skills_section.into(),
            revealed: HashSet::new(),
            skills_animated: false,
        }
    }

    pub fn skills_animated(&self) -> bool {
        self.skills_animated
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn observe(&mut self, entries: &[RevealEntry]) -> RevealOutcome {
        let mut outcome = RevealOutcome::default();
        for entry in entries.iter().filter(|e| e.intersecting) {
            if self.revealed.insert(entry.index) {
                outcome.revealed.push(entry.index);
            }
            if entry.id.as_deref() == Some(self.skills_section.as_str()) && !self.skills_animated {
                self.skills_animated = true;
                outcome.start_skill_bars = true;
            }
        }
        outcome
    }
}
