use std::time::Duration;

use super::error::PortfolioError;

/// Attribute on `.skill-progress` holding the fill target.
pub const PROGRESS_ATTR: &str = "data-progress";

/// A fill percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress(f64);

impl Progress {
    pub fn percent(self) -> f64 {
        self.0
    }

    /// CSS width value, e.g. `85%`.
    pub fn css_width(self) -> String {
        format!("{}%", self.0)
    }
}

impl TryFrom<&str> for Progress {
    type Error = PortfolioError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let parsed = value
            .trim()
            .parse::<f64>()
            .map_err(|_| PortfolioError::InvalidProgress(value.to_string()))?;
        if !(0.0..=100.0).contains(&parsed) {
            return Err(PortfolioError::InvalidProgress(value.to_string()));
        }
        Ok(Self(parsed))
    }
}

/// A single scheduled bar fill.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFill {
    pub index: usize,
    pub progress: Progress,
    pub delay: Duration,
}

/// Staggered fills for every bar, in document order. Bars with an unreadable
/// target are skipped but still occupy their stagger slot.
pub fn plan_fills(targets: &[Option<String>], stagger: Duration) -> Vec<BarFill> {
    targets
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let raw = match raw {
                Some(raw) => raw,
                None => {
                    log::warn!("skill bar {index} has no {PROGRESS_ATTR}");
                    return None;
                }
            };
            match Progress::try_from(raw.as_str()) {
                Ok(progress) => Some(BarFill {
                    index,
                    progress,
                    delay: stagger * index as u32,
                }),
                Err(e) => {
                    log::warn!("skipping skill bar {index}: {e}");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_parsing() {
        assert_eq!(Progress::try_from("85").unwrap().percent(), 85.0);
        assert_eq!(Progress::try_from(" 42.5 ").unwrap().css_width(), "42.5%");
        assert_eq!(Progress::try_from("100").unwrap().css_width(), "100%");
        assert!(Progress::try_from("101").is_err());
        assert!(Progress::try_from("-1").is_err());
        assert!(Progress::try_from("lots").is_err());
        assert!(Progress::try_from("NaN").is_err());
    }

    #[test]
    fn test_plan_staggers_by_index() {
        let targets = vec![
            Some("90".to_string()),
            None,
            Some("oops".to_string()),
            Some("70".to_string()),
        ];
        let fills = plan_fills(&targets, Duration::from_millis(100));
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].index, 0);
        assert_eq!(fills[0].delay, Duration::ZERO);
        assert_eq!(fills[1].index, 3);
        assert_eq!(fills[1].delay, Duration::from_millis(300));
        assert_eq!(fills[1].progress.css_width(), "70%");
    }
}
