use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::PortfolioError;

/// DOM id of the `<script type="application/json">` the server renders the config into.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub roles: Vec<String>,
    /// Section ids reachable with ctrl/cmd + 1..9, in digit order.
    pub shortcut_sections: Vec<String>,
    pub skills_section: String,
    pub nav: NavConfig,
    pub typing: TypingConfig,
    pub reveal: RevealConfig,
    pub ripple: RippleConfig,
    pub loaded_delay_ms: u64,
    /// Host names that suppress the console banner.
    pub dev_hosts: Vec<String>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            roles: [
                "DevOps Engineer",
                "Backend Developer",
                "AWS Solutions Architect",
                "Infrastructure Automation Expert",
                "CI/CD Pipeline Specialist",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            shortcut_sections: [
                "home",
                "about",
                "experience",
                "certifications",
                "skills",
                "projects",
                "contact",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            skills_section: "skills".to_string(),
            nav: NavConfig::default(),
            typing: TypingConfig::default(),
            reveal: RevealConfig::default(),
            ripple: RippleConfig::default(),
            loaded_delay_ms: 100,
            dev_hosts: vec!["localhost".to_string()],
        }
    }
}

impl PortfolioConfig {
    pub fn from_json(json: &str) -> Result<Self, PortfolioError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PortfolioError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> String {
        // plain data with string keys, serialization can't fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), PortfolioError> {
        if self.roles.is_empty() {
            return Err(PortfolioError::InvalidConfig(
                "at least one typing role is required".to_string(),
            ));
        }
        let threshold = self.reveal.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(PortfolioError::InvalidConfig(format!(
                "reveal threshold must be within (0, 1], got {threshold}"
            )));
        }
        let margin = self.reveal.bottom_margin;
        if !(margin.is_finite() && margin >= 0.0) {
            return Err(PortfolioError::InvalidConfig(format!(
                "reveal bottom_margin must be a non-negative length, got {margin}"
            )));
        }
        if self.shortcut_sections.len() > 9 {
            return Err(PortfolioError::InvalidConfig(format!(
                "only digits 1-9 are available for shortcuts, got {} sections",
                self.shortcut_sections.len()
            )));
        }
        Ok(())
    }

    pub fn loaded_delay(&self) -> Duration {
        Duration::from_millis(self.loaded_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Offset past which the navbar gets the `scrolled` marker.
    pub scrolled_threshold: f64,
    /// Offset past which scrolling down hides the navbar.
    pub hide_threshold: f64,
    /// Lookahead subtracted from each section top when picking the active link.
    pub section_bias: f64,
    /// Fixed navbar height cleared by smooth scrolling.
    pub scroll_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            hide_threshold: 100.0,
            section_bias: 100.0,
            scroll_offset: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub start_delay_ms: u64,
    pub type_interval_ms: u64,
    pub delete_interval_ms: u64,
    pub pause_full_ms: u64,
    pub pause_empty_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000,
            type_interval_ms: 100,
            delete_interval_ms: 50,
            pause_full_ms: 2000,
            pause_empty_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction needed to reveal an element.
    pub threshold: f64,
    /// Amount the viewport's bottom edge is pulled up before measuring.
    pub bottom_margin: f64,
    pub skills_delay_ms: u64,
    pub stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
            skills_delay_ms: 300,
            stagger_ms: 100,
        }
    }
}

impl RevealConfig {
    /// `rootMargin` string for an `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub duration_ms: u64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self { duration_ms: 600 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_constants() {
        let config = PortfolioConfig::default();
        assert_eq!(config.roles.len(), 5);
        assert_eq!(config.roles[0], "DevOps Engineer");
        assert_eq!(config.shortcut_sections.len(), 7);
        assert_eq!(config.shortcut_sections[2], "experience");
        assert_eq!(config.nav.scroll_offset, 80.0);
        assert_eq!(config.typing.pause_full_ms, 2000);
        assert_eq!(config.reveal.root_margin(), "0px 0px -50px 0px");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            PortfolioConfig::from_json(r#"{"roles":["Rustacean"],"typing":{"start_delay_ms":0}}"#)
                .expect("partial config should parse");
        assert_eq!(config.roles, vec!["Rustacean".to_string()]);
        assert_eq!(config.typing.start_delay_ms, 0);
        assert_eq!(config.typing.type_interval_ms, 100);
        assert_eq!(config.skills_section, "skills");
    }

    #[test]
    fn test_json_round_trip_through_page_script() {
        let config = PortfolioConfig::default();
        let parsed = PortfolioConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_file() {
        let path =
            std::env::temp_dir().join(format!("portfolio-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"dev_hosts":["localhost","127.0.0.1"]}"#).unwrap();
        let config = PortfolioConfig::from_file(&path).unwrap();
        assert_eq!(config.dev_hosts.len(), 2);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            PortfolioConfig::from_file(&path),
            Err(PortfolioError::ConfigRead(_))
        ));
    }

    #[test]
    fn test_validation_failures() {
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"roles":[]}"#),
            Err(PortfolioError::InvalidConfig(_))
        ));
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"reveal":{"threshold":0.0}}"#),
            Err(PortfolioError::InvalidConfig(_))
        ));
        let err = PortfolioConfig::from_json(r#"{"reveal":{"bottom_margin":-5.0}}"#);
        assert!(matches!(err, Err(PortfolioError::InvalidConfig(_))));
        let sections = (0..10).map(|i| format!("s{i}")).collect::<Vec<_>>();
        let config = PortfolioConfig {
            shortcut_sections: sections,
            ..PortfolioConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(matches!(
            PortfolioConfig::from_json("{not json"),
            Err(PortfolioError::ConfigParse(_))
        ));
    }
}
