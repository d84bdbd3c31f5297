use std::time::Duration;

use super::config::TypingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PausedFull,
    Deleting,
    PausedEmpty,
}

/// One rendered step of the typing animation.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingFrame {
    pub text: String,
    /// Time until the next tick should run.
    pub next: Duration,
}

/// Endless type / pause / delete / pause loop over a list of roles.
///
/// Character counts are in `char`s so multi-byte roles never split a code
/// point.
#[derive(Debug, Clone)]
pub struct TypingCycle {
    roles: Vec<String>,
    timing: TypingConfig,
    role_index: usize,
    chars: usize,
    phase: TypingPhase,
}

impl TypingCycle {
    /// Returns `None` when there are no roles to cycle through.
    pub fn new(roles: Vec<String>, timing: TypingConfig) -> Option<Self> {
        if roles.is_empty() {
            return None;
        }
        Some(Self {
            roles,
            timing,
            role_index: 0,
            chars: 0,
            phase: TypingPhase::Typing,
        })
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.timing.start_delay_ms)
    }

    /// Currently rendered prefix of the current role.
    pub fn text(&self) -> String {
        self.current_role().chars().take(self.chars).collect()
    }

    fn current_role(&self) -> &str {
        &self.roles[self.role_index]
    }

    fn role_len(&self) -> usize {
        self.current_role().chars().count()
    }

    pub fn tick(&mut self) -> TypingFrame {
        let ms = match self.phase {
            TypingPhase::Typing => {
                self.chars = (self.chars + 1).min(self.role_len());
                if self.chars == self.role_len() {
                    self.phase = TypingPhase::PausedFull;
                }
                self.timing.type_interval_ms
            }
            // The completing tick already waited one interval; the rest of
            // the hold is spent here so the role shows for exactly the pause.
            TypingPhase::PausedFull => {
                self.phase = TypingPhase::Deleting;
                self.timing
                    .pause_full_ms
                    .saturating_sub(self.timing.type_interval_ms)
            }
            TypingPhase::Deleting => {
                self.chars = self.chars.saturating_sub(1);
                if self.chars == 0 {
                    self.phase = TypingPhase::PausedEmpty;
                }
                self.timing.delete_interval_ms
            }
            TypingPhase::PausedEmpty => {
                self.role_index = (self.role_index + 1) % self.roles.len();
                self.phase = TypingPhase::Typing;
                self.timing
                    .pause_empty_ms
                    .saturating_sub(self.timing.delete_interval_ms)
            }
        };
        TypingFrame {
            text: self.text(),
            next: Duration::from_millis(ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(roles: &[&str]) -> TypingCycle {
        TypingCycle::new(
            roles.iter().map(|s| s.to_string()).collect(),
            TypingConfig::default(),
        )
        .expect("roles should not be empty")
    }

    #[test]
    fn test_types_full_role_then_pauses() {
        let mut typing = cycle(&["DevOps Engineer", "Backend Developer"]);
        let role = "DevOps Engineer";

        let frame = typing.tick();
        assert_eq!(frame.text, "D");
        assert_eq!(frame.next, Duration::from_millis(100));

        for _ in 1..role.len() {
            typing.tick();
        }
        assert_eq!(typing.text(), role);
        assert_eq!(typing.phase(), TypingPhase::PausedFull);

        // role.len() + 1 ticks: the hold on the full role, minus the
        // interval the completing tick already waited
        let frame = typing.tick();
        assert_eq!(frame.text, role);
        assert_eq!(frame.next, Duration::from_millis(1900));
        assert_eq!(typing.phase(), TypingPhase::Deleting);

        let frame = typing.tick();
        assert_eq!(frame.text, "DevOps Enginee");
        assert_eq!(frame.next, Duration::from_millis(50));
    }

    #[test]
    fn test_deleting_advances_role() {
        let roles = ["ab", "c", "d", "e", "f"];
        let mut typing = cycle(&roles);
        for expected in 1..=roles.len() * 2 {
            let before = typing.role_index();
            let len = roles[before].len();
            // type + hold + delete + hold
            for _ in 0..(len + 1 + len) {
                typing.tick();
            }
            assert_eq!(typing.text(), "");
            assert_eq!(typing.phase(), TypingPhase::PausedEmpty);
            let frame = typing.tick();
            assert_eq!(frame.text, "");
            assert_eq!(frame.next, Duration::from_millis(450));
            assert_eq!(typing.role_index(), expected % roles.len());
            assert_eq!(typing.role_index(), (before + 1) % roles.len());
        }
    }

    /// How long `text` stays on screen from its first appearance.
    fn held(frames: &[(Duration, String)], text: &str) -> Duration {
        let start = frames
            .iter()
            .position(|(_, t)| t == text)
            .expect("text should be shown");
        let (end, _) = frames[start..]
            .iter()
            .find(|(_, t)| t != text)
            .expect("text should be replaced");
        *end - frames[start].0
    }

    #[test]
    fn test_holds_last_exactly_the_pause() {
        let mut typing = cycle(&["ab", "c"]);
        let mut now = Duration::ZERO;
        let mut frames = Vec::new();
        for _ in 0..8 {
            let frame = typing.tick();
            frames.push((now, frame.text));
            now += frame.next;
        }
        assert_eq!(held(&frames, "ab"), Duration::from_millis(2000));
        assert_eq!(held(&frames, ""), Duration::from_millis(500));
    }

    #[test]
    fn test_multibyte_roles_step_by_char() {
        let mut typing = cycle(&["Rüst"]);
        assert_eq!(typing.tick().text, "R");
        assert_eq!(typing.tick().text, "Rü");
    }

    #[test]
    fn test_empty_role_list_has_no_cycle() {
        assert!(TypingCycle::new(vec![], TypingConfig::default()).is_none());
    }
}
