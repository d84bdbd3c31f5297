/// Modifier state and key of a keydown event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool, meta: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
            meta,
        }
    }
}

/// Section reached by ctrl/cmd + digit, or `None` for any other key.
pub fn shortcut_target<'a>(input: &KeyInput, sections: &'a [String]) -> Option<&'a str> {
    if !(input.ctrl || input.meta) {
        return None;
    }
    let mut chars = input.key.chars();
    let digit = match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10)?,
        _ => return None,
    };
    let index = (digit as usize).checked_sub(1)?;
    sections.get(index).map(String::as_str)
}

/// Tab moves focus from the keyboard, so focus rings should show.
pub fn is_keyboard_navigation(key: &str) -> bool {
    key == "Tab"
}
