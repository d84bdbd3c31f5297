/// Open/closed state of the mobile navigation overlay.
#[derive(Debug, Default, Clone)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns `false` when it was already closed so callers
    /// can skip re-applying the closed state.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
