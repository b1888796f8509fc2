//! Platform-agnostic keyboard events.
//!
//! Native builds receive crossterm key events and web builds receive ratzilla
//! key events; both are converted to [`AppKeyEvent`] before reaching the
//! components, so the form and table handle keys the same way everywhere.

#[cfg(feature = "native")]
pub use crossterm::event::KeyCode;

#[cfg(feature = "web")]
pub use ratzilla::event::KeyCode;

#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    /// A key press without modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn with_ctrl(code: KeyCode) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(code)
        }
    }

    /// Shift alone is allowed, since terminals report it for uppercase letters.
    pub fn no_modifiers(&self) -> bool {
        !self.ctrl && !self.alt
    }

    /// Shift+Tab. Native terminals report it as BackTab; browsers as Tab with shift.
    #[cfg(feature = "native")]
    pub fn is_back_tab(&self) -> bool {
        matches!(self.code, KeyCode::BackTab)
    }

    #[cfg(feature = "web")]
    pub fn is_back_tab(&self) -> bool {
        matches!(self.code, KeyCode::Tab) && self.shift
    }

    /// `q` or Ctrl+C.
    pub fn is_quit(&self) -> bool {
        match self.code {
            KeyCode::Char('q') => self.no_modifiers(),
            KeyCode::Char('c') => self.ctrl,
            _ => false,
        }
    }

    /// `s` or Ctrl+S.
    pub fn is_export(&self) -> bool {
        matches!(self.code, KeyCode::Char('s') | KeyCode::Char('S')) && !self.alt
    }
}

#[cfg(feature = "native")]
impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

#[cfg(feature = "web")]
impl From<&ratzilla::event::KeyEvent> for AppKeyEvent {
    fn from(event: &ratzilla::event::KeyEvent) -> Self {
        Self {
            code: event.code.clone(),
            ctrl: event.ctrl,
            alt: event.alt,
            shift: event.shift,
        }
    }
}
