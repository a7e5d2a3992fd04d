//! Responsive sidebar shell state.
//!
//! DESIGN
//! ======
//! Open/closed is derived from the viewport width; an explicit user action
//! (hamburger, overlay click, tab pick on a narrow screen) records an
//! override that wins until the viewport next crosses the breakpoint.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

/// Tailwind `md` breakpoint, used by the rider profile.
pub const BREAKPOINT_MD: u32 = 768;
/// Tailwind `lg` breakpoint, used by the driver profile.
pub const BREAKPOINT_LG: u32 = 1024;

/// Where a layout switches between narrow and wide, including which side the
/// breakpoint width itself falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    /// Widths at or above the value are wide.
    WideFrom(u32),
    /// Widths up to and including the value are narrow.
    NarrowThrough(u32),
}

impl Breakpoint {
    #[must_use]
    pub fn is_wide(self, width: u32) -> bool {
        match self {
            Self::WideFrom(px) => width >= px,
            Self::NarrowThrough(px) => width > px,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponsiveShell {
    pub breakpoint: Breakpoint,
    pub viewport_width: u32,
    /// Explicit open/closed choice; cleared on breakpoint crossing.
    pub user_override: Option<bool>,
}

impl ResponsiveShell {
    #[must_use]
    pub fn new(breakpoint: Breakpoint, viewport_width: u32) -> Self {
        Self { breakpoint, viewport_width, user_override: None }
    }

    #[must_use]
    pub fn is_wide(&self) -> bool {
        self.breakpoint.is_wide(self.viewport_width)
    }

    #[must_use]
    pub fn is_narrow(&self) -> bool {
        !self.is_wide()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.user_override.unwrap_or_else(|| self.is_wide())
    }

    /// The dimming overlay only shows over an open sidebar on narrow screens.
    #[must_use]
    pub fn shows_overlay(&self) -> bool {
        self.is_open() && self.is_narrow()
    }

    /// Record a new viewport width. Crossing the breakpoint drops any override.
    pub fn set_viewport_width(&mut self, width: u32) {
        let was_wide = self.is_wide();
        self.viewport_width = width;
        if was_wide != self.is_wide() {
            self.user_override = None;
        }
    }

    pub fn toggle(&mut self) {
        self.user_override = Some(!self.is_open());
    }

    pub fn close(&mut self) {
        self.user_override = Some(false);
    }
}
