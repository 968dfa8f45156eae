//! UI presentation state: transient toast notifications.
//!
//! Messages starting with `[+]` render as success, `[x]` as error.

// ============================================================================
// Toast
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    message: String,
    ticks_remaining: u16,
}

impl Toast {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// UI State
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    toast: Option<Toast>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast for `ticks` UI ticks, replacing any visible toast.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u16) {
        self.toast = Some(Toast {
            message: message.into(),
            ticks_remaining: ticks,
        });
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Count down the visible toast, hiding it when it expires.
    pub fn tick(&mut self) {
        if let Some(toast) = &mut self.toast {
            toast.ticks_remaining = toast.ticks_remaining.saturating_sub(1);
            if toast.ticks_remaining == 0 {
                self.toast = None;
            }
        }
    }
}
