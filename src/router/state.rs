//! View-state snapshot and its transitions.

use crate::domain::{NavSection, PredictionType};

/// Immutable snapshot of what the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_section: NavSection,
    pub selected_prediction: Option<PredictionType>,
}

/// A user-driven state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Navigate(NavSection),
    SelectPrediction(Option<PredictionType>),
}

impl ViewState {
    /// Snapshot with a different active section.
    ///
    /// The selected prediction is carried over untouched.
    #[must_use]
    pub fn set_active_section(self, section: NavSection) -> Self {
        Self {
            active_section: section,
            ..self
        }
    }

    /// Snapshot with a different prediction choice. Any value is accepted.
    #[must_use]
    pub fn set_selected_prediction(self, option: Option<PredictionType>) -> Self {
        Self {
            selected_prediction: option,
            ..self
        }
    }

    #[must_use]
    pub fn apply(self, action: ViewAction) -> Self {
        match action {
            ViewAction::Navigate(section) => self.set_active_section(section),
            ViewAction::SelectPrediction(option) => self.set_selected_prediction(option),
        }
    }
}
