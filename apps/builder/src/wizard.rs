//! Step wizard — drives which of the five form panels is visible and keeps
//! the progress UI in sync.
//!
//! States are the integers 1..=5. The only transition is `change_step` by
//! ±1: no skipping, no wraparound, no terminal state (submission belongs to
//! the host). Out-of-range requests fail silently.

use crate::page::{ids, Page, StepMarker};

pub const TOTAL_STEPS: u8 = 5;

/// Title and helper text shown above the form for each step.
#[derive(Debug, Clone, Copy)]
pub struct StepInfo {
    pub title: &'static str,
    pub description: &'static str,
}

pub static STEPS: [StepInfo; TOTAL_STEPS as usize] = [
    StepInfo {
        title: "Personal Information",
        description: "Let's start with your personal information",
    },
    StepInfo {
        title: "Contact Details",
        description: "How can employers reach you?",
    },
    StepInfo {
        title: "Education",
        description: "Tell us about your educational background",
    },
    StepInfo {
        title: "Work Experience",
        description: "Share your work experience",
    },
    StepInfo {
        title: "Skills & Expertise",
        description: "What are your key skills?",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Back,
    Forward,
}

impl StepDirection {
    fn delta(self) -> i8 {
        match self {
            StepDirection::Back => -1,
            StepDirection::Forward => 1,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wizard
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct StepWizard {
    current_step: u8,
}

impl StepWizard {
    pub fn new() -> Self {
        StepWizard { current_step: 1 }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == TOTAL_STEPS
    }

    pub fn step_info(&self) -> &'static StepInfo {
        &STEPS[(self.current_step - 1) as usize]
    }

    pub fn progress_percent(&self) -> u8 {
        ((self.current_step as f32 / TOTAL_STEPS as f32) * 100.0).round() as u8
    }

    /// Moves one step back or forward. Returns `false` without touching any
    /// state when the target step would leave `1..=TOTAL_STEPS`.
    ///
    /// On success: swaps panel visibility, refreshes the progress indicator,
    /// step title/description and navigation buttons, then asks the host to
    /// scroll the form back into view.
    pub fn change_step(&mut self, direction: StepDirection, page: &mut Page) -> bool {
        let target = self.current_step as i8 + direction.delta();
        if target < 1 || target > TOTAL_STEPS as i8 {
            return false;
        }

        page.set_visible(&ids::step_panel(self.current_step), false);
        self.current_step = target as u8;
        page.set_visible(&ids::step_panel(self.current_step), true);

        self.update_progress_indicator(page);
        self.update_step_description(page);
        self.update_navigation_buttons(page);

        page.request_scroll(ids::RESUME_FORM);
        true
    }

    /// Keyboard shortcut: Enter advances one step, unless focus is inside a
    /// textarea or the wizard is already on the last step.
    pub fn handle_enter(&mut self, in_textarea: bool, page: &mut Page) -> bool {
        if in_textarea || self.is_last_step() {
            return false;
        }
        self.change_step(StepDirection::Forward, page)
    }

    /// Writes the step counter, percentage text, bar width and the per-step
    /// label markers. Markers are mutually exclusive: every label is exactly
    /// one of Completed / Active / Pending.
    pub fn update_progress_indicator(&self, page: &mut Page) {
        page.set_text(ids::CURRENT_STEP, &self.current_step.to_string());

        let pct = self.progress_percent();
        page.set_text(ids::PROGRESS_PERCENT, &pct.to_string());
        page.set_width_pct(ids::PROGRESS_BAR, pct);

        for step in 1..=TOTAL_STEPS {
            let marker = if step < self.current_step {
                StepMarker::Completed
            } else if step == self.current_step {
                StepMarker::Active
            } else {
                StepMarker::Pending
            };
            page.set_marker(&ids::step_label(step), marker);
        }
    }

    pub fn update_step_description(&self, page: &mut Page) {
        let info = self.step_info();
        page.set_text(ids::STEP_TITLE, info.title);
        page.set_text(ids::STEP_DESCRIPTION, info.description);
    }

    /// Previous is disabled on the first step; the last step swaps Next for
    /// Submit.
    pub fn update_navigation_buttons(&self, page: &mut Page) {
        page.set_enabled(ids::PREV_BTN, self.current_step != 1);

        let last = self.is_last_step();
        page.set_visible(ids::NEXT_BTN, !last);
        page.set_visible(ids::SUBMIT_BTN, last);
    }

    /// Full startup sync: panel visibility plus all indicator UI, so the
    /// displayed state matches the current step before any interaction.
    pub fn sync(&self, page: &mut Page) {
        for step in 1..=TOTAL_STEPS {
            page.set_visible(&ids::step_panel(step), step == self.current_step);
        }
        self.update_progress_indicator(page);
        self.update_step_description(page);
        self.update_navigation_buttons(page);
    }
}

impl Default for StepWizard {
    fn default() -> Self {
        StepWizard::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
