//! Page abstraction — the externally-supplied document, reduced to its
//! naming contract.
//!
//! The host page registers the elements it actually has; every mutator here
//! is best-effort and silently skips ids that were never registered (logged
//! at debug level). A render pass therefore never fails because the host
//! omitted a slot.

use std::collections::HashMap;

use tracing::debug;

use crate::models::style::TemplateStyle;

// ────────────────────────────────────────────────────────────────────────────
// Element id contract
// ────────────────────────────────────────────────────────────────────────────

/// Fixed element ids shared with the host page. This naming contract is the
/// entire interface between the form core and the surrounding page.
pub mod ids {
    use crate::models::style::TemplateStyle;

    pub const RESUME_FORM: &str = "resumeForm";
    pub const CURRENT_STEP: &str = "currentStep";
    pub const PROGRESS_PERCENT: &str = "progressPercent";
    pub const PROGRESS_BAR: &str = "progressBar";
    pub const STEP_TITLE: &str = "stepTitle";
    pub const STEP_DESCRIPTION: &str = "stepDescription";
    pub const PREV_BTN: &str = "prevBtn";
    pub const NEXT_BTN: &str = "nextBtn";
    pub const SUBMIT_BTN: &str = "submitBtn";

    pub fn step_panel(step: u8) -> String {
        format!("form-step-{step}")
    }

    pub fn step_label(step: u8) -> String {
        format!("label-{step}")
    }

    pub fn preview_name(style: TemplateStyle) -> String {
        format!("previewName-{}", style.suffix())
    }

    pub fn preview_title(style: TemplateStyle) -> String {
        format!("previewTitle-{}", style.suffix())
    }

    /// Inline contact line (modern / simple layouts).
    pub fn preview_contact(style: TemplateStyle) -> String {
        format!("previewContact-{}", style.suffix())
    }

    // Sidebar contact slots (creative layout only).
    pub fn preview_email(style: TemplateStyle) -> String {
        format!("previewEmail-{}", style.suffix())
    }

    pub fn preview_phone(style: TemplateStyle) -> String {
        format!("previewPhone-{}", style.suffix())
    }

    pub fn preview_location(style: TemplateStyle) -> String {
        format!("previewLocation-{}", style.suffix())
    }

    pub fn preview_linkedin(style: TemplateStyle) -> String {
        format!("previewLinkedIn-{}", style.suffix())
    }

    pub fn education_list(style: TemplateStyle) -> String {
        format!("educationList-{}", style.suffix())
    }

    pub fn experience_list(style: TemplateStyle) -> String {
        format!("experienceList-{}", style.suffix())
    }

    pub fn skills_list(style: TemplateStyle) -> String {
        format!("skillsList-{}", style.suffix())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Slots and rendered nodes
// ────────────────────────────────────────────────────────────────────────────

/// Visual state of one progress label. The states are mutually exclusive by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMarker {
    Completed,
    Active,
    Pending,
}

/// A rendered subtree written into a list slot (education/experience/skills).
/// `class` carries the styling hook the host CSS keys on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub class: &'static str,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(class: &'static str, text: impl Into<String>) -> Self {
        Node {
            class,
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(class: &'static str, children: Vec<Node>) -> Self {
        Node {
            class,
            text: String::new(),
            children,
        }
    }
}

/// One addressable element on the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub text: String,
    pub visible: bool,
    pub enabled: bool,
    /// Progress-bar width, percent. Only meaningful for the bar slot.
    pub width_pct: Option<u8>,
    pub marker: Option<StepMarker>,
    pub children: Vec<Node>,
}

impl Default for Slot {
    fn default() -> Self {
        Slot {
            text: String::new(),
            visible: true,
            enabled: true,
            width_pct: None,
            marker: None,
            children: Vec::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct Page {
    slots: HashMap<String, Slot>,
    scroll_target: Option<String>,
}

impl Page {
    pub fn new() -> Self {
        Page::default()
    }

    /// Builds a page carrying the full id contract for one template style,
    /// as rendered by the stock form/preview markup. A host embedding only a
    /// part of the UI registers its own subset instead.
    pub fn standard(style: TemplateStyle) -> Self {
        let mut page = Page::new();

        page.register(ids::RESUME_FORM);
        page.register(ids::CURRENT_STEP);
        page.register(ids::PROGRESS_PERCENT);
        page.register(ids::PROGRESS_BAR);
        page.register(ids::STEP_TITLE);
        page.register(ids::STEP_DESCRIPTION);
        page.register(ids::PREV_BTN);
        page.register(ids::NEXT_BTN);
        page.register(ids::SUBMIT_BTN);

        for step in 1..=crate::wizard::TOTAL_STEPS {
            page.register(&ids::step_panel(step));
            page.register(&ids::step_label(step));
        }

        page.register(&ids::preview_name(style));
        page.register(&ids::preview_title(style));
        if style == TemplateStyle::Creative {
            // Creative renders contact fields in a sidebar, one slot each.
            page.register(&ids::preview_email(style));
            page.register(&ids::preview_phone(style));
            page.register(&ids::preview_location(style));
            page.register(&ids::preview_linkedin(style));
        } else {
            page.register(&ids::preview_contact(style));
        }
        page.register(&ids::education_list(style));
        page.register(&ids::experience_list(style));
        page.register(&ids::skills_list(style));

        page
    }

    /// Declares that the host page contains an element with this id.
    pub fn register(&mut self, id: &str) {
        self.slots.insert(id.to_string(), Slot::default());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// Read access for hosts and tests.
    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots.get(id)
    }

    // ── Best-effort mutators ────────────────────────────────────────────────

    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(slot) = self.slot_mut(id) {
            slot.text = text.to_string();
        }
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(slot) = self.slot_mut(id) {
            slot.visible = visible;
        }
    }

    pub fn set_enabled(&mut self, id: &str, enabled: bool) {
        if let Some(slot) = self.slot_mut(id) {
            slot.enabled = enabled;
        }
    }

    pub fn set_width_pct(&mut self, id: &str, pct: u8) {
        if let Some(slot) = self.slot_mut(id) {
            slot.width_pct = Some(pct);
        }
    }

    pub fn set_marker(&mut self, id: &str, marker: StepMarker) {
        if let Some(slot) = self.slot_mut(id) {
            slot.marker = Some(marker);
        }
    }

    /// Replaces the entire rendered subtree of a list slot.
    pub fn replace_children(&mut self, id: &str, children: Vec<Node>) {
        if let Some(slot) = self.slot_mut(id) {
            slot.children = children;
        }
    }

    // ── Scroll signal ───────────────────────────────────────────────────────

    /// Requests a smooth scroll of the given element. Fire-and-forget: the
    /// host consumes the request whenever it next looks; nothing awaits it.
    pub fn request_scroll(&mut self, id: &str) {
        if self.contains(id) {
            self.scroll_target = Some(id.to_string());
        }
    }

    pub fn take_scroll_request(&mut self) -> Option<String> {
        self.scroll_target.take()
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    fn slot_mut(&mut self, id: &str) -> Option<&mut Slot> {
        let found = self.slots.get_mut(id);
        if found.is_none() {
            debug!(slot = id, "element not on page, skipping");
        }
        found
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
