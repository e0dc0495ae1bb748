//! Binder controller — owns the wizard, the form model and the page, and
//! turns user-input events into state transitions and render passes.
//!
//! Single-threaded and event-serialized: each event runs to completion
//! before the next is handled, so renders never interleave. Any event that
//! can change preview content ends in one full `update_preview` pass.

use uuid::Uuid;

use crate::models::form::{FieldRef, ResumeForm};
use crate::models::style::TemplateStyle;
use crate::page::Page;
use crate::preview::update_preview;
use crate::wizard::{StepDirection, StepWizard};

/// One user-interaction event, as delivered by the host page.
#[derive(Debug, Clone)]
pub enum Event {
    /// An input's value changed.
    FieldInput { field: FieldRef, value: String },
    PrevClicked,
    NextClicked,
    /// "Add" buttons for the repeatable sections.
    AddEducation,
    AddExperience,
    AddSkill,
    /// Per-group delete controls. No confirmation, no undo.
    RemoveEducation(Uuid),
    RemoveExperience(Uuid),
    RemoveSkill(Uuid),
    /// Enter key anywhere in the document.
    EnterPressed { in_textarea: bool },
}

pub struct BuilderApp {
    pub wizard: StepWizard,
    pub form: ResumeForm,
    pub style: TemplateStyle,
    pub page: Page,
}

impl BuilderApp {
    pub fn new(style: TemplateStyle, page: Page) -> Self {
        BuilderApp {
            wizard: StepWizard::new(),
            form: ResumeForm::default(),
            style,
            page,
        }
    }

    /// Startup sync: makes the displayed state match step 1 and renders the
    /// (empty) preview once, before any user interaction.
    pub fn init(&mut self) {
        self.wizard.sync(&mut self.page);
        self.render();
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::FieldInput { field, value } => {
                self.form.apply_input(field, &value);
                self.render();
            }

            Event::PrevClicked => {
                self.wizard.change_step(StepDirection::Back, &mut self.page);
            }
            Event::NextClicked => {
                self.wizard
                    .change_step(StepDirection::Forward, &mut self.page);
            }
            Event::EnterPressed { in_textarea } => {
                self.wizard.handle_enter(in_textarea, &mut self.page);
            }

            Event::AddEducation => {
                self.form.add_education();
                self.render();
            }
            Event::AddExperience => {
                self.form.add_experience();
                self.render();
            }
            Event::AddSkill => {
                self.form.add_skill();
                self.render();
            }

            Event::RemoveEducation(id) => {
                self.form.remove_education(id);
                self.render();
            }
            Event::RemoveExperience(id) => {
                self.form.remove_experience(id);
                self.render();
            }
            Event::RemoveSkill(id) => {
                self.form.remove_skill(id);
                self.render();
            }
        }
    }

    fn render(&mut self) {
        update_preview(&mut self.page, &self.form, self.style);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ids;
    use crate::preview::sections;

    fn make_app() -> BuilderApp {
        let style = TemplateStyle::Modern;
        let mut app = BuilderApp::new(style, Page::standard(style));
        app.init();
        app
    }

    #[test]
    fn test_init_syncs_wizard_and_preview() {
        let app = make_app();

        assert!(app.page.slot(&ids::step_panel(1)).unwrap().visible);
        for step in 2..=5 {
            assert!(!app.page.slot(&ids::step_panel(step)).unwrap().visible);
        }
        assert_eq!(app.page.slot(ids::PROGRESS_PERCENT).unwrap().text, "20");
        assert_eq!(
            app.page.slot("previewName-modern").unwrap().text,
            sections::NAME_PLACEHOLDER
        );
    }

    #[test]
    fn test_field_input_triggers_rerender() {
        let mut app = make_app();
        app.handle_event(Event::FieldInput {
            field: FieldRef::Name,
            value: "jane doe".to_string(),
        });
        assert_eq!(app.page.slot("previewName-modern").unwrap().text, "JANE DOE");
    }

    #[test]
    fn test_navigation_events_move_wizard() {
        let mut app = make_app();
        app.handle_event(Event::NextClicked);
        assert_eq!(app.wizard.current_step(), 2);
        app.handle_event(Event::PrevClicked);
        assert_eq!(app.wizard.current_step(), 1);
        app.handle_event(Event::PrevClicked); // already at 1, silent no-op
        assert_eq!(app.wizard.current_step(), 1);
    }

    #[test]
    fn test_enter_respects_textarea_focus() {
        let mut app = make_app();
        app.handle_event(Event::EnterPressed { in_textarea: true });
        assert_eq!(app.wizard.current_step(), 1);
        app.handle_event(Event::EnterPressed { in_textarea: false });
        assert_eq!(app.wizard.current_step(), 2);
    }

    #[test]
    fn test_add_and_remove_skill_round_trips_preview() {
        let mut app = make_app();
        let first = app.form.add_skill();
        app.handle_event(Event::FieldInput {
            field: FieldRef::Skill(first),
            value: "Rust".to_string(),
        });
        let before = app.page.slot("skillsList-modern").unwrap().children.clone();

        app.handle_event(Event::AddSkill);
        let second = app.form.skills[1].id;
        app.handle_event(Event::FieldInput {
            field: FieldRef::Skill(second),
            value: "Go".to_string(),
        });
        app.handle_event(Event::RemoveSkill(second));

        assert_eq!(
            app.page.slot("skillsList-modern").unwrap().children,
            before,
            "preview must return to its prior rendered state"
        );
    }

    #[test]
    fn test_input_for_removed_group_is_dropped() {
        let mut app = make_app();
        let id = app.form.add_education();
        app.handle_event(Event::RemoveEducation(id));
        // A late input event for the removed group must not resurrect it.
        app.handle_event(Event::FieldInput {
            field: FieldRef::EducationDegree(id),
            value: "BSc".to_string(),
        });
        assert!(app.form.education.is_empty());
        let slot = app.page.slot("educationList-modern").unwrap();
        assert_eq!(slot.children[0].class, "placeholder");
    }
}
