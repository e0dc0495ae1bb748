//! In-memory résumé form model — the single source of truth for the preview.
//!
//! The view never stores data; every render pass re-reads this model. The
//! repeatable sections are ordered vectors of field-group records, each with
//! a stable `Uuid` id so removal never needs positional reconciliation.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Field groups
// ────────────────────────────────────────────────────────────────────────────

/// One repeatable education entry (degree / school / year).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub degree: String,
    pub school: String,
    pub year: String,
}

impl EducationEntry {
    pub fn new() -> Self {
        EducationEntry {
            id: Uuid::new_v4(),
            degree: String::new(),
            school: String::new(),
            year: String::new(),
        }
    }
}

/// One repeatable work-experience entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub date: String,
    /// Free text, one achievement per line. Bullet glyphs are stripped at
    /// render time.
    pub description: String,
}

impl ExperienceEntry {
    pub fn new() -> Self {
        ExperienceEntry {
            id: Uuid::new_v4(),
            title: String::new(),
            company: String::new(),
            date: String::new(),
            description: String::new(),
        }
    }
}

/// One repeatable skill input. Holds a comma-separated list of skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: Uuid,
    pub value: String,
}

impl SkillEntry {
    pub fn new() -> Self {
        SkillEntry {
            id: Uuid::new_v4(),
            value: String::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field addressing
// ────────────────────────────────────────────────────────────────────────────

/// Typed address of a single form input. Group fields carry the stable id of
/// the field group they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Linkedin,
    EducationDegree(Uuid),
    EducationSchool(Uuid),
    EducationYear(Uuid),
    ExperienceTitle(Uuid),
    ExperienceCompany(Uuid),
    ExperienceDate(Uuid),
    ExperienceDescription(Uuid),
    Skill(Uuid),
}

// ────────────────────────────────────────────────────────────────────────────
// Form
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeForm {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillEntry>,
}

impl ResumeForm {
    /// Writes one input value into the model. Returns `false` (and leaves the
    /// model untouched) if the referenced field group no longer exists — e.g.
    /// an input event racing a group removal. Never an error.
    pub fn apply_input(&mut self, field: FieldRef, value: &str) -> bool {
        match field {
            FieldRef::Name => self.name = value.to_string(),
            FieldRef::Title => self.title = value.to_string(),
            FieldRef::Email => self.email = value.to_string(),
            FieldRef::Phone => self.phone = value.to_string(),
            FieldRef::Location => self.location = value.to_string(),
            FieldRef::Linkedin => self.linkedin = value.to_string(),

            FieldRef::EducationDegree(id) => {
                return self.with_education(id, |e| e.degree = value.to_string());
            }
            FieldRef::EducationSchool(id) => {
                return self.with_education(id, |e| e.school = value.to_string());
            }
            FieldRef::EducationYear(id) => {
                return self.with_education(id, |e| e.year = value.to_string());
            }

            FieldRef::ExperienceTitle(id) => {
                return self.with_experience(id, |e| e.title = value.to_string());
            }
            FieldRef::ExperienceCompany(id) => {
                return self.with_experience(id, |e| e.company = value.to_string());
            }
            FieldRef::ExperienceDate(id) => {
                return self.with_experience(id, |e| e.date = value.to_string());
            }
            FieldRef::ExperienceDescription(id) => {
                return self.with_experience(id, |e| e.description = value.to_string());
            }

            FieldRef::Skill(id) => {
                if let Some(entry) = self.skills.iter_mut().find(|s| s.id == id) {
                    entry.value = value.to_string();
                    return true;
                }
                debug!(group = %id, "skill group not found, input dropped");
                return false;
            }
        }
        true
    }

    // ── Dynamic field groups ────────────────────────────────────────────────

    /// Appends an empty education group and returns its stable id.
    pub fn add_education(&mut self) -> Uuid {
        let entry = EducationEntry::new();
        let id = entry.id;
        self.education.push(entry);
        id
    }

    /// Appends an empty experience group and returns its stable id.
    pub fn add_experience(&mut self) -> Uuid {
        let entry = ExperienceEntry::new();
        let id = entry.id;
        self.experience.push(entry);
        id
    }

    /// Appends an empty skill group and returns its stable id.
    pub fn add_skill(&mut self) -> Uuid {
        let entry = SkillEntry::new();
        let id = entry.id;
        self.skills.push(entry);
        id
    }

    /// Removes an education group by id. Unknown ids are a silent no-op.
    pub fn remove_education(&mut self, id: Uuid) -> bool {
        let before = self.education.len();
        self.education.retain(|e| e.id != id);
        self.education.len() != before
    }

    /// Removes an experience group by id. Unknown ids are a silent no-op.
    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        let before = self.experience.len();
        self.experience.retain(|e| e.id != id);
        self.experience.len() != before
    }

    /// Removes a skill group by id. Unknown ids are a silent no-op.
    pub fn remove_skill(&mut self, id: Uuid) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s.id != id);
        self.skills.len() != before
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    fn with_education(&mut self, id: Uuid, write: impl FnOnce(&mut EducationEntry)) -> bool {
        match self.education.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                write(entry);
                true
            }
            None => {
                debug!(group = %id, "education group not found, input dropped");
                false
            }
        }
    }

    fn with_experience(&mut self, id: Uuid, write: impl FnOnce(&mut ExperienceEntry)) -> bool {
        match self.experience.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                write(entry);
                true
            }
            None => {
                debug!(group = %id, "experience group not found, input dropped");
                false
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_input_simple_fields() {
        let mut form = ResumeForm::default();
        assert!(form.apply_input(FieldRef::Name, "Jane Doe"));
        assert!(form.apply_input(FieldRef::Linkedin, "linkedin.com/in/jane"));
        assert_eq!(form.name, "Jane Doe");
        assert_eq!(form.linkedin, "linkedin.com/in/jane");
    }

    #[test]
    fn test_apply_input_education_group_by_id() {
        let mut form = ResumeForm::default();
        let id = form.add_education();
        assert!(form.apply_input(FieldRef::EducationDegree(id), "BSc"));
        assert!(form.apply_input(FieldRef::EducationYear(id), "2020"));
        assert_eq!(form.education[0].degree, "BSc");
        assert_eq!(form.education[0].year, "2020");
    }

    #[test]
    fn test_apply_input_unknown_group_is_noop() {
        let mut form = ResumeForm::default();
        form.add_experience();
        let stale = Uuid::new_v4();
        assert!(!form.apply_input(FieldRef::ExperienceTitle(stale), "Engineer"));
        assert_eq!(form.experience[0].title, "", "existing group must be untouched");
    }

    #[test]
    fn test_add_preserves_order() {
        let mut form = ResumeForm::default();
        let first = form.add_skill();
        let second = form.add_skill();
        assert_eq!(form.skills.len(), 2);
        assert_eq!(form.skills[0].id, first);
        assert_eq!(form.skills[1].id, second);
    }

    #[test]
    fn test_remove_middle_group_keeps_siblings() {
        let mut form = ResumeForm::default();
        let a = form.add_education();
        let b = form.add_education();
        let c = form.add_education();
        assert!(form.remove_education(b));
        let remaining: Vec<Uuid> = form.education.iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![a, c]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut form = ResumeForm::default();
        form.add_skill();
        assert!(!form.remove_skill(Uuid::new_v4()));
        assert_eq!(form.skills.len(), 1);
    }

    #[test]
    fn test_form_serializes_round_trip() {
        let mut form = ResumeForm::default();
        form.name = "Jane".to_string();
        let id = form.add_education();
        form.apply_input(FieldRef::EducationSchool(id), "MIT");

        let json = serde_json::to_string(&form).expect("serialize");
        let back: ResumeForm = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.name, "Jane");
        assert_eq!(back.education[0].id, id);
        assert_eq!(back.education[0].school, "MIT");
    }
}
