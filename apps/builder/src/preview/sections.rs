//! Pure section renderers — derive preview content from the form model.
//!
//! Nothing here touches the page; each function maps the current model to a
//! plain value the projection pass writes into slots. Empty input never
//! errors: it yields a placeholder or an omitted line.

use crate::models::form::ResumeForm;
use crate::models::style::TemplateStyle;

pub const NAME_PLACEHOLDER: &str = "YOUR NAME";
pub const EMAIL_PLACEHOLDER: &str = "email@example.com";
pub const PHONE_PLACEHOLDER: &str = "(555) 123-4567";
pub const EDUCATION_PLACEHOLDER: &str = "Your education details will appear here...";
pub const EXPERIENCE_PLACEHOLDER: &str = "Your work experience will appear here...";
pub const SKILLS_PLACEHOLDER: &str = "Your skills will appear here...";

const CONTACT_SEPARATOR: &str = " | ";

// ────────────────────────────────────────────────────────────────────────────
// Header: name / title / contact
// ────────────────────────────────────────────────────────────────────────────

/// Uppercased display name, or the placeholder when the field is blank.
pub fn render_name(form: &ResumeForm) -> String {
    let name = form.name.trim();
    if name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        name.to_uppercase()
    }
}

/// Professional title, verbatim. `None` hides the slot entirely — distinct
/// from showing empty text.
pub fn render_title(form: &ResumeForm) -> Option<String> {
    let title = form.title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Contact block, shaped by the template style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactRender {
    /// One line with present parts joined by a separator, in the fixed order
    /// [email, phone, location?, linkedin?] (modern / simple layouts).
    Inline(String),
    /// One slot per field; location and linkedin are hidden when absent
    /// (creative sidebar layout).
    Sidebar {
        email: String,
        phone: String,
        location: Option<String>,
        linkedin: Option<String>,
    },
}

pub fn render_contact(form: &ResumeForm, style: TemplateStyle) -> ContactRender {
    let email = non_empty(&form.email).unwrap_or_else(|| EMAIL_PLACEHOLDER.to_string());
    let phone = non_empty(&form.phone).unwrap_or_else(|| PHONE_PLACEHOLDER.to_string());
    let location = non_empty(&form.location);
    let linkedin = non_empty(&form.linkedin);

    match style {
        TemplateStyle::Creative => ContactRender::Sidebar {
            email,
            phone,
            location,
            linkedin,
        },
        _ => {
            let mut parts = vec![email, phone];
            parts.extend(location);
            parts.extend(linkedin);
            ContactRender::Inline(parts.join(CONTACT_SEPARATOR))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// One rendered education entry: degree on its own line, school and year
/// combined below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationItem {
    pub degree: Option<String>,
    /// `"school • year"`, or whichever of the two is present.
    pub school_line: Option<String>,
}

/// Entries where degree, school and year are all blank are skipped.
pub fn render_education(form: &ResumeForm) -> Vec<EducationItem> {
    form.education
        .iter()
        .filter_map(|entry| {
            let degree = non_empty(&entry.degree);
            let school = non_empty(&entry.school);
            let year = non_empty(&entry.year);
            if degree.is_none() && school.is_none() && year.is_none() {
                return None;
            }

            let school_line = match (school, year) {
                (Some(school), Some(year)) => Some(format!("{school} • {year}")),
                (Some(school), None) => Some(school),
                (None, Some(year)) => Some(year),
                (None, None) => None,
            };

            Some(EducationItem {
                degree,
                school_line,
            })
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// One rendered experience entry: title and date share a header row, company
/// sits on its own line, the description becomes one bullet per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceItem {
    pub title: Option<String>,
    pub date: Option<String>,
    pub company: Option<String>,
    pub bullets: Vec<String>,
}

/// Entries with all four fields blank are skipped.
pub fn render_experience(form: &ResumeForm) -> Vec<ExperienceItem> {
    form.experience
        .iter()
        .filter_map(|entry| {
            let title = non_empty(&entry.title);
            let company = non_empty(&entry.company);
            let date = non_empty(&entry.date);
            let has_description = !entry.description.trim().is_empty();

            if title.is_none() && company.is_none() && date.is_none() && !has_description {
                return None;
            }

            Some(ExperienceItem {
                title,
                date,
                company,
                bullets: split_bullets(&entry.description),
            })
        })
        .collect()
}

/// Splits a description into bullet lines: blank lines dropped, a leading
/// bullet glyph (`•`, `-`, `*`) and the whitespace after it stripped, the
/// original line order preserved.
pub fn split_bullets(description: &str) -> Vec<String> {
    description
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                None
            } else {
                Some(strip_bullet_glyph(line).to_string())
            }
        })
        .collect()
}

fn strip_bullet_glyph(line: &str) -> &str {
    for glyph in ['•', '-', '*'] {
        if let Some(rest) = line.strip_prefix(glyph) {
            return rest.trim_start();
        }
    }
    line
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Flattens every skill field into one list: split on commas, tokens
/// trimmed, empties dropped. Field order first, then intra-field order.
pub fn collect_skills(form: &ResumeForm) -> Vec<String> {
    form.skills
        .iter()
        .flat_map(|entry| entry.value.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::{EducationEntry, ExperienceEntry, ResumeForm, SkillEntry};

    fn make_education(degree: &str, school: &str, year: &str) -> EducationEntry {
        let mut entry = EducationEntry::new();
        entry.degree = degree.to_string();
        entry.school = school.to_string();
        entry.year = year.to_string();
        entry
    }

    fn make_experience(title: &str, company: &str, date: &str, desc: &str) -> ExperienceEntry {
        let mut entry = ExperienceEntry::new();
        entry.title = title.to_string();
        entry.company = company.to_string();
        entry.date = date.to_string();
        entry.description = desc.to_string();
        entry
    }

    fn make_skill(value: &str) -> SkillEntry {
        let mut entry = SkillEntry::new();
        entry.value = value.to_string();
        entry
    }

    // ── name / title ────────────────────────────────────────────────────────

    #[test]
    fn test_name_is_trimmed_and_uppercased() {
        let mut form = ResumeForm::default();
        form.name = "  jane doe  ".to_string();
        assert_eq!(render_name(&form), "JANE DOE");
    }

    #[test]
    fn test_empty_name_uses_placeholder() {
        let form = ResumeForm::default();
        assert_eq!(render_name(&form), NAME_PLACEHOLDER);
    }

    #[test]
    fn test_title_none_when_blank() {
        let mut form = ResumeForm::default();
        form.title = "   ".to_string();
        assert_eq!(render_title(&form), None);

        form.title = "Product Manager".to_string();
        assert_eq!(render_title(&form).as_deref(), Some("Product Manager"));
    }

    // ── contact ─────────────────────────────────────────────────────────────

    #[test]
    fn test_inline_contact_defaults_email_and_phone() {
        let form = ResumeForm::default();
        let rendered = render_contact(&form, TemplateStyle::Modern);
        assert_eq!(
            rendered,
            ContactRender::Inline(format!("{EMAIL_PLACEHOLDER} | {PHONE_PLACEHOLDER}"))
        );
    }

    #[test]
    fn test_inline_contact_fixed_part_order() {
        let mut form = ResumeForm::default();
        form.email = "jane@example.com".to_string();
        form.phone = "123".to_string();
        form.location = "Berlin".to_string();
        form.linkedin = "linkedin.com/in/jane".to_string();

        let rendered = render_contact(&form, TemplateStyle::Simple);
        assert_eq!(
            rendered,
            ContactRender::Inline(
                "jane@example.com | 123 | Berlin | linkedin.com/in/jane".to_string()
            )
        );
    }

    #[test]
    fn test_inline_contact_skips_absent_optional_parts() {
        let mut form = ResumeForm::default();
        form.email = "jane@example.com".to_string();
        form.phone = "123".to_string();
        form.linkedin = "linkedin.com/in/jane".to_string();

        let ContactRender::Inline(line) = render_contact(&form, TemplateStyle::Modern) else {
            panic!("modern style must render inline");
        };
        assert_eq!(line, "jane@example.com | 123 | linkedin.com/in/jane");
    }

    #[test]
    fn test_creative_contact_renders_sidebar() {
        let mut form = ResumeForm::default();
        form.location = "Berlin".to_string();

        let rendered = render_contact(&form, TemplateStyle::Creative);
        assert_eq!(
            rendered,
            ContactRender::Sidebar {
                email: EMAIL_PLACEHOLDER.to_string(),
                phone: PHONE_PLACEHOLDER.to_string(),
                location: Some("Berlin".to_string()),
                linkedin: None,
            }
        );
    }

    // ── education ───────────────────────────────────────────────────────────

    #[test]
    fn test_education_skips_empty_entries() {
        let mut form = ResumeForm::default();
        form.education.push(make_education("BSc", "MIT", "2020"));
        form.education.push(make_education("", "", ""));

        let items = render_education(&form);
        assert_eq!(items.len(), 1, "empty entry must be skipped");
        assert_eq!(items[0].degree.as_deref(), Some("BSc"));
        assert_eq!(items[0].school_line.as_deref(), Some("MIT • 2020"));
    }

    #[test]
    fn test_education_school_line_partial_fields() {
        let mut form = ResumeForm::default();
        form.education.push(make_education("", "MIT", ""));
        form.education.push(make_education("", "", "2020"));
        form.education.push(make_education("BSc", "", ""));

        let items = render_education(&form);
        assert_eq!(items[0].school_line.as_deref(), Some("MIT"));
        assert_eq!(items[1].school_line.as_deref(), Some("2020"));
        assert_eq!(items[2].school_line, None);
        assert_eq!(items[2].degree.as_deref(), Some("BSc"));
    }

    #[test]
    fn test_education_empty_form_renders_nothing() {
        assert!(render_education(&ResumeForm::default()).is_empty());
    }

    // ── experience ──────────────────────────────────────────────────────────

    #[test]
    fn test_experience_bullets_strip_glyphs_and_blank_lines() {
        let mut form = ResumeForm::default();
        form.experience
            .push(make_experience("", "", "", "• Led team\n\nImproved X"));

        let items = render_experience(&form);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].bullets, vec!["Led team", "Improved X"]);
    }

    #[test]
    fn test_experience_all_blank_entry_skipped() {
        let mut form = ResumeForm::default();
        form.experience.push(make_experience("", "", "", "  \n  "));
        assert!(render_experience(&form).is_empty());
    }

    #[test]
    fn test_experience_header_fields_independent() {
        let mut form = ResumeForm::default();
        form.experience
            .push(make_experience("Engineer", "", "2020 - 2022", ""));

        let items = render_experience(&form);
        assert_eq!(items[0].title.as_deref(), Some("Engineer"));
        assert_eq!(items[0].date.as_deref(), Some("2020 - 2022"));
        assert_eq!(items[0].company, None);
        assert!(items[0].bullets.is_empty());
    }

    #[test]
    fn test_split_bullets_all_glyph_variants() {
        let bullets = split_bullets("• one\n- two\n* three\nfour");
        assert_eq!(bullets, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_split_bullets_glyph_without_space() {
        // The glyph is stripped even with no whitespace after it.
        assert_eq!(split_bullets("-Led team"), vec!["Led team"]);
    }

    #[test]
    fn test_split_bullets_preserves_order() {
        let bullets = split_bullets("b\na\nc");
        assert_eq!(bullets, vec!["b", "a", "c"]);
    }

    // ── skills ──────────────────────────────────────────────────────────────

    #[test]
    fn test_skills_split_trim_and_concat_in_order() {
        let mut form = ResumeForm::default();
        form.skills.push(make_skill("Go, Rust"));
        form.skills.push(make_skill("Leadership"));
        assert_eq!(collect_skills(&form), vec!["Go", "Rust", "Leadership"]);
    }

    #[test]
    fn test_skills_drop_empty_tokens() {
        let mut form = ResumeForm::default();
        form.skills.push(make_skill(" , Rust, ,"));
        form.skills.push(make_skill("   "));
        assert_eq!(collect_skills(&form), vec!["Rust"]);
    }

    #[test]
    fn test_skills_empty_form_is_empty() {
        assert!(collect_skills(&ResumeForm::default()).is_empty());
    }
}
