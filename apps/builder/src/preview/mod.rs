//! Live preview — projects the form model into the preview slots.
//!
//! `update_preview` is an unconditional full re-render: every sub-pass
//! re-derives its section from the model and overwrites its own slots, so
//! consecutive renders are idempotent and no pass touches a sibling's
//! subtree. There is no diffing and no debouncing; rapid input events mean
//! rapid full renders, each one complete before the next.

pub mod sections;

use crate::models::form::ResumeForm;
use crate::models::style::TemplateStyle;
use crate::page::{ids, Node, Page};
use self::sections::{ContactRender, EducationItem, ExperienceItem};

/// Full preview refresh. Called after every model change.
pub fn update_preview(page: &mut Page, form: &ResumeForm, style: TemplateStyle) {
    project_name(page, form, style);
    project_title(page, form, style);
    project_contact(page, form, style);
    project_education(page, form, style);
    project_experience(page, form, style);
    project_skills(page, form, style);
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

fn project_name(page: &mut Page, form: &ResumeForm, style: TemplateStyle) {
    page.set_text(&ids::preview_name(style), &sections::render_name(form));
}

fn project_title(page: &mut Page, form: &ResumeForm, style: TemplateStyle) {
    let slot = ids::preview_title(style);
    match sections::render_title(form) {
        Some(title) => {
            page.set_text(&slot, &title);
            page.set_visible(&slot, true);
        }
        None => {
            page.set_text(&slot, "");
            page.set_visible(&slot, false);
        }
    }
}

fn project_contact(page: &mut Page, form: &ResumeForm, style: TemplateStyle) {
    match sections::render_contact(form, style) {
        ContactRender::Inline(line) => {
            page.set_text(&ids::preview_contact(style), &line);
        }
        ContactRender::Sidebar {
            email,
            phone,
            location,
            linkedin,
        } => {
            page.set_text(&ids::preview_email(style), &email);
            page.set_text(&ids::preview_phone(style), &phone);
            project_optional_slot(page, &ids::preview_location(style), location);
            project_optional_slot(page, &ids::preview_linkedin(style), linkedin);
        }
    }
}

/// Writes an optional sidebar field: hidden entirely when absent.
fn project_optional_slot(page: &mut Page, slot: &str, value: Option<String>) {
    match value {
        Some(text) => {
            page.set_text(slot, &text);
            page.set_visible(slot, true);
        }
        None => {
            page.set_text(slot, "");
            page.set_visible(slot, false);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lists
// ────────────────────────────────────────────────────────────────────────────

fn project_education(page: &mut Page, form: &ResumeForm, style: TemplateStyle) {
    let items = sections::render_education(form);
    let children = if items.is_empty() {
        vec![placeholder(sections::EDUCATION_PLACEHOLDER)]
    } else {
        items.iter().map(education_node).collect()
    };
    page.replace_children(&ids::education_list(style), children);
}

fn education_node(item: &EducationItem) -> Node {
    let mut lines = Vec::new();
    if let Some(degree) = &item.degree {
        lines.push(Node::new("job-title", degree.clone()));
    }
    if let Some(school_line) = &item.school_line {
        lines.push(Node::new("company-name", school_line.clone()));
    }
    Node::with_children("education-item", lines)
}

fn project_experience(page: &mut Page, form: &ResumeForm, style: TemplateStyle) {
    let items = sections::render_experience(form);
    let children = if items.is_empty() {
        vec![placeholder(sections::EXPERIENCE_PLACEHOLDER)]
    } else {
        items.iter().map(experience_node).collect()
    };
    page.replace_children(&ids::experience_list(style), children);
}

fn experience_node(item: &ExperienceItem) -> Node {
    let mut lines = Vec::new();

    if item.title.is_some() || item.date.is_some() {
        let mut header = Vec::new();
        if let Some(title) = &item.title {
            header.push(Node::new("job-title", title.clone()));
        }
        if let Some(date) = &item.date {
            header.push(Node::new("date-range", date.clone()));
        }
        lines.push(Node::with_children("entry-header", header));
    }

    if let Some(company) = &item.company {
        lines.push(Node::new("company-name", company.clone()));
    }

    for bullet in &item.bullets {
        lines.push(Node::new("bullet-point", bullet.clone()));
    }

    Node::with_children("experience-item", lines)
}

fn project_skills(page: &mut Page, form: &ResumeForm, style: TemplateStyle) {
    let skills = sections::collect_skills(form);
    let children = if skills.is_empty() {
        vec![placeholder(sections::SKILLS_PLACEHOLDER)]
    } else {
        match style {
            // Creative lists skills in the sidebar, one bulleted line each.
            TemplateStyle::Creative => skills
                .iter()
                .map(|skill| Node::new("skill-line", format!("• {skill}")))
                .collect(),
            // Modern and simple wrap them as inline tags.
            _ => {
                let tags = skills
                    .iter()
                    .map(|skill| Node::new("skill-tag", skill.clone()))
                    .collect();
                vec![Node::with_children("skill-tags", tags)]
            }
        }
    };
    page.replace_children(&ids::skills_list(style), children);
}

fn placeholder(text: &str) -> Node {
    Node::new("placeholder", text)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
