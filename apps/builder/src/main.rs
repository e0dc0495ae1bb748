mod config;
mod errors;
mod models;
mod page;
mod preview;
mod state;
mod wizard;

use std::io::{self, BufRead};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::Config;
use crate::models::form::FieldRef;
use crate::models::style::TemplateStyle;
use crate::page::{ids, Node, Page};
use crate::state::{BuilderApp, Event};
use crate::wizard::TOTAL_STEPS;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));
    info!("Template style: {}", config.template_style.suffix());

    let page = Page::standard(config.template_style);
    let mut app = BuilderApp::new(config.template_style, page);
    app.init();

    print_help();
    print_status(&app);
    run_driver(&mut app)
}

// ────────────────────────────────────────────────────────────────────────────
// Interactive driver
// ────────────────────────────────────────────────────────────────────────────

fn run_driver(app: &mut BuilderApp) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !dispatch(app, line.trim()) {
            break;
        }
        // The host side of the smooth-scroll contract: consume the
        // fire-and-forget request, if any step change raised one.
        if let Some(element) = app.page.take_scroll_request() {
            info!(element = %element, "scrolling into view");
        }
    }
    Ok(())
}

/// Handles one driver line. Returns `false` to quit.
fn dispatch(app: &mut BuilderApp, line: &str) -> bool {
    // An empty line plays the Enter key (never inside a textarea here).
    if line.is_empty() {
        app.handle_event(Event::EnterPressed {
            in_textarea: false,
        });
        print_status(app);
        return true;
    }

    let (cmd, rest) = split_word(line);
    match cmd {
        "quit" | "exit" => return false,
        "help" => print_help(),
        "next" => {
            app.handle_event(Event::NextClicked);
            print_status(app);
        }
        "prev" => {
            app.handle_event(Event::PrevClicked);
            print_status(app);
        }
        "show" => print_preview(app),
        "steps" => print_status(app),
        "dump" => match serde_json::to_string_pretty(&app.form) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("could not serialize form: {e}"),
        },
        "set" => set_command(app, rest),
        "edu" => edu_command(app, rest),
        "exp" => exp_command(app, rest),
        "skill" => skill_command(app, rest),
        other => println!("unknown command '{other}' (try 'help')"),
    }
    true
}

fn set_command(app: &mut BuilderApp, rest: &str) {
    let (field, value) = split_word(rest);
    let field_ref = match field {
        "name" => FieldRef::Name,
        "title" => FieldRef::Title,
        "email" => FieldRef::Email,
        "phone" => FieldRef::Phone,
        "location" => FieldRef::Location,
        "linkedin" => FieldRef::Linkedin,
        other => {
            println!("unknown field '{other}'");
            return;
        }
    };
    app.handle_event(Event::FieldInput {
        field: field_ref,
        value: value.to_string(),
    });
}

fn edu_command(app: &mut BuilderApp, rest: &str) {
    let (first, rest) = split_word(rest);
    match first {
        "add" => {
            app.handle_event(Event::AddEducation);
            println!("education entry {} added", app.form.education.len());
        }
        "rm" => match nth_id(app.form.education.iter().map(|e| e.id), rest) {
            Some(id) => app.handle_event(Event::RemoveEducation(id)),
            None => println!("no such education entry"),
        },
        n => {
            let Some(id) = nth_id(app.form.education.iter().map(|e| e.id), n) else {
                println!("no such education entry");
                return;
            };
            let (field, value) = split_word(rest);
            let field_ref = match field {
                "degree" => FieldRef::EducationDegree(id),
                "school" => FieldRef::EducationSchool(id),
                "year" => FieldRef::EducationYear(id),
                other => {
                    println!("unknown education field '{other}'");
                    return;
                }
            };
            app.handle_event(Event::FieldInput {
                field: field_ref,
                value: value.to_string(),
            });
        }
    }
}

fn exp_command(app: &mut BuilderApp, rest: &str) {
    let (first, rest) = split_word(rest);
    match first {
        "add" => {
            app.handle_event(Event::AddExperience);
            println!("experience entry {} added", app.form.experience.len());
        }
        "rm" => match nth_id(app.form.experience.iter().map(|e| e.id), rest) {
            Some(id) => app.handle_event(Event::RemoveExperience(id)),
            None => println!("no such experience entry"),
        },
        n => {
            let Some(id) = nth_id(app.form.experience.iter().map(|e| e.id), n) else {
                println!("no such experience entry");
                return;
            };
            let (field, value) = split_word(rest);
            let field_ref = match field {
                "title" => FieldRef::ExperienceTitle(id),
                "company" => FieldRef::ExperienceCompany(id),
                "date" => FieldRef::ExperienceDate(id),
                "desc" => FieldRef::ExperienceDescription(id),
                other => {
                    println!("unknown experience field '{other}'");
                    return;
                }
            };
            // Literal "\n" in a desc value starts a new bullet line.
            let value = value.replace("\\n", "\n");
            app.handle_event(Event::FieldInput {
                field: field_ref,
                value,
            });
        }
    }
}

fn skill_command(app: &mut BuilderApp, rest: &str) {
    let (first, rest) = split_word(rest);
    match first {
        "add" => {
            app.handle_event(Event::AddSkill);
            println!("skill field {} added", app.form.skills.len());
        }
        "rm" => match nth_id(app.form.skills.iter().map(|s| s.id), rest) {
            Some(id) => app.handle_event(Event::RemoveSkill(id)),
            None => println!("no such skill field"),
        },
        n => {
            let Some(id) = nth_id(app.form.skills.iter().map(|s| s.id), n) else {
                println!("no such skill field");
                return;
            };
            app.handle_event(Event::FieldInput {
                field: FieldRef::Skill(id),
                value: rest.to_string(),
            });
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

fn print_status(app: &BuilderApp) {
    let wizard = &app.wizard;
    let info = wizard.step_info();
    println!(
        "step {}/{} ({}%): {}",
        wizard.current_step(),
        TOTAL_STEPS,
        wizard.progress_percent(),
        info.title
    );
}

fn print_preview(app: &BuilderApp) {
    let style = app.style;
    let page = &app.page;

    println!("──────── preview ({}) ────────", style.suffix());
    if let Some(slot) = page.slot(&ids::preview_name(style)) {
        println!("{}", slot.text);
    }
    if let Some(slot) = page.slot(&ids::preview_title(style)) {
        if slot.visible && !slot.text.is_empty() {
            println!("{}", slot.text);
        }
    }

    match style {
        TemplateStyle::Creative => {
            for id in [
                ids::preview_email(style),
                ids::preview_phone(style),
                ids::preview_location(style),
                ids::preview_linkedin(style),
            ] {
                if let Some(slot) = page.slot(&id) {
                    if slot.visible && !slot.text.is_empty() {
                        println!("{}", slot.text);
                    }
                }
            }
        }
        _ => {
            if let Some(slot) = page.slot(&ids::preview_contact(style)) {
                println!("{}", slot.text);
            }
        }
    }

    let lists = [
        ("Education", ids::education_list(style)),
        ("Experience", ids::experience_list(style)),
        ("Skills", ids::skills_list(style)),
    ];
    for (label, id) in lists {
        println!("\n{label}:");
        if let Some(slot) = page.slot(&id) {
            for node in &slot.children {
                print_node(node, 1);
            }
        }
    }
    println!("──────────────────────────────");
}

fn print_node(node: &Node, indent: usize) {
    if node.text.is_empty() {
        // Pure container: flatten its children at the same level.
        for child in &node.children {
            print_node(child, indent);
        }
    } else {
        println!("{:width$}{}", "", node.text, width = indent * 2);
    }
}

fn print_help() {
    println!("commands:");
    println!("  next | prev              move between form steps");
    println!("  <empty line>             press Enter (advances a step)");
    println!("  set <field> <value>      name, title, email, phone, location, linkedin");
    println!("  edu add | edu rm <n>     add / remove an education entry");
    println!("  edu <n> <field> <value>  degree, school, year");
    println!("  exp add | exp rm <n>     add / remove an experience entry");
    println!("  exp <n> <field> <value>  title, company, date, desc (\\n for new bullet)");
    println!("  skill add | skill rm <n> add / remove a skill field");
    println!("  skill <n> <value>        comma-separated skills");
    println!("  show | steps | dump      print preview / progress / raw form");
    println!("  quit");
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Splits off the first whitespace-delimited word; the remainder keeps its
/// internal spacing (field values may contain spaces).
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim_start()),
        None => (s, ""),
    }
}

/// Resolves a 1-based driver position to the group's stable id.
fn nth_id(mut ids: impl Iterator<Item = Uuid>, raw: &str) -> Option<Uuid> {
    let position: usize = raw.trim().parse().ok()?;
    ids.nth(position.checked_sub(1)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_word_separates_value_with_spaces() {
        assert_eq!(split_word("set name Jane Doe"), ("set", "name Jane Doe"));
        assert_eq!(split_word("next"), ("next", ""));
        assert_eq!(split_word("  edu  add "), ("edu", "add "));
    }

    #[test]
    fn test_nth_id_is_one_based() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let pool = [a, b];
        assert_eq!(nth_id(pool.iter().copied(), "1"), Some(a));
        assert_eq!(nth_id(pool.iter().copied(), "2"), Some(b));
        assert_eq!(nth_id(pool.iter().copied(), "3"), None);
        assert_eq!(nth_id(pool.iter().copied(), "0"), None);
        assert_eq!(nth_id(pool.iter().copied(), "x"), None);
    }
}
