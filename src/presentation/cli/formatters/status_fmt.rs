use colored::{ColoredString, Colorize};

use crate::domain::entities::status::StatusUpdate;
use crate::domain::value_objects::severity::Severity;

/// Severity as a bracketed, colored tag.
#[must_use]
pub fn severity_tag(severity: Severity) -> ColoredString {
    let tag = format!("[{severity}]").color(severity.color());
    if severity == Severity::Critical {
        tag.bold()
    } else {
        tag
    }
}

/// Header line printed above the report.
#[must_use]
pub fn status_header(update: &StatusUpdate) -> String {
    format!(
        "{} {} {}",
        severity_tag(update.severity),
        update.title.bold(),
        format!("({})", update.icon).dimmed()
    )
}

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}

pub fn print_status(update: &StatusUpdate) {
    println!("{}", status_header(update));
    println!("{}", update.report);
}
