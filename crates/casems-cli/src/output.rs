//! Terminal rendering helpers.

use casems_core::case::{Case, CaseStatus};
use casems_core::notification::{Notification, Notifier};
use casems_infrastructure::{RecordingNotifier, TracingNotifier};
use colored::Colorize;

/// Notifier for the command line: logs each notification and keeps it
/// until the command finishes, then [`ConsoleNotifier::flush`] prints it.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    recorder: RecordingNotifier,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints and clears everything raised so far.
    pub fn flush(&self) {
        for notification in self.recorder.drain() {
            println!("{}", render_notification(&notification));
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        TracingNotifier.notify(notification.clone());
        self.recorder.notify(notification);
    }
}

pub fn render_notification(notification: &Notification) -> String {
    let title = if notification.is_destructive() {
        format!("✗ {}", notification.title).red().bold()
    } else {
        format!("✓ {}", notification.title).green().bold()
    };
    format!("{} {}", title, notification.description.dimmed())
}

pub fn status_label(status: CaseStatus) -> String {
    let label = status.to_string();
    match status {
        CaseStatus::Open => label.blue().to_string(),
        CaseStatus::InProgress => label.yellow().to_string(),
        CaseStatus::Closed => label.dimmed().to_string(),
    }
}

/// One line per case: id, status, category and title.
pub fn print_case_row(case: &Case) {
    println!(
        "{:<38} {:<12} {:<20} {}",
        case.id.cyan(),
        status_label(case.status),
        case.category,
        case.title.bold()
    );
}

pub fn print_case_detail(case: &Case) {
    println!("{}", case.title.bold());
    println!("  {} {}", "id:".dimmed(), case.id);
    println!("  {} {}", "category:".dimmed(), case.category);
    println!("  {} {}", "status:".dimmed(), status_label(case.status));
    println!("  {} {}", "created:".dimmed(), case.created_at.to_rfc3339());
    println!("  {} {}", "updated:".dimmed(), case.updated_at.to_rfc3339());
    if !case.tags.is_empty() {
        println!("  {} {}", "tags:".dimmed(), case.tags.join(", "));
    }
    println!();
    println!("{}", case.description);
    if !case.content.is_empty() {
        println!();
        println!("{}", case.content);
    }
}
