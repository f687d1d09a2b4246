use colored::Colorize;
use userdesk::api::{CmdMessage, MessageLevel};
use userdesk::config::UserdeskConfig;
use userdesk::model::{UserFields, UserRecord, ValidationReport};

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 24;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_users(users: &[UserRecord]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }

    println!(
        "{:<id$} {:<name$} {}",
        "ID".bold(),
        "NAME".bold(),
        "EMAIL".bold(),
        id = ID_WIDTH,
        name = NAME_WIDTH
    );
    for user in users {
        println!(
            "{:<id$} {:<name$} {}",
            user.id.yellow(),
            truncate(&user.name, NAME_WIDTH),
            user.email.dimmed(),
            id = ID_WIDTH,
            name = NAME_WIDTH
        );
    }
}

pub(crate) fn print_user_detail(user: &UserRecord) {
    println!("{} {}", user.id.yellow(), user.name.bold());
    println!("--------------------------------");
    println!("email:    {}", user.email);
    println!("password: {}", mask(&user.password));
}

pub(crate) fn print_report(report: &ValidationReport) {
    let rows = [
        ("name", report.name_valid),
        ("password", report.password_valid),
        ("match", report.passwords_match),
        ("strong", report.strong_password),
        ("valid", report.all_valid),
    ];
    for (label, ok) in rows {
        let mark = if ok { "ok".green() } else { "no".red() };
        println!("{:<10}{}", label, mark);
    }
}

/// Echo of a rejected form, so the user sees what was submitted.
pub(crate) fn print_form(fields: &UserFields) {
    println!();
    println!("{}", "Submitted:".dimmed());
    println!("  name:     {}", fields.name);
    println!("  email:    {}", fields.email);
    println!("  password: {}", mask(&fields.password));
}

pub(crate) fn print_config(config: &UserdeskConfig) {
    for key in UserdeskConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn mask(password: &str) -> String {
    "*".repeat(password.chars().count())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
