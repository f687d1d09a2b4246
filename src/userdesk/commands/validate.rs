use crate::commands::{CmdMessage, CmdResult};
use crate::model::UserFields;
use crate::validation::{validate_credentials, STRONG_PASSWORD_MIN_EXCLUSIVE};

pub fn run(fields: &UserFields) -> CmdResult {
    let report = validate_credentials(fields);
    let mut result = CmdResult::default().with_report(report);

    for problem in report.problems() {
        result.add_message(CmdMessage::error(capitalize(problem)));
    }
    if report.password_valid && report.is_weak() {
        result.add_message(CmdMessage::warning(weak_password_hint()));
    }
    if report.all_valid {
        result.add_message(CmdMessage::success("Credentials are valid"));
    }

    result
}

pub fn weak_password_hint() -> String {
    format!(
        "Weak password: use more than {} characters",
        STRONG_PASSWORD_MIN_EXCLUSIVE
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
