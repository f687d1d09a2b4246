use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;
use userdesk::api::{ConfigAction, UserdeskPaths, UsersApi};
use userdesk::commands;
use userdesk::error::{Result, UserdeskError};
use userdesk::logging;
use userdesk::model::UserFields;
use userdesk::store::fs::FileStore;

mod args;
mod cli;
use args::{Cli, Commands, UserForm};
use cli::print::{
    print_config, print_form, print_messages, print_report, print_user_detail, print_users,
};

const HOME_ENV: &str = "USERDESK_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = UserdeskPaths::new(resolve_data_dir(cli.data_dir.clone())?);
    debug!(data_dir = %paths.data_dir.display(), "resolved data directory");

    // config and init never open the store, so a broken config.json can still be repaired.
    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&paths, key, value),
        Some(Commands::Init) => handle_init(&paths),
        Some(Commands::List) | None => handle_list(&UsersApi::open(paths)?),
        Some(Commands::Show { id }) => handle_show(&UsersApi::open(paths)?, &id),
        Some(Commands::Add { form }) => handle_add(&UsersApi::open(paths)?, form),
        Some(Commands::Edit { id, form }) => handle_edit(&UsersApi::open(paths)?, &id, form),
        Some(Commands::Delete { id }) => handle_delete(&UsersApi::open(paths)?, &id),
        Some(Commands::Check { form }) => handle_check(&UsersApi::open(paths)?, form),
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "userdesk", "userdesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            UserdeskError::Config(format!(
                "Could not determine a data directory; pass --data-dir or set {}",
                HOME_ENV
            ))
        })
}

fn to_fields(form: UserForm) -> UserFields {
    UserFields::new(form.name, form.email, form.password, form.confirm_password)
}

fn handle_list(api: &UsersApi<FileStore>) -> Result<()> {
    let result = api.list_users()?;
    print_users(&result.listed_users);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(api: &UsersApi<FileStore>, id: &str) -> Result<()> {
    let result = api.get_user(id)?;
    for user in &result.listed_users {
        print_user_detail(user);
    }
    Ok(())
}

fn handle_add(api: &UsersApi<FileStore>, form: UserForm) -> Result<()> {
    let fields = to_fields(form);
    match api.register_user(fields.clone()) {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(e) => Err(explain_rejection(api, &fields, e)),
    }
}

fn handle_edit(api: &UsersApi<FileStore>, id: &str, form: UserForm) -> Result<()> {
    let fields = to_fields(form);
    match api.edit_user(id, fields.clone()) {
        Ok(result) => {
            if let Some(user) = result.affected_users.first() {
                print_user_detail(user);
            }
            print_messages(&result.messages);
            Ok(())
        }
        Err(e) => Err(explain_rejection(api, &fields, e)),
    }
}

/// Shows field errors and the submitted values for a rejected form.
fn explain_rejection(
    api: &UsersApi<FileStore>,
    fields: &UserFields,
    err: UserdeskError,
) -> UserdeskError {
    if let UserdeskError::ValidationFailed(_) = err {
        let check = api.check_credentials(fields);
        print_messages(&check.messages);
        print_form(fields);
    }
    err
}

fn handle_delete(api: &UsersApi<FileStore>, id: &str) -> Result<()> {
    let result = api.delete_user(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(api: &UsersApi<FileStore>, form: UserForm) -> Result<()> {
    let result = api.check_credentials(&to_fields(form));
    if let Some(report) = &result.report {
        print_report(report);
    }
    print_messages(&result.messages);
    match result.report {
        Some(report) if !report.all_valid => Err(UserdeskError::ValidationFailed(report)),
        _ => Ok(()),
    }
}

fn handle_config(paths: &UserdeskPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(paths, action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(paths: &UserdeskPaths) -> Result<()> {
    let result = commands::init::run(paths)?;
    print_messages(&result.messages);
    Ok(())
}
