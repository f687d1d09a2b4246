use std::fs;
use tempfile::TempDir;
use userdesk::api::{UserdeskPaths, UsersApi};
use userdesk::error::UserdeskError;
use userdesk::model::UserFields;
use userdesk::store::fs::FileStore;

fn setup() -> (TempDir, UsersApi<FileStore>) {
    let dir = TempDir::new().unwrap();
    let api = UsersApi::open(UserdeskPaths::new(dir.path())).unwrap();
    (dir, api)
}

fn form(name: &str) -> UserFields {
    UserFields::new(name, format!("{}@example.com", name), "secret123", "secret123")
}

#[test]
fn scenario_first_user_on_empty_store() {
    let (dir, api) = setup();
    let result = api
        .register_user(UserFields::new("Ann", "", "secret123", "secret123"))
        .unwrap();
    assert_eq!(result.affected_users[0].id, "1");

    let listed = api.list_users().unwrap().listed_users;
    assert_eq!(listed.len(), 1);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("users.json")).unwrap()).unwrap();
    assert!(raw.is_array());
    assert_eq!(raw[0]["id"], "1");
    assert_eq!(raw[0]["confirmPassword"], "secret123");
}

#[test]
fn scenario_delete_first_of_two() {
    let (_dir, api) = setup();
    api.register_user(form("ann")).unwrap();
    api.register_user(form("bo")).unwrap();

    let result = api.delete_user("1").unwrap();
    assert_eq!(result.removed, 1);

    let listed = api.list_users().unwrap().listed_users;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "2");
}

#[test]
fn scenario_update_missing_id() {
    let (dir, api) = setup();
    api.register_user(form("ann")).unwrap();
    let users_file = dir.path().join("users.json");
    let before = fs::read_to_string(&users_file).unwrap();

    assert!(matches!(
        api.update_user("99", form("zed")),
        Err(UserdeskError::NotFound(id)) if id == "99"
    ));
    assert_eq!(fs::read_to_string(&users_file).unwrap(), before);
}

#[test]
fn create_then_get_round_trips() {
    let (_dir, api) = setup();
    let fields = UserFields::new("Cy", "cy@example.com", "pw", "pw");
    let id = api.create_user(fields.clone()).unwrap().affected_users[0]
        .id
        .clone();

    let user = api.get_user(&id).unwrap().listed_users.remove(0);
    assert_eq!(user.id, id);
    assert_eq!(user.fields(), fields);
}

#[test]
fn delete_twice_leaves_same_file() {
    let (dir, api) = setup();
    api.register_user(form("ann")).unwrap();
    api.register_user(form("bo")).unwrap();
    let users_file = dir.path().join("users.json");

    api.delete_user("2").unwrap();
    let after_first = fs::read_to_string(&users_file).unwrap();
    let second = api.delete_user("2").unwrap();

    assert_eq!(second.removed, 0);
    assert_eq!(fs::read_to_string(&users_file).unwrap(), after_first);
}

#[test]
fn ids_survive_reopen_after_delete() {
    let (dir, api) = setup();
    api.register_user(form("ann")).unwrap();
    api.register_user(form("bo")).unwrap();
    api.delete_user("2").unwrap();
    drop(api);

    let api = UsersApi::open(UserdeskPaths::new(dir.path())).unwrap();
    let result = api.register_user(form("cy")).unwrap();
    assert_eq!(result.affected_users[0].id, "3");
}

#[test]
fn legacy_file_with_numeric_ids() {
    let (dir, api) = setup();
    fs::write(
        dir.path().join("users.json"),
        r#"[{"name":"Ann","email":"a@x.io","password":"p","confirmPassword":"p","id":1},
            {"name":"Bo","email":"b@x.io","password":"p","confirmPassword":"p","id":4}]"#,
    )
    .unwrap();

    assert_eq!(api.get_user("4").unwrap().listed_users[0].name, "Bo");
    let result = api.register_user(form("cy")).unwrap();
    assert_eq!(result.affected_users[0].id, "5");
}

#[test]
fn float_ids_are_found_by_their_integer_form() {
    let (dir, api) = setup();
    fs::write(
        dir.path().join("users.json"),
        r#"[{"name":"Ann","email":"","password":"p","confirmPassword":"p","id":2.0}]"#,
    )
    .unwrap();

    assert_eq!(api.get_user("2").unwrap().listed_users[0].name, "Ann");
    let result = api.register_user(form("bo")).unwrap();
    assert_eq!(result.affected_users[0].id, "3");
}

#[test]
fn maxed_out_ids_reject_creates_and_keep_the_file() {
    let (dir, api) = setup();
    let users_file = dir.path().join("users.json");
    let legacy = r#"[{"name":"Last","email":"","password":"p","confirmPassword":"p","id":18446744073709551615}]"#;
    fs::write(&users_file, legacy).unwrap();

    assert!(matches!(
        api.register_user(form("bo")),
        Err(UserdeskError::StoreUnavailable { .. })
    ));
    assert_eq!(fs::read_to_string(&users_file).unwrap(), legacy);
    assert_eq!(api.list_users().unwrap().listed_users.len(), 1);
}

#[test]
fn corrupt_file_lists_empty_but_is_never_overwritten() {
    let (dir, api) = setup();
    let users_file = dir.path().join("users.json");
    fs::write(&users_file, "[{\"id\": \"1\", ").unwrap();

    assert!(api.list_users().unwrap().listed_users.is_empty());
    assert!(matches!(
        api.get_user("1"),
        Err(UserdeskError::NotFound(_))
    ));
    assert!(matches!(
        api.register_user(form("ann")),
        Err(UserdeskError::StoreUnavailable { .. })
    ));
    assert!(matches!(
        api.delete_user("1"),
        Err(UserdeskError::StoreUnavailable { .. })
    ));
    assert_eq!(fs::read_to_string(&users_file).unwrap(), "[{\"id\": \"1\", ");
}

#[test]
fn configured_users_file_and_pretty_output() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"users_file": "people.json", "pretty_json": true}"#,
    )
    .unwrap();

    let api = UsersApi::open(UserdeskPaths::new(dir.path())).unwrap();
    api.register_user(form("ann")).unwrap();

    let content = fs::read_to_string(dir.path().join("people.json")).unwrap();
    assert!(content.contains('\n'));
    assert!(dir.path().join("people.seq.json").exists());
    assert!(!dir.path().join("users.json").exists());
}
