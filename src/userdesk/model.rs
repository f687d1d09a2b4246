use serde::{Deserialize, Deserializer, Serialize};

/// A stored user, serialized with the same keys the users file has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, fields: UserFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            email: fields.email,
            password: fields.password,
            confirm_password: fields.confirm_password,
        }
    }

    /// Overwrites every editable field, keeping the id.
    pub fn apply(&mut self, fields: UserFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.password = fields.password;
        self.confirm_password = fields.confirm_password;
    }

    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

/// Older files carry numeric ids (`"id": 3`); both forms read as a string.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => number_to_id(&n),
    })
}

/// `2.0` reads as `"2"`; non-integral numbers keep their decimal form.
fn number_to_id(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

/// The submitted user form, without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl UserFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub name_valid: bool,
    pub password_valid: bool,
    pub passwords_match: bool,
    /// Advisory; never part of `all_valid`.
    pub strong_password: bool,
    pub all_valid: bool,
}

impl ValidationReport {
    /// Failed blocking checks, in form order.
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if !self.name_valid {
            problems.push("name is required");
        }
        if !self.password_valid {
            problems.push("password is required");
        }
        if !self.passwords_match {
            problems.push("passwords do not match");
        }
        problems
    }

    pub fn is_weak(&self) -> bool {
        !self.strong_password
    }
}
