use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Access level of an account
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_role")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[default]
    #[sea_orm(string_value = "user")]
    User,
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<Role>().map(|_| ()).map_err(|_| {
        ValidationError::new("role").with_message("role must be admin or user".into())
    })
}

/// A stored account. Carries the password hash, so it never leaves the
/// service boundary as-is; see [`AccountResponse`].
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub institutional_email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
    pub signing_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating an account
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateAccount {
    #[validate(
        length(min = 1, message = "institutional email is required"),
        email(message = "institutional email must be a valid email")
    )]
    #[schema(example = "jane.doe@university.edu")]
    pub institutional_email: String,

    #[validate(length(min = 3, message = "name must be at least 3 characters"))]
    #[schema(example = "Jane Doe")]
    pub name: String,

    /// Raw password; hashed before it is stored
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    #[schema(example = "correct-horse-battery")]
    pub password: String,

    /// `admin` or `user`; defaults to `user`
    #[validate(custom(function = "validate_role"))]
    #[serde(default)]
    #[schema(value_type = Option<Role>, example = "user")]
    pub role: Option<String>,

    /// Key used to sign documents issued for this account
    #[serde(default)]
    pub signing_key: Option<String>,
}

/// Row to insert, built by the service once the password is hashed
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub institutional_email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
    pub signing_key: Option<String>,
}

/// Full account as returned by create and get
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub id: i32,
    pub institutional_email: String,
    pub name: String,
    pub role: Role,
    pub signing_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            institutional_email: account.institutional_email,
            name: account.name,
            role: account.role,
            signing_key: account.signing_key,
            created_at: account.created_at,
        }
    }
}

/// List entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccountSummary {
    pub id: i32,
    pub name: String,
    pub role: Role,
}

impl From<Account> for AccountSummary {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            role: account.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateAccount {
        CreateAccount {
            institutional_email: "jane.doe@university.edu".into(),
            name: "Jane Doe".into(),
            password: "correct-horse".into(),
            role: None,
            signing_key: None,
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_reported_on_email_field() {
        let input = CreateAccount {
            institutional_email: "not-an-email".into(),
            ..valid()
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("institutional_email"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_empty_email_is_required() {
        let input = CreateAccount {
            institutional_email: String::new(),
            ..valid()
        };
        let errors = input.validate().unwrap_err();
        let codes: Vec<_> = errors.field_errors()["institutional_email"]
            .iter()
            .map(|e| e.code.to_string())
            .collect();
        assert!(codes.contains(&"length".to_string()));
    }

    #[test]
    fn test_short_name_and_password_fail() {
        let input = CreateAccount {
            name: "Al".into(),
            password: "1234567".into(),
            ..valid()
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_name_length_counts_characters() {
        let input = CreateAccount {
            name: "Zoë".into(),
            ..valid()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_unknown_role_fails() {
        let input = CreateAccount {
            role: Some("superuser".into()),
            ..valid()
        };
        let errors = input.validate().unwrap_err();
        let role_errors = &errors.field_errors()["role"];
        assert_eq!(
            role_errors[0].message.as_deref(),
            Some("role must be admin or user")
        );
    }

    #[test]
    fn test_known_roles_pass() {
        for role in ["admin", "user"] {
            let input = CreateAccount {
                role: Some(role.into()),
                ..valid()
            };
            assert!(input.validate().is_ok(), "{role} should be accepted");
        }
    }

    #[test]
    fn test_role_defaults_to_user() {
        assert_eq!(Role::default(), Role::User);
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn test_response_omits_password_hash() {
        let account = Account {
            id: 7,
            institutional_email: "jane.doe@university.edu".into(),
            name: "Jane Doe".into(),
            password_hash: "$argon2id$secret".into(),
            role: Role::Admin,
            signing_key: Some("key-1".into()),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(AccountResponse::from(account.clone())).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "admin");
        assert_eq!(json["signing_key"], "key-1");

        let summary = serde_json::to_value(AccountSummary::from(account)).unwrap();
        assert_eq!(
            summary,
            serde_json::json!({"id": 7, "name": "Jane Doe", "role": "admin"})
        );
    }
}
