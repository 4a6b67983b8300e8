use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;
use serde::Serialize;
use uuid::Uuid;

use crate::{error::AuthError, models::Role};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";

#[derive(Clone, Debug, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginUser {
    pub id: String,
    pub name: String,
    pub role: Role,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginData {
    pub user: LoginUser,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub data: Option<LoginData>,
    pub message: Option<String>,
}

impl LoginResponse {
    fn rejected(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.to_string()),
        }
    }
}

/// Credential check used by the sign-in form. `Err` means the check itself
/// failed, not that the credentials were wrong.
pub trait AuthService: Send + Sync {
    fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError>;
}

struct Account {
    id: String,
    name: String,
    email: String,
    role: Role,
    password_hash: String,
}

/// Fixed demo accounts, one per role, sharing one password.
pub struct DemoAuth {
    accounts: Vec<Account>,
}

impl DemoAuth {
    pub fn seeded(password: &str) -> Result<Self, AuthError> {
        let seed = [
            ("c-1", "Ali Hassan", "customer@hunarmand.pk", Role::Customer),
            ("w-1", "Ahmed Raza", "worker@hunarmand.pk", Role::Worker),
            ("a-1", "Site Admin", "admin@hunarmand.pk", Role::Admin),
        ];

        let mut accounts = Vec::with_capacity(seed.len());
        for (id, name, email, role) in seed {
            accounts.push(Account {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                role,
                password_hash: hash_password(password).map_err(AuthError::Hash)?,
            });
        }
        Ok(Self { accounts })
    }
}

impl AuthService for DemoAuth {
    fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        let email = credentials.email.trim();
        let Some(account) = self
            .accounts
            .iter()
            .find(|account| account.email.eq_ignore_ascii_case(email))
        else {
            return Ok(LoginResponse::rejected(INVALID_CREDENTIALS));
        };

        if !verify_password(&credentials.password, &account.password_hash)? {
            return Ok(LoginResponse::rejected(INVALID_CREDENTIALS));
        }

        Ok(LoginResponse {
            success: true,
            data: Some(LoginData {
                user: LoginUser {
                    id: account.id.clone(),
                    name: account.name.clone(),
                    role: account.role,
                },
            }),
            message: None,
        })
    }
}

/// Where a signed-in user lands.
pub fn landing_for(role: Role) -> &'static str {
    match role {
        Role::Worker => "/worker/dashboard",
        Role::Customer | Role::Admin => "/",
    }
}

pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(password_hash).map_err(AuthError::Hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(AuthError::Hash(err)),
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn accepts_each_role() {
        let auth = DemoAuth::seeded("pw").unwrap();
        for (email, role) in [
            ("customer@hunarmand.pk", Role::Customer),
            ("Worker@Hunarmand.pk", Role::Worker),
            ("admin@hunarmand.pk", Role::Admin),
        ] {
            let response = auth.login(&credentials(email, "pw")).unwrap();
            assert!(response.success);
            assert!(response.message.is_none());
            assert_eq!(response.data.unwrap().user.role, role);
        }
    }

    #[test]
    fn rejects_wrong_password_and_unknown_email() {
        let auth = DemoAuth::seeded("pw").unwrap();
        for (email, password) in [("worker@hunarmand.pk", "nope"), ("nobody@x.pk", "pw")] {
            let response = auth.login(&credentials(email, password)).unwrap();
            assert!(!response.success);
            assert!(response.data.is_none());
            assert_eq!(response.message.as_deref(), Some(INVALID_CREDENTIALS));
        }
    }

    #[test]
    fn corrupt_hash_is_an_error() {
        assert!(verify_password("pw", "not-a-phc-string").is_err());
    }

    #[test]
    fn landing_pages_by_role() {
        assert_eq!(landing_for(Role::Worker), "/worker/dashboard");
        assert_eq!(landing_for(Role::Customer), "/");
        assert_eq!(landing_for(Role::Admin), "/");
    }

    #[test]
    fn role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Worker).unwrap(), "\"WORKER\"");
    }
}
