//! Mock sign-in and the session it leaves behind
//!
//! Accounts are not verified: any well-formed email with a non-empty
//! password signs in. The session lives in a [`SessionStore`] so the
//! storage backend can be swapped without touching the auth flow.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::{Result, TuniCampError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl User {
    fn for_email(email: &str, name: String) -> Self {
        Self {
            id: "1".to_string(),
            email: email.to_string(),
            name,
            avatar: Some(format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={email}"
            )),
        }
    }
}

/// Storage for the signed-in user
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<User>>;
    fn save(&self, user: &User) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    user: RwLock<Option<User>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<User>> {
        let guard = self
            .user
            .read()
            .map_err(|_| TuniCampError::session("session store is poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, user: &User) -> Result<()> {
        let mut guard = self
            .user
            .write()
            .map_err(|_| TuniCampError::session("session store is poisoned"))?;
        *guard = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .user
            .write()
            .map_err(|_| TuniCampError::session("session store is poisoned"))?;
        *guard = None;
        Ok(())
    }
}

pub struct AuthService<S> {
    store: S,
}

impl<S: SessionStore> AuthService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Sign in; the display name is the local part of the email
    pub fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let email = validate_credentials(email, password)?;
        let name = email.split('@').next().unwrap_or(email).to_string();
        self.start_session(User::for_email(email, name))
    }

    pub fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<User> {
        let email = validate_credentials(email, password)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(TuniCampError::validation("Name cannot be empty"));
        }
        self.start_session(User::for_email(email, name.to_string()))
    }

    pub fn sign_out(&self) -> Result<()> {
        tracing::debug!("Signing out");
        self.store.clear()
    }

    pub fn current_user(&self) -> Result<Option<User>> {
        self.store.load()
    }

    fn start_session(&self, user: User) -> Result<User> {
        self.store.save(&user)?;
        tracing::info!(email = %user.email, "Signed in");
        Ok(user)
    }
}

fn validate_credentials<'a>(email: &'a str, password: &str) -> Result<&'a str> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => {
            return Err(TuniCampError::validation(format!(
                "'{email}' is not a valid email address"
            )));
        }
    }
    if password.is_empty() {
        return Err(TuniCampError::validation("Password cannot be empty"));
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService<InMemorySessionStore> {
        AuthService::new(InMemorySessionStore::new())
    }

    #[test]
    fn test_sign_in_derives_name() {
        let auth = service();
        let user = auth.sign_in("amira@example.tn", "secret").unwrap();
        assert_eq!(user.name, "amira");
        assert!(user.avatar.unwrap().ends_with("seed=amira@example.tn"));
        assert_eq!(auth.current_user().unwrap().unwrap().email, "amira@example.tn");
    }

    #[test]
    fn test_sign_up_keeps_name() {
        let auth = service();
        let user = auth.sign_up("sami@example.tn", "pw", " Sami B. ").unwrap();
        assert_eq!(user.name, "Sami B.");
        assert!(auth.sign_up("sami@example.tn", "pw", "  ").is_err());
    }

    #[test]
    fn test_sign_out_clears_session() {
        let auth = service();
        auth.sign_in("amira@example.tn", "secret").unwrap();
        auth.sign_out().unwrap();
        assert_eq!(auth.current_user().unwrap(), None);
    }

    #[test]
    fn test_rejects_malformed_credentials() {
        let auth = service();
        assert!(auth.sign_in("not-an-email", "secret").is_err());
        assert!(auth.sign_in("@example.tn", "secret").is_err());
        assert!(auth.sign_in("amira@example.tn", "").is_err());
        assert_eq!(auth.current_user().unwrap(), None);
    }
}
