//! Session identity types

use serde::{Deserialize, Serialize};

use super::validation::UserValidationError;

/// Portal role chosen at login/signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// System administrator
    Admin,
    /// Resident using the dashboard
    #[default]
    User,
    /// Field staff operating collection routes
    Wasteworker,
}

impl Role {
    /// All selectable roles, in display order
    pub const ALL: [Role; 3] = [Role::Admin, Role::User, Role::Wasteworker];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
            Self::Wasteworker => "Wasteworker",
        }
    }

    /// Short description shown next to the role selector
    pub fn description(&self) -> &'static str {
        match self {
            Self::Admin => "System Administrator",
            Self::User => "General User",
            Self::Wasteworker => "Waste Management Specialist",
        }
    }

    /// Capabilities advertised for the role
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Self::Admin => &[
                "Full system access",
                "User management",
                "Environmental reports",
            ],
            Self::User => &["View reports", "Submit requests", "Track progress"],
            Self::Wasteworker => &["Collection routes", "Vehicle tracking", "Field reports"],
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UserValidationError::UnknownRole(s.to_string()))
    }
}

/// Whether a submission signs into an existing account or creates one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    /// Confirmation shown once a submission passes validation
    pub fn success_message(&self, role: Role) -> String {
        match self {
            Self::Login => format!("Login successful for {}!", role),
            Self::SignUp => format!("Sign up successful for {}!", role),
        }
    }
}

/// Authenticated user record shared between the issuing app and the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthUser {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Fixed, non-authoritative identity used when no session can be resolved.
    ///
    /// Only meant for display; it carries no token and never marks the
    /// browser profile as authenticated.
    pub fn placeholder() -> Self {
        Self::new("1", "Rajesh Kumar", "rajesh@example.com", Role::User)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_default_is_user() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Wasteworker".parse::<Role>().unwrap(), Role::Wasteworker);
        assert_eq!(
            "driver".parse::<Role>(),
            Err(UserValidationError::UnknownRole("driver".to_string()))
        );
    }

    #[test]
    fn test_role_profiles() {
        assert_eq!(Role::Admin.description(), "System Administrator");
        assert_eq!(Role::Wasteworker.features()[1], "Vehicle tracking");
        assert_eq!(Role::User.features().len(), 3);
    }

    #[test]
    fn test_success_message() {
        assert_eq!(
            AuthMode::Login.success_message(Role::User),
            "Login successful for User!"
        );
        assert_eq!(
            AuthMode::SignUp.success_message(Role::Admin),
            "Sign up successful for Admin!"
        );
    }

    #[test]
    fn test_auth_user_wire_format() {
        let user = AuthUser::new("1", "A", "a@a.com", Role::User).with_token("t1");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "A",
                "email": "a@a.com",
                "role": "User",
                "token": "t1"
            })
        );
    }

    #[test]
    fn test_auth_user_without_token_omits_field() {
        let json = serde_json::to_string(&AuthUser::placeholder()).unwrap();
        assert!(!json.contains("token"));

        let parsed: AuthUser = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, AuthUser::placeholder());
        assert!(parsed.token().is_none());
    }

    #[test]
    fn test_auth_user_rejects_unknown_role() {
        let raw = r#"{"id":"1","name":"A","email":"a@a.com","role":"Driver"}"#;
        assert!(serde_json::from_str::<AuthUser>(raw).is_err());
    }
}
