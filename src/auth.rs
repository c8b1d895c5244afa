use thiserror::Error;

/// Local storage key holding the signed-in flag.
pub const STORAGE_KEY: &str = "adminAuth";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Expected admin login, baked in at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    username: &'static str,
    password: &'static str,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: option_env!("ADMIN_USERNAME").unwrap_or("admin"),
            password: option_env!("ADMIN_PASSWORD").unwrap_or("admin"),
        }
    }
}

impl AdminConfig {
    pub fn new(username: &'static str, password: &'static str) -> Self {
        Self { username, password }
    }

    pub fn verify(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if credentials.username == self.username && credentials.password == self.password {
            Ok(())
        } else {
            log::warn!("rejected admin login for {:?}", credentials.username);
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_verify() {
        let config = AdminConfig::new("owner", "s3cret");
        assert_eq!(config.verify(&creds("owner", "s3cret")), Ok(()));
        assert_eq!(
            config.verify(&creds("owner", "wrong")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            config.verify(&creds("Owner", "s3cret")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            config.verify(&Credentials::default()),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_error_text() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }
}
