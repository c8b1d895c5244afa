use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please write a message")]
    MissingMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sent,
    Error(String),
}

/// The form's current status plus a counter of how many times it was set,
/// so a delayed reset can tell whether a newer status replaced its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBoard {
    status: FormStatus,
    generation: u64,
}

impl StatusBoard {
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Shows `status` and returns the ticket to pass to [`StatusBoard::expire`].
    pub fn post(&mut self, status: FormStatus) -> u64 {
        self.generation += 1;
        self.status = status;
        self.generation
    }

    /// Back to idle, unless something was posted after `ticket`.
    pub fn expire(&mut self, ticket: u64) {
        if ticket == self.generation {
            self.status = FormStatus::Idle;
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    /// `mailto:` link that opens the visitor's mail client with the message filled in.
    pub fn mailto_href(&self, to: &str) -> Result<String, ContactError> {
        self.validate()?;
        let subject = format!("Portfolio contact from {}", self.name.trim());
        let body = format!(
            "{}\n\n{} <{}>",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        );
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, message: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_validation() {
        assert_eq!(message("Ann", "ann@example.com", "hi").validate(), Ok(()));
        assert_eq!(
            message(" ", "ann@example.com", "hi").validate(),
            Err(ContactError::MissingName)
        );
        for email in ["", "ann", "@example.com", "ann@example", "ann@.com", "a nn@example.com"] {
            assert_eq!(
                message("Ann", email, "hi").validate(),
                Err(ContactError::InvalidEmail),
                "{email:?} should be rejected"
            );
        }
        assert_eq!(
            message("Ann", "ann@example.com", "\n").validate(),
            Err(ContactError::MissingMessage)
        );
    }

    #[test]
    fn test_stale_reset_keeps_newer_status() {
        let mut board = StatusBoard::default();
        let first = board.post(FormStatus::Error("Please write a message".to_string()));
        let second = board.post(FormStatus::Sent);

        board.expire(first);
        assert_eq!(board.status(), &FormStatus::Sent);

        board.expire(second);
        assert_eq!(board.status(), &FormStatus::Idle);
    }

    #[test]
    fn test_mailto_href() {
        let href = message("Ann Lee", "ann@example.com", "Hello there & bye")
            .mailto_href("me@example.com")
            .unwrap();
        assert_eq!(
            href,
            "mailto:me@example.com?subject=Portfolio%20contact%20from%20Ann%20Lee&body=Hello%20there%20%26%20bye%0A%0AAnn%20Lee%20%3Cann%40example.com%3E"
        );
        assert!(message("", "", "").mailto_href("me@example.com").is_err());
    }
}
