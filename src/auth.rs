// src/auth.rs

use thiserror::Error;

const DEMO_EMAIL: &str = "demo@example.com";
const DEMO_PASSWORD: &str = "123456";
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter your password")]
    MissingPassword,
    #[error("Invalid email or password")]
    WrongCredentials,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SignupError {
    #[error("Please enter your full name")]
    MissingName,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    ShortPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.contains('@')
}

/// Offline check against the single demo account.
pub fn check_credentials(email: &str, password: &str) -> Result<(), LoginError> {
    if !looks_like_email(email) {
        return Err(LoginError::InvalidEmail);
    }
    if password.trim().is_empty() {
        return Err(LoginError::MissingPassword);
    }
    // password compared exactly as typed
    if email.trim().to_lowercase() == DEMO_EMAIL && password == DEMO_PASSWORD {
        Ok(())
    } else {
        Err(LoginError::WrongCredentials)
    }
}

/// Sign-up form rules, first failure wins.
pub fn check_signup(
    full_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), SignupError> {
    if full_name.trim().is_empty() {
        return Err(SignupError::MissingName);
    }
    if !looks_like_email(email) {
        return Err(SignupError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SignupError::ShortPassword);
    }
    if password != confirm {
        return Err(SignupError::PasswordMismatch);
    }
    Ok(())
}

#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub show_password: bool,
    pub message: Option<String>,
}

impl SignupForm {
    pub fn submit(&mut self) -> bool {
        match check_signup(&self.full_name, &self.email, &self.password, &self.confirm) {
            Ok(()) => {
                log::info!("demo account created for {}", self.email.trim());
                self.message = None;
                true
            }
            Err(err) => {
                log::info!("sign-up rejected: {err}");
                self.message = Some(err.to_string());
                false
            }
        }
    }
}

/// Login screen state. `signup` is `Some` while the sign-up form is shown.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub message: Option<String>,
    pub notice: Option<String>,
    pub signup: Option<SignupForm>,
}

impl LoginForm {
    pub fn submit(&mut self) -> bool {
        log::info!("login attempt for {}", self.email.trim());
        self.notice = None;
        match check_credentials(&self.email, &self.password) {
            Ok(()) => {
                self.message = None;
                true
            }
            Err(err) => {
                log::info!("login rejected: {err}");
                self.message = Some(err.to_string());
                false
            }
        }
    }

    pub fn is_signing_up(&self) -> bool {
        self.signup.is_some()
    }

    pub fn open_signup(&mut self) {
        self.message = None;
        self.notice = None;
        self.signup = Some(SignupForm {
            email: self.email.clone(),
            ..SignupForm::default()
        });
    }

    pub fn close_signup(&mut self) {
        self.signup = None;
    }

    /// Validates the sign-up form. On success goes back to login mode
    /// with the new email filled in.
    pub fn submit_signup(&mut self) -> bool {
        let Some(signup) = &mut self.signup else {
            return false;
        };
        if !signup.submit() {
            return false;
        }
        self.email = signup.email.trim().to_owned();
        self.password.clear();
        self.message = None;
        self.notice = Some("Account created successfully!".to_owned());
        self.signup = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_account_accepted() {
        assert_eq!(check_credentials("demo@example.com", "123456"), Ok(()));
        assert_eq!(check_credentials("  Demo@Example.COM ", "123456"), Ok(()));
    }

    #[test]
    fn padded_password_rejected() {
        assert_eq!(
            check_credentials("demo@example.com", " 123456 "),
            Err(LoginError::WrongCredentials)
        );
    }

    #[test]
    fn validation_order() {
        assert_eq!(check_credentials("", ""), Err(LoginError::InvalidEmail));
        assert_eq!(check_credentials("demo", "123456"), Err(LoginError::InvalidEmail));
        assert_eq!(
            check_credentials("demo@example.com", "  "),
            Err(LoginError::MissingPassword)
        );
        assert_eq!(
            check_credentials("demo@example.com", "654321"),
            Err(LoginError::WrongCredentials)
        );
    }

    #[test]
    fn form_shows_inline_message() {
        let mut form = LoginForm {
            email: "someone@example.com".into(),
            password: "pw".into(),
            ..LoginForm::default()
        };
        assert!(!form.submit());
        assert_eq!(form.message.as_deref(), Some("Invalid email or password"));

        form.email = "demo@example.com".into();
        form.password = "123456".into();
        assert!(form.submit());
        assert_eq!(form.message, None);
    }

    #[test]
    fn signup_rules() {
        let ok = ("Nimal Perera", "nimal@example.com", "secret1", "secret1");
        assert_eq!(check_signup(ok.0, ok.1, ok.2, ok.3), Ok(()));
        assert_eq!(
            check_signup("   ", ok.1, ok.2, ok.3),
            Err(SignupError::MissingName)
        );
        assert_eq!(
            check_signup(ok.0, "nimal.example.com", ok.2, ok.3),
            Err(SignupError::InvalidEmail)
        );
        assert_eq!(check_signup(ok.0, "  ", ok.2, ok.3), Err(SignupError::InvalidEmail));
        assert_eq!(
            check_signup(ok.0, ok.1, "12345", "12345"),
            Err(SignupError::ShortPassword)
        );
        assert_eq!(
            check_signup(ok.0, ok.1, "secret1", "secret2"),
            Err(SignupError::PasswordMismatch)
        );
    }

    #[test]
    fn signup_password_length_counts_chars() {
        assert_eq!(check_signup("a", "a@b", "한국어공부해", "한국어공부해"), Ok(()));
        assert_eq!(
            check_signup("a", "a@b", "한국어공", "한국어공"),
            Err(SignupError::ShortPassword)
        );
    }

    #[test]
    fn signup_first_failure_wins() {
        // everything wrong: the name is reported first
        assert_eq!(check_signup("", "", "1", "2"), Err(SignupError::MissingName));
        assert_eq!(check_signup("A", "", "1", "2"), Err(SignupError::InvalidEmail));
        assert_eq!(check_signup("A", "a@b", "1", "2"), Err(SignupError::ShortPassword));
        assert_eq!(
            check_signup("A", "a@b", "123456", "2"),
            Err(SignupError::PasswordMismatch)
        );
    }

    #[test]
    fn signup_mode_returns_to_login() {
        let mut form = LoginForm::default();
        form.open_signup();
        assert!(form.is_signing_up());

        assert!(!form.submit_signup());
        assert!(form.is_signing_up());
        let signup = form.signup.as_ref().unwrap();
        assert_eq!(signup.message.as_deref(), Some("Please enter your full name"));

        let signup = form.signup.as_mut().unwrap();
        signup.full_name = "Ama".into();
        signup.email = " ama@example.com ".into();
        signup.password = "abcdef".into();
        signup.confirm = "abcdef".into();
        assert!(form.submit_signup());
        assert!(!form.is_signing_up());
        assert_eq!(form.email, "ama@example.com");
        assert_eq!(form.notice.as_deref(), Some("Account created successfully!"));

        // no backend: the new account cannot log in
        form.password = "abcdef".into();
        assert!(!form.submit());
        assert_eq!(form.notice, None);
    }
}
