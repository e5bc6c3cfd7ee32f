use serde::{Deserialize, Serialize};

/// Key under which the browser keeps the session token.
pub const TOKEN_KEY: &str = "token";

/// Credentials the server accepts, shared with server functions via Leptos context.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl Credentials {
    pub fn matches(&self, request: &LoginRequest) -> bool {
        self.username == request.username && self.password == request.password
    }

    /// Whether `token` is the token this server issues. Empty never verifies.
    pub fn verify(&self, token: &str) -> bool {
        !token.is_empty() && token == self.token
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: String,
}

impl LoginResponse {
    pub fn new(token: impl Into<String>, username: &str) -> Self {
        Self {
            token: token.into(),
            user: display_name(username),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VerifyResponse {
    pub valid: bool,
}

/// Username as shown in the UI: first letter of every word upper-cased.
pub fn display_name(username: &str) -> String {
    let mut at_word_start = true;
    let mut name = String::with_capacity(username.len());
    for c in username.chars() {
        if at_word_start {
            name.extend(c.to_uppercase());
        } else {
            name.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            username: "admin".into(),
            password: "secret".into(),
            token: "tok-1".into(),
        }
    }

    #[test]
    fn credentials_match_exact_pair_only() {
        let creds = credentials();
        assert!(creds.matches(&LoginRequest {
            username: "admin".into(),
            password: "secret".into(),
        }));
        assert!(!creds.matches(&LoginRequest {
            username: "admin".into(),
            password: "Secret".into(),
        }));
        assert!(!creds.matches(&LoginRequest {
            username: "root".into(),
            password: "secret".into(),
        }));
    }

    #[test]
    fn display_name_capitalizes_first_letter() {
        assert_eq!(display_name("alice"), "Alice");
        assert_eq!(display_name("Bob"), "Bob");
        assert_eq!(display_name("élodie"), "Élodie");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn display_name_capitalizes_every_word() {
        assert_eq!(display_name("john doe"), "John Doe");
        assert_eq!(display_name("mary  ann\tlee"), "Mary  Ann\tLee");
        assert_eq!(display_name("o'neil mcKay"), "O'neil McKay");
    }

    #[test]
    fn verify_accepts_only_the_issued_token() {
        let creds = credentials();
        assert!(creds.verify("tok-1"));
        assert!(!creds.verify("tok-2"));
        assert!(!creds.verify(""));

        let blank = Credentials {
            token: String::new(),
            ..credentials()
        };
        assert!(!blank.verify(""));
    }

    #[test]
    fn login_response_uses_display_name() {
        let response = LoginResponse::new("tok-1", "admin");
        assert_eq!(response.user, "Admin");
        assert_eq!(response.token, "tok-1");
    }
}
