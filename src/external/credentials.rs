//! Gateway credentials and the headers that carry them.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";
pub const SECRET_KEY_HEADER: &str = "x-user-secret-key";
pub const PUBLIC_KEY_HEADER: &str = "x-user-public-key";

/// Which kind of credential a call is authenticated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialKind {
    AccessToken,
    SecretKey,
    PublicKey,
}

impl CredentialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKind::AccessToken => "access_token",
            CredentialKind::SecretKey => "secret_key",
            CredentialKind::PublicKey => "public_key",
        }
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A credential value attached to exactly one header of a gateway request.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    AccessToken(String),
    SecretKey(String),
    PublicKey(String),
}

impl Credentials {
    pub fn new(kind: CredentialKind, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            CredentialKind::AccessToken => Credentials::AccessToken(value),
            CredentialKind::SecretKey => Credentials::SecretKey(value),
            CredentialKind::PublicKey => Credentials::PublicKey(value),
        }
    }

    pub fn kind(&self) -> CredentialKind {
        match self {
            Credentials::AccessToken(_) => CredentialKind::AccessToken,
            Credentials::SecretKey(_) => CredentialKind::SecretKey,
            Credentials::PublicKey(_) => CredentialKind::PublicKey,
        }
    }

    pub fn header_name(&self) -> &'static str {
        match self {
            Credentials::AccessToken(_) => ACCESS_TOKEN_HEADER,
            Credentials::SecretKey(_) => SECRET_KEY_HEADER,
            Credentials::PublicKey(_) => PUBLIC_KEY_HEADER,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Credentials::AccessToken(v) | Credentials::SecretKey(v) | Credentials::PublicKey(v) => {
                v
            }
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value().trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credentials({}: ****)", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_per_kind() {
        assert_eq!(
            Credentials::AccessToken("a".into()).header_name(),
            "x-access-token"
        );
        assert_eq!(
            Credentials::SecretKey("s".into()).header_name(),
            "x-user-secret-key"
        );
        assert_eq!(
            Credentials::PublicKey("p".into()).header_name(),
            "x-user-public-key"
        );
    }

    #[test]
    fn test_debug_redacts_value() {
        let creds = Credentials::new(CredentialKind::SecretKey, "sk_live_very_secret");
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("sk_live"));
        assert!(printed.contains("secret_key"));
    }

    #[test]
    fn test_blank_detection() {
        assert!(Credentials::PublicKey("  ".into()).is_blank());
        assert!(!Credentials::PublicKey("pk".into()).is_blank());
    }
}
