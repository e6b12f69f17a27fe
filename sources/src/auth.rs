use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Describe the possible ways to authenticate oneself
///
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Auth {
    /// Nothing special, no auth
    #[default]
    Anon,
    /// Using a username and an API key, submitted with the request
    UserKey { username: String, api_key: String },
    /// Using an API key supplied through the URL or a header
    Key { api_key: String },
    /// Using plain login/password
    Login { username: String, password: String },
}

impl Display for Auth {
    /// Obfuscate the passwords & keys
    ///
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Hide passwords & API keys
        //
        let auth = match self.clone() {
            Auth::Key { .. } => Auth::Key {
                api_key: "HIDDEN".to_string(),
            },
            Auth::UserKey { username, .. } => Auth::UserKey {
                username,
                api_key: "HIDDEN".to_string(),
            },
            Auth::Login { username, .. } => Auth::Login {
                username,
                password: "HIDDEN".to_string(),
            },
            _ => Auth::Anon,
        };
        write!(f, "{:?}", auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_display_hides_key() {
        let auth = Auth::UserKey {
            username: "foo".to_string(),
            api_key: "s3cr3t".to_string(),
        };
        let str = format!("{auth}");

        assert!(str.contains("foo"));
        assert!(str.contains("HIDDEN"));
        assert!(!str.contains("s3cr3t"));
    }

    #[test]
    fn test_auth_deserialize_userkey() {
        let auth: Auth = serde_json::from_str(r#"{"username": "foo", "api_key": "bar"}"#).unwrap();
        assert_eq!(
            Auth::UserKey {
                username: "foo".to_string(),
                api_key: "bar".to_string()
            },
            auth
        );
    }
}
