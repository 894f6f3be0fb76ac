use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AuthMethod {
    Basic { api_key: String, api_secret: String },
    Bearer { token: String },
}

impl AuthMethod {
    pub fn description(&self) -> &'static str {
        match self {
            AuthMethod::Basic { .. } => "api key",
            AuthMethod::Bearer { .. } => "oauth token",
        }
    }

    /// Key shown to the user, with the secret part hidden.
    pub fn masked(&self) -> String {
        match self {
            AuthMethod::Basic { api_key, .. } => format!("{api_key}:****"),
            AuthMethod::Bearer { token } => {
                let chars: Vec<char> = token.chars().collect();
                if chars.len() <= 8 {
                    return "****".to_string();
                }
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("****{tail}")
            }
        }
    }
}
