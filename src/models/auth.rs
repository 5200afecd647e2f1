use serde::{Deserialize, Serialize};

/// Credentials typed into the login page or popup. Nothing verifies them.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(rename = "rememberMe")]
    pub remember_me: bool,
}
