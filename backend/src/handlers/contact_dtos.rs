use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact`. Missing fields deserialize as empty so the
/// handler can name them in its error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// First required field that is blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
}
