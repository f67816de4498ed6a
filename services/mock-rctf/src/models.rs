use serde::{Deserialize, Serialize};

pub const KIND_GOOD_LOGIN: &str = "goodLogin";
pub const KIND_GOOD_USER_DATA: &str = "goodUserData";
pub const KIND_BAD_USER_DATA: &str = "badUserData";

pub const MESSAGE_OK: &str = "hello world";
pub const MESSAGE_INVALID_AUTH: &str = "invalid auth";

/// Envelope shared by every rCTF API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RctfResponse<T> {
    pub kind: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> RctfResponse<T> {
    pub fn good(kind: &str, data: T) -> Self {
        Self {
            kind: kind.to_string(),
            message: MESSAGE_OK.to_string(),
            data: Some(data),
        }
    }
}

impl RctfResponse<()> {
    pub fn bad(kind: &str, message: &str) -> Self {
        Self {
            kind: kind.to_string(),
            message: message.to_string(),
            data: None,
        }
    }
}

/// Payload of `POST /api/v1/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub auth_token: String,
}

/// Payload of `GET /api/v1/users/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoData {
    pub name: String,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_payload_uses_camel_case() {
        let response = RctfResponse::good(
            KIND_GOOD_LOGIN,
            AuthData {
                auth_token: "abc".to_string(),
            },
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "goodLogin",
                "message": "hello world",
                "data": { "authToken": "abc" },
            })
        );
    }

    #[test]
    fn bad_response_omits_data() {
        let value =
            serde_json::to_value(RctfResponse::bad(KIND_BAD_USER_DATA, MESSAGE_INVALID_AUTH))
                .unwrap();
        assert_eq!(
            value,
            json!({ "kind": "badUserData", "message": "invalid auth" })
        );
    }
}
