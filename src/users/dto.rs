use serde::{Deserialize, Serialize};

use crate::users::repo::User;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_no: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub mobile_no: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckEmailRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UpdatedProfileResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotedUserResponse {
    pub updated_user: User,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_accepts_camel_case_body() {
        let body = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "a@b.com",
            "mobileNo": "12345678901",
            "password": "longenough"
        }"#;
        let req: RegisterRequest = serde_json::from_str(body).expect("deserialize");
        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.mobile_no, "12345678901");
    }

    #[test]
    fn update_password_request_uses_new_password_key() {
        let req: UpdatePasswordRequest =
            serde_json::from_str(r#"{"newPassword": "longenough"}"#).expect("deserialize");
        assert_eq!(req.new_password, "longenough");
    }

    #[test]
    fn login_response_exposes_access_key() {
        let json = serde_json::to_string(&LoginResponse {
            access: "token".into(),
        })
        .expect("serialize");
        assert_eq!(json, r#"{"access":"token"}"#);
    }
}
