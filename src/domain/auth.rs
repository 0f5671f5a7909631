use serde::{Deserialize, Serialize};

use crate::normalize::lenient::null_as_default;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Registration form as the Spanish-language screens submit it. Converted through
/// [`canonicalize_fields`](crate::normalize::field_names::canonicalize_fields) before
/// transport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalizedRegistration {
    pub nombre: String,
    pub apellido: String,
    pub usuario: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub role_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operator {
    pub operator_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    pub email: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub operator: Operator,
}
