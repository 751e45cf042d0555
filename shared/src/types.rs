//! API request and response types

use crate::models::{Laptop, LaptopPatch, NewLaptop, User};
use crate::validation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Authentication token response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokens {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the access token expires
    pub expires_in: i64,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(max_length = 250, example = "Ada")]
    pub name: String,
    #[schema(max_length = 250, example = "ada@example.com")]
    pub email: String,
    #[schema(max_length = 100)]
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), String> {
        validation::validate_user_name(&self.name)?;
        validation::validate_email(&self.email)?;
        validation::validate_password(&self.password)
    }
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        validation::validate_email(&self.email)?;
        validation::validate_password(&self.password)
    }
}

/// Create laptop request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLaptopRequest {
    #[schema(max_length = 250, example = "ThinkPad X1 Carbon")]
    pub name: String,
    #[schema(max_length = 500, example = "14 inch, 32GB RAM")]
    pub description: String,
}

impl CreateLaptopRequest {
    pub fn validate(&self) -> Result<(), String> {
        validation::validate_laptop_name(&self.name)?;
        validation::validate_description(&self.description)
    }
}

impl From<CreateLaptopRequest> for NewLaptop {
    fn from(req: CreateLaptopRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Update laptop request. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateLaptopRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 250)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 500)]
    pub description: Option<String>,
}

impl UpdateLaptopRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            validation::validate_laptop_name(name)?;
        }
        if let Some(description) = &self.description {
            validation::validate_description(description)?;
        }
        Ok(())
    }
}

impl From<UpdateLaptopRequest> for LaptopPatch {
    fn from(req: UpdateLaptopRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Laptop response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LaptopResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: String,
}

impl From<Laptop> for LaptopResponse {
    fn from(laptop: Laptop) -> Self {
        Self {
            id: laptop.id,
            user_id: laptop.user_id,
            name: laptop.name,
            description: laptop.description,
        }
    }
}

/// User profile response, including every laptop the user owns
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub laptops: Vec<LaptopResponse>,
}

impl UserProfile {
    pub fn new(user: User, laptops: Vec<Laptop>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            laptops: laptops.into_iter().map(LaptopResponse::from).collect(),
        }
    }
}
