//! Authentication domain types

mod types;
mod validation;

pub use types::{
    AccessToken, LoginRequest, LoginResponse, PasswordChange, ProfileUpdate, RefreshResponse,
    SignUpRequest, SignUpResponse, UserProfile,
};
pub use validation::{FormErrors, LoginForm, SignUpForm};
