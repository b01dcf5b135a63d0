//! Libris Domain - Core session and routing types
//!
//! This crate defines the domain model for the Libris admin client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod route;
pub mod state;

pub use auth::{
    AccessToken, FormErrors, LoginForm, LoginRequest, LoginResponse, PasswordChange,
    ProfileUpdate, RefreshResponse, SignUpForm, SignUpRequest, SignUpResponse, UserProfile,
};
pub use error::{DomainError, DomainResult};
pub use route::{AppRoute, DashboardSection, NavigateOptions, paths};
pub use state::{GuardDecision, SessionStatus};
