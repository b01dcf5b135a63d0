//! Profile use cases for the signed-in librarian.

use std::sync::Arc;

use libris_domain::{DomainError, FormErrors, PasswordChange, ProfileUpdate, UserProfile};
use tracing::info;

use crate::auth::SessionController;
use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::AuthApi;

/// Reads and edits the signed-in librarian's profile.
///
/// Every call goes out with the token bound by the session; nothing is
/// read from durable storage.
pub struct ProfileService {
    api: Arc<dyn AuthApi>,
    session: Arc<SessionController>,
}

impl ProfileService {
    /// Creates a new profile service.
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, session: Arc<SessionController>) -> Self {
        Self { api, session }
    }

    fn ensure_signed_in(&self) -> ApplicationResult<()> {
        if self.session.status().is_signed_in() {
            Ok(())
        } else {
            Err(ApplicationError::NotAuthenticated)
        }
    }

    /// Loads the profile.
    ///
    /// # Errors
    /// Returns `NotAuthenticated` without calling the backend if the session
    /// is not signed in, or the backend error.
    pub async fn fetch(&self) -> ApplicationResult<UserProfile> {
        self.ensure_signed_in()?;
        Ok(self.api.get_profile().await?)
    }

    /// Saves changed profile fields and returns the updated profile.
    ///
    /// An empty update returns the current profile without a write.
    ///
    /// # Errors
    /// Same as [`ProfileService::fetch`].
    pub async fn update(&self, update: &ProfileUpdate) -> ApplicationResult<UserProfile> {
        self.ensure_signed_in()?;
        if update.is_empty() {
            return Ok(self.api.get_profile().await?);
        }
        let profile = self.api.update_profile(update).await?;
        info!(user_id = %profile.id, "profile updated");
        Ok(profile)
    }

    /// Changes the password after checking the confirmation matches.
    ///
    /// # Errors
    /// - Returns a domain error if `new_password` and `confirm_password` differ
    /// - Same as [`ProfileService::fetch`] otherwise
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> ApplicationResult<()> {
        if new_password != confirm_password {
            let mut errors = FormErrors::default();
            errors.insert("confirmPassword", "New passwords do not match");
            return Err(DomainError::InvalidForm(errors).into());
        }
        self.ensure_signed_in()?;

        self.api
            .change_password(&PasswordChange {
                current_password: current_password.to_string(),
                new_password: new_password.to_string(),
            })
            .await?;
        info!("password changed");
        Ok(())
    }
}
