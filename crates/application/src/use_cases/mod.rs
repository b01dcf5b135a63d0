//! Application use cases (user-initiated auth flows).

mod login_user;
mod logout_user;
mod profile;
mod sign_up_user;

pub use login_user::*;
pub use logout_user::*;
pub use profile::*;
pub use sign_up_user::*;
