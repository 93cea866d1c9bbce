//! Public-facing pages

mod home;
mod login;
mod register;

pub use home::*;
pub use login::*;
pub use register::*;
