//! Reusable UI components

mod admin_layout;
mod admin_nav;
mod confirm;
mod empty;
mod loading;
mod toast;

pub use admin_layout::*;
pub use admin_nav::*;
pub use confirm::*;
pub use empty::*;
pub use loading::*;
pub use toast::*;
