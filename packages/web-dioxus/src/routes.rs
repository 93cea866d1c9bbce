//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AdminLayout;
use crate::pages::admin::AdminApplications;
use crate::pages::public::{Home, Login, Register};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[route("/")]
    Home {},

    #[route("/register")]
    Register {},

    #[route("/login")]
    Login {},

    // Admin routes
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/applications")]
            AdminApplications {},
        #[end_layout]
    #[end_nest]
}
