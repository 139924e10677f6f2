//! This crate contains all shared UI for the workspace.

mod storage;
pub use storage::{make_store, PlatformStore};

mod session;
pub use session::{
    use_auth, use_login, use_route_table, use_router_navigator, AppAuth, AuthProvider,
    LogoutButton, RouterNavigator,
};

mod navbar;
pub use navbar::Navbar;

mod login_form;
pub use login_form::LoginForm;
