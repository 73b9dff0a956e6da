pub mod admin;
pub mod redirect;

pub use admin::{admin_disabled_routes, admin_routes, AdminService};
pub use redirect::{redirect_routes, RedirectService};
