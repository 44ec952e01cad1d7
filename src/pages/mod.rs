//! Pages
//!
//! One component per route.

mod login;
mod register;
mod task_dashboard;
mod user_list;

pub use login::Login;
pub use register::Register;
pub use task_dashboard::TaskDashboard;
pub use user_list::UserList;
