//! Pages
//!
//! One component per route. Each page owns its form state and fetches what
//! it shows on mount; nothing is shared between pages except `AuthContext`.

mod dashboard;
mod edit_system;
mod login;
mod register;
mod system_include;

pub use dashboard::DashboardPage;
pub use edit_system::EditSystemPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use system_include::SystemIncludePage;
