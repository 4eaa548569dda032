mod sales_management;
mod user_management;

pub use sales_management::{SalesApiError, SalesManagement};
pub use user_management::{UserApiError, UserManagement};
