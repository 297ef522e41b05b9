pub mod common;

pub mod assignments;
pub mod auth;
pub mod files;
pub mod submissions;
pub mod teaching;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::PaginationInfo;
pub use common::response::ApiResponse;
