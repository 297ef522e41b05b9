pub mod academics;

pub mod assignments;

pub mod auth;

pub mod files;

pub mod parents;

pub mod submissions;

pub use academics::configure_academics_routes;
pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use files::configure_file_routes;
pub use parents::configure_parents_routes;
pub use submissions::configure_submissions_routes;
