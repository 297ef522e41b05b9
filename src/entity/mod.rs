//! SeaORM 数据库实体定义

pub mod prelude;

pub mod assignments;
pub mod files;
pub mod guardian_links;
pub mod streams;
pub mod student_profiles;
pub mod subjects;
pub mod submissions;
pub mod teaching_assignments;
pub mod terms;
pub mod users;
