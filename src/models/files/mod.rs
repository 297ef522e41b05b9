pub mod entities;
pub mod responses;

pub use entities::*;
pub use responses::*;
