pub mod blog;
pub mod user;

pub use blog::*;
pub use user::*;
