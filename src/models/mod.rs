pub mod user;
pub mod language;
pub mod contribution;

pub use user::*;
pub use language::*;
pub use contribution::*;
