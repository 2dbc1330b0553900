pub mod auth;
pub mod place;
pub mod review;

pub use auth::*;
pub use place::*;
pub use review::*;
