pub mod api_client;
pub mod session;

pub use api_client::*;
pub use session::*;
