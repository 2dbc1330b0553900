// Utils compartidos

pub mod cookies;
pub mod navigation;

pub use cookies::*;
pub use navigation::*;
