//! Page components

mod blog;
mod landing;
mod not_found;

pub use blog::*;
pub use landing::*;
pub use not_found::*;
