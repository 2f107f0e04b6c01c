//! Reusable UI components

mod article_tile;
mod container;
mod fixed_banner;
mod header;
mod loading;
mod reveal_system;
mod site_layout;

pub use article_tile::*;
pub use container::*;
pub use fixed_banner::*;
pub use header::*;
pub use loading::*;
pub use reveal_system::*;
pub use site_layout::*;
