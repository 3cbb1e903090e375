#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod font;
pub mod layout;
pub mod layout_dump;
pub mod raster;
pub mod render;
pub mod theme;
pub mod tree;
pub mod walk;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{CanvasConfig, Config, LayoutConfig, load_config};
pub use error::{Error, Result};
pub use layout::{DrawNode, Layout, LayoutContext, compute_layout};
pub use raster::PixelBuffer;
pub use render::{ImageEncoder, PngEncoder, render_to_buffer, write_image};
pub use theme::{Color, Theme};
pub use tree::{NodeKind, TreeNode};
pub use walk::walk_directory;
