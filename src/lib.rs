//! textdraw — composable 2D diagrams rendered as styled Unicode text
//! grids, with an automatic orthogonal path router.
//!
//! Public surface mirrors the original package's own `__init__.py`:
//! `Point`, `BoundingBox`, `Style`, `Pixel`, `PixelGroup`/`Group`, `Box`
//! (here `TextBox`), `TextPath`, `render`, and `multipath`.

pub mod compositor;
pub mod config;
pub mod error;
pub mod geometry;
pub mod object;
pub mod pixel;
pub mod routing;
pub mod style;
pub mod textpath;

pub use compositor::render;
pub use config::RenderConfig;
pub use error::TextDrawError;
pub use geometry::{BoundingBox, Direction, Point};
pub use object::{BorderType, Group, Object, Pixel, PixelGroup, TextBox, TextObject};
pub use pixel::StyledChar;
pub use routing::multipath::multipath;
pub use routing::{CharSet, LineStyle};
pub use style::{Color, Effect, Style};
pub use textpath::TextPath;
