pub mod cli;
pub mod error;
pub mod geometry;
pub mod input;
pub mod output;
pub mod relations;

pub use cli::{CliArgs, OutputFormat};
pub use error::RectoError;
pub use geometry::{Point, Rect};
pub use input::{WorkingSet, load_rectangles, load_rectangles_from_file};
pub use relations::{Intersection, RectReport, analyze};
