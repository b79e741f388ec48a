mod load;
mod types;

pub use load::{WorkingSet, load_rectangles, load_rectangles_from_file};
pub use types::RectangleRecord;
