mod error;
pub use error::SlideshowError;
mod instance;
pub use instance::{Instance, Track};
mod photo;
pub use photo::{Orientation, Photo};
mod slide;
pub use slide::{union_count, Slide};
mod solution;
pub use solution::{calc_score, Solution, SolutionStats};
