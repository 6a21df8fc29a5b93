pub mod aggregates;
pub mod cache;
pub mod overview;

pub use cache::{selection_from, CitySelection, FilterCache};
pub use overview::Overview;
