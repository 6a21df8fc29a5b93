pub mod about;
pub mod prediction;
pub mod visualization;

pub use about::about_page;
pub use prediction::prediction_page;
pub use visualization::{city_district_chart, visualization_page};
