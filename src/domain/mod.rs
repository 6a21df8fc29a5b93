pub mod listing;
pub mod options;

pub use listing::{Listing, Measure};
pub use options::{Certificate, City};
