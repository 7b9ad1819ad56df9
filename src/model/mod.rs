//! Domain model: places, their categories and embedded locations.
//!
//! These are plain data containers. Mapping them to and from store rows is
//! the job of [`crate::repositories`].

pub mod category;
pub mod location;
pub mod place;

pub use category::Category;
pub use location::Location;
pub use place::Place;
