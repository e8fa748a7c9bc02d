//! Shift reconstruction engine. Pure and synchronous: every function works
//! on an in-memory table snapshot and returns fresh records.

pub mod breaks;
pub mod consolidate;
pub mod daily;
pub mod intersect;
pub mod keywords;
pub mod logic;
pub mod meal_window;
pub mod normalize;
pub mod segment;

pub use logic::Core;
