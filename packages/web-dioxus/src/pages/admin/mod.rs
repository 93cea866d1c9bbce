//! Admin pages

mod applications;

pub use applications::*;
