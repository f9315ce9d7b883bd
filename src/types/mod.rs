//! Shared data structures for wellbore volume accounting
//!
//! This module defines the data model consumed and produced by the engine:
//! - Pipe descriptors for the outer string stack (casing, liners, riser, open hole)
//! - Inner strings run inside that stack (drill pipe or tubing)
//! - Point-of-interest and suppression inputs
//! - Result records handed to rendering and reporting collaborators

mod inner_string;
mod pipe;
mod poi;
mod results;

pub use inner_string::*;
pub use pipe::*;
pub use poi::*;
pub use results::*;
