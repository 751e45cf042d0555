//! Laptop Inventory Shared Library
//!
//! Domain models, API request/response types, validation helpers and
//! the authentication error taxonomy shared by the backend and its tests.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{Laptop, LaptopId, LaptopPatch, NewLaptop, User, UserId};
pub use types::*;
