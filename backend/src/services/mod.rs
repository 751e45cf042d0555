//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories, the password hasher and the token issuer.

pub mod laptop;
pub mod user;

pub use laptop::LaptopService;
pub use user::{Authenticated, UserService};
