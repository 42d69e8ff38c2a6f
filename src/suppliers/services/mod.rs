//! # Services
//!
//! The store depends on three small collaborators that are kept behind
//! narrow seams so tests can replace them:
//!
//! - [`id_gen`]: produces supplier ids
//! - [`clock`]: produces the creation timestamp
//! - [`validation`]: name and email rules for new records

pub mod clock;
pub mod id_gen;
pub mod validation;

pub use clock::{format_timestamp, Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use id_gen::{IdGenerator, SequentialIds, UuidGenerator};
pub use validation::{is_valid_email, validate_supplier, ValidationError};
