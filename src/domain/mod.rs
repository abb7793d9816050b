//! Domain entities and ports.
//!
//! Purpose: Define the user record types exchanged with persistence adapters
//! and the port traits inbound adapters depend on. Identifier assignment is
//! owned by the persistence side; nothing in this module mints ids.

pub mod ports;
pub mod user;

pub use self::user::{NewUser, User, UserId};
