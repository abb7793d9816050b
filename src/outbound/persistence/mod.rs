//! Persistence adapters.
//!
//! The storage engine itself is outside this service's remit; the bundled
//! adapter keeps records in process memory and owns identifier assignment,
//! which is all the HTTP layer requires of its collaborator.

mod memory;

pub use memory::InMemoryUserRepository;
