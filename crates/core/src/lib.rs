//! Domain logic for the watchlist backend.
//!
//! Pure types and predicates shared by the database and API layers:
//! the error taxonomy, id/timestamp aliases, and the list-ownership
//! rule that every service operation is gated on. No I/O lives here.

pub mod error;
pub mod ownership;
pub mod types;
