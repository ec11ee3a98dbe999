//! Core business logic module
//!
//! This module contains the account management components:
//! - `registry` - Account ownership, id allocation, deposits, withdrawals and the lottery
//! - `lottery` - Weighted selection over lottery candidates
//! - `clock` - The explicitly settable system date

pub mod clock;
pub mod lottery;
pub mod registry;

pub use clock::SystemClock;
pub use registry::AccountRegistry;
