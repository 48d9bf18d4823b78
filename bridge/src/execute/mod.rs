//! Execute handlers for the BTC bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `bridge` - Deposit and Withdraw
//! - `registry` - Oracle and whitelist management
//! - `admin` - Pause, unpause, fee and deposit ceiling

mod admin;
mod bridge;
mod registry;

pub use admin::*;
pub use bridge::*;
pub use registry::*;
