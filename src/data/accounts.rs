//! Player accounts
//!
//! Placeholder for real authorization: a fixed list picked by number.

use crate::core::error::{BrawlError, Result};

pub const ACCOUNTS: [&str; 5] = [
    "John Doe",
    "Jamie Williams",
    "Toby Robinson",
    "Adam Marshall",
    "Luke Howard",
];

/// Account name for a 1-based selection
pub fn account(selection: usize) -> Result<&'static str> {
    selection
        .checked_sub(1)
        .and_then(|i| ACCOUNTS.get(i).copied())
        .ok_or(BrawlError::InvalidSelection {
            value: selection.to_string(),
            max: ACCOUNTS.len() as u32,
        })
}
