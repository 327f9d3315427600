// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use bank_account::Account;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber honouring RUST_LOG. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Convert whole cents into the nearest f64, e.g. 1234 -> 12.34
pub fn cents(amount: i64) -> f64 {
    amount as f64 / 100.0
}

/// Test fixture: accounts used across scenarios
pub struct StandardAccounts;

impl StandardAccounts {
    /// Funded source account with 200.00
    pub fn source() -> Result<Account> {
        init_tracing();
        Ok(Account::new("a@b.com", 200.0)?)
    }

    /// Empty destination account
    pub fn destination() -> Result<Account> {
        init_tracing();
        Ok(Account::new("x@y.com", 0.0)?)
    }
}
