use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{add_exact, format_amount, is_amount_valid, is_email_valid, sub_exact};
use crate::error::AccountError;

/// A single bank account: an email identifier and a non-negative balance.
///
/// The email is fixed at construction. The balance only changes through
/// [`deposit`](Account::deposit), [`withdraw`](Account::withdraw) and
/// [`transfer`](Account::transfer), and never drops below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AccountSnapshot")]
pub struct Account {
    email: String,
    balance: f64,
}

/// Unvalidated serialized form; goes through [`Account::new`] on the way in.
#[derive(Deserialize)]
struct AccountSnapshot {
    email: String,
    balance: f64,
}

impl TryFrom<AccountSnapshot> for Account {
    type Error = AccountError;

    fn try_from(snapshot: AccountSnapshot) -> Result<Self, Self::Error> {
        Account::new(snapshot.email, snapshot.balance)
    }
}

impl Account {
    /// Open an account.
    ///
    /// A starting balance of zero is accepted even though zero is not a
    /// valid amount for any other operation.
    pub fn new(email: impl Into<String>, starting_balance: f64) -> Result<Self, AccountError> {
        let email = email.into();

        if !is_email_valid(&email) {
            warn!(%email, "rejected account: invalid email");
            return Err(AccountError::invalid_argument(format!(
                "Email address {email:?} is invalid, cannot create account"
            )));
        }

        if starting_balance != 0.0 && !is_amount_valid(starting_balance) {
            warn!(%email, starting_balance, "rejected account: invalid starting balance");
            return Err(AccountError::invalid_argument(format!(
                "Starting balance {starting_balance} is invalid, cannot create account"
            )));
        }

        // -0.0 passes the zero check above; store it as plain zero.
        let balance = if starting_balance == 0.0 {
            0.0
        } else {
            starting_balance
        };

        debug!(%email, balance, "account opened");
        Ok(Self { email, balance })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// See [`is_amount_valid`](crate::is_amount_valid).
    pub fn is_amount_valid(amount: f64) -> bool {
        is_amount_valid(amount)
    }

    /// See [`is_email_valid`](crate::is_email_valid).
    pub fn is_email_valid(email: &str) -> bool {
        is_email_valid(email)
    }

    /// Add `amount` to the balance.
    ///
    /// There is no upper limit, but a deposit that would push the balance
    /// past the largest finite `f64` fails with `InvalidArgument` even when
    /// `amount` itself is valid.
    pub fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        self.check_amount(amount, "deposit")?;

        let balance = add_exact(self.balance, amount);
        if !balance.is_finite() {
            warn!(email = %self.email, amount, "rejected deposit: balance overflow");
            return Err(AccountError::invalid_argument(format!(
                "Amount {amount} would overflow the balance, cannot deposit"
            )));
        }

        self.balance = balance;
        debug!(email = %self.email, amount, balance, "deposit");
        Ok(())
    }

    /// Remove `amount` from the balance. Withdrawing the whole balance is
    /// allowed and leaves it at zero.
    pub fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        self.check_amount(amount, "withdraw")?;
        self.check_funds(amount)?;

        self.balance = sub_exact(self.balance, amount);
        debug!(email = %self.email, amount, balance = self.balance, "withdrawal");
        Ok(())
    }

    /// Move `amount` from this account into `other`.
    ///
    /// `other` is credited through its own [`deposit`](Account::deposit)
    /// before this account is debited. Keep this order: the credit is the
    /// only step that can still fail (balance overflow), so running it first
    /// means an error leaves neither account touched.
    pub fn transfer(&mut self, amount: f64, other: &mut Account) -> Result<(), AccountError> {
        self.check_amount(amount, "transfer")?;
        self.check_funds(amount)?;

        other.deposit(amount)?;
        self.balance = sub_exact(self.balance, amount);

        debug!(
            from = %self.email,
            to = %other.email,
            amount,
            balance = self.balance,
            "transfer"
        );
        Ok(())
    }

    fn check_amount(&self, amount: f64, operation: &str) -> Result<(), AccountError> {
        if is_amount_valid(amount) {
            return Ok(());
        }

        warn!(email = %self.email, amount, operation, "rejected: invalid amount");
        Err(AccountError::invalid_argument(format!(
            "Amount {amount} is invalid, cannot {operation}"
        )))
    }

    fn check_funds(&self, amount: f64) -> Result<(), AccountError> {
        if amount <= self.balance {
            return Ok(());
        }

        warn!(
            email = %self.email,
            amount,
            balance = self.balance,
            "rejected: insufficient funds"
        );
        Err(AccountError::InsufficientFunds {
            balance: self.balance,
            required: amount,
        })
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.email, format_amount(self.balance))
    }
}
