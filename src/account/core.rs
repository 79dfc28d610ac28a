use serde::{Deserialize, Serialize};

/// The ID of an account, assigned by the repository.
pub type AccountId = i64;

/// A bank account and the money held in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The id for the account.
    pub id: AccountId,
    /// The name of the person who owns the account.
    pub holder: String,
    /// The balance.
    pub balance: f64,
}

impl Account {
    /// Create an account with an already assigned `id`.
    ///
    /// Used for seeding a repository. New accounts should go through
    /// [AccountRepository::create](crate::AccountRepository::create)
    /// so that the ID is allocated for them.
    pub fn new(id: AccountId, holder: &str, balance: f64) -> Self {
        Self {
            id,
            holder: holder.to_owned(),
            balance,
        }
    }
}

/// The data for opening a new account.
///
/// Missing fields deserialize to an empty holder and a zero balance, which
/// the repository rejects. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewAccount {
    /// The name of the account holder.
    #[serde(default)]
    pub holder: String,
    /// The opening balance.
    #[serde(default)]
    pub balance: f64,
}

/// A partial update to an existing account.
///
/// An empty holder or a zero balance leaves the existing value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AccountPatch {
    /// The new holder, or empty to keep the current one.
    #[serde(default)]
    pub holder: String,
    /// The new balance, or zero to keep the current one.
    #[serde(default)]
    pub balance: f64,
}

impl AccountPatch {
    /// Merge the patch into `account`, keeping fields the patch leaves unset.
    pub(crate) fn apply(&self, account: &mut Account) {
        if !self.holder.is_empty() {
            account.holder = self.holder.clone();
        }

        if self.balance != 0.0 {
            account.balance = self.balance;
        }
    }
}

/// The accounts a fresh server starts with.
pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account::new(1, "João Silva", 5000.0),
        Account::new(2, "Maria Oliveira", 3000.0),
    ]
}
