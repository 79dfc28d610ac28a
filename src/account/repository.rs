//! The in-memory store that owns every account.

use std::{
    str::FromStr,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Error,
    account::{
        Account, AccountId, AccountPatch, NewAccount,
        links::{LinkSet, build_link_set},
    },
};

/// How the repository picks the ID for a new account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdAllocation {
    /// One more than the highest ID ever held by the repository.
    ///
    /// IDs are never reused, even after the newest account is deleted.
    #[default]
    Monotonic,
    /// One more than the ID of the last account in insertion order, or 1 if
    /// there are no accounts.
    ///
    /// Deleting the last account frees its ID for the next account.
    LastRecord,
}

impl FromStr for IdAllocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monotonic" => Ok(IdAllocation::Monotonic),
            "last-record" => Ok(IdAllocation::LastRecord),
            other => Err(format!(
                "unknown ID allocation \"{other}\", expected \"monotonic\" or \"last-record\""
            )),
        }
    }
}

#[derive(Debug)]
struct Accounts {
    records: Vec<Account>,
    /// The next ID under [IdAllocation::Monotonic].
    next_id: AccountId,
}

impl Accounts {
    fn position(&self, id: AccountId) -> Option<usize> {
        self.records.iter().position(|account| account.id == id)
    }

    fn allocate_id(&mut self, allocation: IdAllocation) -> AccountId {
        let id = match allocation {
            IdAllocation::Monotonic => self.next_id,
            IdAllocation::LastRecord => self.records.last().map_or(1, |account| account.id + 1),
        };

        self.next_id = self.next_id.max(id + 1);

        id
    }
}

/// Owns the collection of accounts and serializes access to it.
///
/// Cloning the repository is cheap and every clone shares the same accounts.
/// Each operation holds the lock for its whole duration, so concurrent
/// requests cannot interleave within an operation.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    accounts: Arc<Mutex<Accounts>>,
    host: Option<String>,
    id_allocation: IdAllocation,
}

impl AccountRepository {
    /// Create an empty repository.
    ///
    /// `host` is the base URL used for the links returned by
    /// [AccountRepository::create], e.g. "http://localhost:3000".
    pub fn new(host: Option<String>, id_allocation: IdAllocation) -> Self {
        Self::with_accounts(Vec::new(), host, id_allocation)
    }

    /// Create a repository that starts with `accounts`.
    ///
    /// The accounts are kept in the given order and their IDs are expected
    /// to be unique. Under [IdAllocation::LastRecord] the IDs must also be in
    /// ascending order, otherwise a new account can be given an ID that is
    /// already taken.
    pub fn with_accounts(
        accounts: Vec<Account>,
        host: Option<String>,
        id_allocation: IdAllocation,
    ) -> Self {
        debug_assert!(
            id_allocation != IdAllocation::LastRecord
                || accounts.windows(2).all(|pair| pair[0].id < pair[1].id),
            "seeded account IDs must be ascending under last-record allocation"
        );

        let next_id = accounts
            .iter()
            .map(|account| account.id)
            .max()
            .map_or(1, |max_id| max_id + 1);

        Self {
            accounts: Arc::new(Mutex::new(Accounts {
                records: accounts,
                next_id,
            })),
            host,
            id_allocation,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Accounts>, Error> {
        self.accounts.lock().map_err(|error| {
            tracing::error!("could not acquire repository lock: {error}");
            Error::RepositoryLockError
        })
    }

    /// Get every account in insertion order.
    pub fn list(&self) -> Result<Vec<Account>, Error> {
        let accounts = self.lock()?;
        tracing::debug!("Listing {} accounts", accounts.records.len());

        Ok(accounts.records.clone())
    }

    /// Get the account with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no account has the ID `id`.
    pub fn get(&self, id: AccountId) -> Result<Account, Error> {
        let accounts = self.lock()?;

        accounts
            .records
            .iter()
            .find(|account| account.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    /// Open a new account and get the links for it.
    ///
    /// # Errors
    /// Returns [Error::InvalidInput] if the holder is empty or the balance is
    /// zero. The repository is left unchanged in that case.
    pub fn create(&self, new_account: NewAccount) -> Result<(Account, LinkSet), Error> {
        if new_account.holder.is_empty() || new_account.balance == 0.0 {
            tracing::debug!("Rejected new account {new_account:?}");
            return Err(Error::InvalidInput);
        }

        let mut accounts = self.lock()?;
        let id = accounts.allocate_id(self.id_allocation);
        let account = Account {
            id,
            holder: new_account.holder,
            balance: new_account.balance,
        };
        accounts.records.push(account.clone());
        drop(accounts);

        tracing::info!("Created account {id}");

        let links = build_link_set(self.host.as_deref(), id);

        Ok((account, links))
    }

    /// Merge `patch` into the account with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no account has the ID `id`.
    pub fn update(&self, id: AccountId, patch: &AccountPatch) -> Result<Account, Error> {
        let mut accounts = self.lock()?;
        let account = accounts
            .records
            .iter_mut()
            .find(|account| account.id == id)
            .ok_or(Error::NotFound)?;

        patch.apply(account);
        tracing::info!("Updated account {id}");

        Ok(account.clone())
    }

    /// Remove the account with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no account has the ID `id`.
    pub fn delete(&self, id: AccountId) -> Result<(), Error> {
        let mut accounts = self.lock()?;
        let index = accounts.position(id).ok_or(Error::NotFound)?;
        accounts.records.remove(index);
        tracing::info!("Deleted account {id}");

        Ok(())
    }

    #[cfg(test)]
    fn len(&self) -> Result<usize, Error> {
        Ok(self.lock()?.records.len())
    }
}
