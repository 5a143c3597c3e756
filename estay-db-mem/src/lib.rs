//! In-memory storage backend.
//!
//! All records live in a single [`Store`] behind a reader/writer lock.
//! Only one connection with write access is handed out at a time;
//! transactions are implemented by snapshotting the store and restoring
//! the snapshot on error.

use std::{cell::RefCell, sync::Arc};

use parking_lot::{RwLock, RwLockWriteGuard};
use thiserror::Error;

use estay_core::usecases as uc;

mod repo_impl;
mod store;

pub use self::store::{Store, StoreStats};

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("The transaction was rolled back")]
    Rollback,
    #[error("The transaction lost a conflict and should be retried")]
    Conflict,
    #[error(transparent)]
    Usecase(#[from] uc::Error),
}

impl From<estay_core::RepoError> for TransactionError {
    fn from(err: estay_core::RepoError) -> Self {
        Self::Usecase(err.into())
    }
}

pub struct DbReadWrite<'a> {
    // The repository traits take `&self`, so the guarded store has to be
    // wrapped in a `RefCell` to hand out mutable borrows.
    pub(crate) store: RefCell<RwLockWriteGuard<'a, Store>>,
}

impl<'a> DbReadWrite<'a> {
    fn new(store: RwLockWriteGuard<'a, Store>) -> Self {
        Self {
            store: RefCell::new(store),
        }
    }

    pub fn stats(&self) -> StoreStats {
        self.store.borrow().record_counts()
    }

    /// Run `f` atomically: on error the store is restored to the state it
    /// had when the transaction started.
    pub fn transaction<T, F, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
    {
        let snapshot = (**self.store.borrow()).clone();
        match f(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                **self.store.borrow_mut() = snapshot;
                Err(err)
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct Connections {
    store: Arc<RwLock<Store>>,
}

impl Connections {
    pub fn init() -> Self {
        Self::default()
    }

    pub fn from_store(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        DbReadWrite::new(self.store.write())
    }
}
