//! Client session: access to the token kept in browser storage.
//!
//! The navigation guard and the login/logout flows never touch
//! `localStorage` directly. They go through a [`Session`] provided via
//! Leptos context, which wraps whichever [`TokenStore`] fits the build:
//! [`LocalTokenStore`] in the hydrated browser app, [`MemoryTokenStore`]
//! during SSR and in tests.

use std::sync::{Arc, RwLock};

#[cfg(feature = "hydrate")]
use parley_types::TOKEN_KEY;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// Key-value backend holding the session token.
///
/// Reads never fail: a backend that cannot be reached reports no token.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-process token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        let mut slot = self
            .token
            .write()
            .map_err(|e| StorageError::Rejected(e.to_string()))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut slot = self
            .token
            .write()
            .map_err(|e| StorageError::Rejected(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

/// Browser `localStorage`, looked up on every call so nothing is cached.
///
/// Outside a hydrate build there is no browser: reads report no token and
/// writes fail with [`StorageError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(TOKEN_KEY, token)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .remove_item(TOKEN_KEY)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

/// Shared handle to the token store. Cheap to clone.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Session for the current build: `localStorage` when hydrated,
    /// an empty in-memory store on the server.
    pub fn browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(LocalTokenStore)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(MemoryTokenStore::default())
        }
    }

    /// Current token. An empty stored string counts as no token.
    pub fn token(&self) -> Option<String> {
        self.store.get().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(token)
    }

    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.store.clear()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
