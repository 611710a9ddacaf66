//! Identity collaborator.
//!
//! The core only ever needs an opaque user id and a signed-in/signed-out
//! signal. Identity is held explicitly in a hub that callers share, never in
//! process-global state; services resolve it per call.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
}

impl Identity {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self { id: id.into() }
    }
}

type Listener = Arc<dyn Fn(Option<&Identity>) + Send + Sync>;

struct HubInner {
    current: Option<Identity>,
    listeners: Vec<(u64, Listener)>,
    next_token: u64,
}

/// Shared holder of the current optional identity, with change
/// notifications. Cloning shares the same state.
#[derive(Clone)]
pub struct IdentityHub {
    inner: Arc<Mutex<HubInner>>,
}

impl IdentityHub {
    pub fn new(initial: Option<Identity>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HubInner {
                current: initial,
                listeners: Vec::new(),
                next_token: 1,
            })),
        }
    }

    pub fn signed_out() -> Self {
        Self::new(None)
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.inner.lock().expect("identity hub poisoned").current.clone()
    }

    /// Register a change listener; returns a token for [`unsubscribe`].
    ///
    /// [`unsubscribe`]: IdentityHub::unsubscribe
    pub fn subscribe<F>(&self, listener: F) -> u64
    where
        F: Fn(Option<&Identity>) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock().expect("identity hub poisoned");
        let token = inner.next_token;
        inner.next_token += 1;
        inner.listeners.push((token, Arc::new(listener)));
        token
    }

    pub fn unsubscribe(&self, token: u64) {
        let mut inner = self.inner.lock().expect("identity hub poisoned");
        inner.listeners.retain(|(t, _)| *t != token);
    }

    /// Replace the current identity and notify every listener.
    pub fn set_identity(&self, identity: Option<Identity>) {
        // Listeners run outside the lock so they may call back into the hub.
        let snapshot: Vec<Listener> = {
            let mut inner = self.inner.lock().expect("identity hub poisoned");
            inner.current = identity.clone();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in snapshot {
            listener(identity.as_ref());
        }
    }

    pub fn sign_out(&self) {
        self.set_identity(None);
    }
}

/// File-backed identity for the CLI: the signed-in user id lives on one line
/// under the config directory. `login` writes it, `logout` removes it.
pub struct FileIdentity {
    path: PathBuf,
}

impl FileIdentity {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the signed-in identity, if any.
    pub fn load(&self) -> Option<Identity> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let id = raw.lines().next()?.trim();
        if id.is_empty() {
            None
        } else {
            Some(Identity::new(id))
        }
    }

    pub fn store(&self, user: &str) -> AppResult<()> {
        let user = user.trim();
        if user.is_empty() {
            return Err(AppError::Config("user id must not be empty".into()));
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{}\n", user))?;
        Ok(())
    }

    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Build a hub seeded from the file.
    pub fn hub(&self) -> IdentityHub {
        IdentityHub::new(self.load())
    }
}
