//! Pluggable session storage.
//!
//! The session itself is opaque to the facade: the transport writes whatever
//! it needs to resume an authorization (auth key, DC, salts) and reads it back
//! on the next connect. The facade only decides *where* it lives and deletes
//! it on [`crate::Client::reset_session`].
//!
//! Two built-in stores are provided:
//! * [`FileSessionStore`]: one `<phone_number>.data` file per account (default).
//! * [`InMemoryStore`]: nothing touches the disk.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File extension of persisted sessions.
pub const SESSION_EXTENSION: &str = "data";

// ─── Trait ────────────────────────────────────────────────────────────────────

/// Where and how the transport's session bytes are persisted.
pub trait SessionStore: Send + Sync {
    /// Prepare the store before the transport uses it.
    fn open(&self) -> io::Result<()> {
        Ok(())
    }

    /// Persist the given session.
    fn save(&self, data: &[u8]) -> io::Result<()>;

    /// Load a previously persisted session, or return `None` if none exists.
    fn load(&self) -> io::Result<Option<Vec<u8>>>;

    /// Remove the stored session. Succeeds if there is nothing to remove.
    fn delete(&self) -> io::Result<()>;

    /// Whether a session is currently stored.
    fn exists(&self) -> bool;

    /// Human-readable name of this store (for log messages).
    fn name(&self) -> &str;
}

/// Path of the session file for `phone_number` inside `dir`.
pub fn session_path(dir: &Path, phone_number: &str) -> PathBuf {
    dir.join(format!("{phone_number}.{SESSION_EXTENSION}"))
}

// ─── FileSessionStore ─────────────────────────────────────────────────────────

/// The default store: a single file named after the phone number.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store for `phone_number`'s `<phone_number>.data` file in `dir`.
    pub fn for_phone(dir: &Path, phone_number: &str) -> Self {
        Self::new(session_path(dir, phone_number))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn open(&self) -> io::Result<()> {
        match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => std::fs::create_dir_all(dir),
            None      => Ok(()),
        }
    }

    fn save(&self, data: &[u8]) -> io::Result<()> {
        std::fs::write(&self.path, data)
    }

    fn load(&self) -> io::Result<Option<Vec<u8>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        std::fs::read(&self.path).map(Some)
    }

    fn delete(&self) -> io::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str { "file" }
}

// ─── InMemoryStore ───────────────────────────────────────────────────────────

/// An ephemeral store that keeps the session in memory only.
///
/// Useful for testing or for short-lived scripts.
#[derive(Default)]
pub struct InMemoryStore {
    data: Mutex<Option<Vec<u8>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> io::Result<std::sync::MutexGuard<'_, Option<Vec<u8>>>> {
        self.data
            .lock()
            .map_err(|_| io::Error::other("session store lock poisoned"))
    }
}

impl SessionStore for InMemoryStore {
    fn save(&self, data: &[u8]) -> io::Result<()> {
        *self.slot()? = Some(data.to_vec());
        Ok(())
    }

    fn load(&self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.slot()?.clone())
    }

    fn delete(&self) -> io::Result<()> {
        *self.slot()? = None;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.slot().map(|s| s.is_some()).unwrap_or(false)
    }

    fn name(&self) -> &str { "in-memory" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_file_is_named_after_phone() {
        let p = session_path(Path::new("/var/lib/easytl"), "+15550001111");
        assert_eq!(p, Path::new("/var/lib/easytl/+15550001111.data"));
    }

    #[test]
    fn file_store_save_load_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::for_phone(dir.path(), "+100");

        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), None);

        store.save(b"auth-key").unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap().as_deref(), Some(&b"auth-key"[..]));

        store.delete().unwrap();
        assert!(!store.exists());
        // deleting again is a no-op
        store.delete().unwrap();
    }

    #[test]
    fn file_store_open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::for_phone(&dir.path().join("nested"), "+100");
        store.open().unwrap();
        assert!(!store.exists());
        store.save(b"x").unwrap();
        assert!(store.exists());
    }

    #[test]
    fn in_memory_store_roundtrip() {
        let store = InMemoryStore::new();
        assert!(!store.exists());
        store.save(b"k").unwrap();
        assert_eq!(store.load().unwrap(), Some(b"k".to_vec()));
        store.delete().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn poisoned_in_memory_store_reports_io_error() {
        let store = std::sync::Arc::new(InMemoryStore::new());
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.data.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err = store.save(b"k").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(err.to_string(), "session store lock poisoned");
    }
}
