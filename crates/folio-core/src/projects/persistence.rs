use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// One named durable slot holding the whole serialized collection.
///
/// The slot is read once at startup and overwritten wholesale after every
/// mutation. There are no partial updates.
pub trait StorageSlot {
    /// Read the slot contents. `Ok(None)` means nothing has been stored yet.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the slot contents.
    fn write(&mut self, contents: &str) -> io::Result<()>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Slot backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp_file = self.path.with_extension("json.tmp");

        if let Err(e) = fs::write(&temp_file, contents) {
            cleanup_temp_file(&temp_file, &e);
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp_file, &self.path) {
            cleanup_temp_file(&temp_file, &e);
            return Err(e);
        }

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn cleanup_temp_file(temp_file: &Path, original_error: &io::Error) {
    if temp_file.exists()
        && let Err(cleanup_err) = fs::remove_file(temp_file)
    {
        tracing::warn!(
            event = "core.projects.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            "Failed to clean up temp file after write error"
        );
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<String>,
    fail_writes: bool,
    writes: usize,
}

/// In-memory slot. Clones share the same underlying storage, so a test (or an
/// embedding UI) can keep a handle and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    state: Rc<RefCell<MemoryState>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `contents`, as if written by an earlier session.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let slot = Self::new();
        slot.state.borrow_mut().contents = Some(contents.into());
        slot
    }

    pub fn contents(&self) -> Option<String> {
        self.state.borrow().contents.clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }

    /// Make every following write fail (quota exceeded, read-only media...).
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.contents())
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(io::Error::other("storage quota exceeded"));
        }
        state.contents = Some(contents.to_string());
        state.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Location of the projects file: `FOLIO_PROJECTS_FILE` if set, otherwise
/// `~/.folio/projects.json`.
///
/// Falls back to `./.folio/projects.json` if the home directory cannot be
/// determined.
pub fn projects_file_path() -> PathBuf {
    if let Ok(path_str) = std::env::var("FOLIO_PROJECTS_FILE")
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::home_dir() {
        Some(home) => home.join(".folio").join("projects.json"),
        None => {
            tracing::error!(
                event = "core.projects.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".folio").join("projects.json")
        }
    }
}

/// Test utilities for projects persistence.
///
/// Public so the CLI crate can use the env lock/guard in its tests.
#[doc(hidden)]
pub mod test_helpers {
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify FOLIO_PROJECTS_FILE env var.
    pub static PROJECTS_FILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard that removes FOLIO_PROJECTS_FILE env var on drop.
    pub struct ProjectsFileEnvGuard;

    impl ProjectsFileEnvGuard {
        pub fn new(path: &std::path::Path) -> Self {
            // SAFETY: Caller must hold PROJECTS_FILE_ENV_LOCK to serialize access
            // from Rust test code.
            unsafe { std::env::set_var("FOLIO_PROJECTS_FILE", path) };
            Self
        }
    }

    impl Drop for ProjectsFileEnvGuard {
        fn drop(&mut self) {
            // SAFETY: Caller holds PROJECTS_FILE_ENV_LOCK for the guard's lifetime.
            unsafe { std::env::remove_var("FOLIO_PROJECTS_FILE") };
        }
    }
}
