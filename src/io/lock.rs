use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

const LOCK_FILE: &str = ".lock";
const RETRY_INTERVAL: Duration = Duration::from_millis(10);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not open lock file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("{path} is held by another tl process")]
    Busy { path: PathBuf },
}

/// Exclusive advisory lock on a data directory, held for one
/// read-modify-write cycle of the task list. Released on drop.
///
/// The lock file itself is left in place; unlinking it would let a
/// waiter that already opened the old inode lock a file nobody else sees.
#[derive(Debug)]
pub struct FileLock {
    _file: File,
}

impl FileLock {
    /// Take the lock, retrying until `timeout` elapses.
    pub fn acquire(data_dir: &Path, timeout: Duration) -> Result<Self, LockError> {
        let path = data_dir.join(LOCK_FILE);
        let open_err = |source| LockError::Open {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(data_dir).map_err(open_err)?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(open_err)?;

        let deadline = Instant::now() + timeout;
        while !try_lock_exclusive(&file) {
            if Instant::now() >= deadline {
                return Err(LockError::Busy { path });
            }
            thread::sleep(RETRY_INTERVAL);
        }
        Ok(FileLock { _file: file })
    }

    pub fn acquire_default(data_dir: &Path) -> Result<Self, LockError> {
        Self::acquire(data_dir, DEFAULT_TIMEOUT)
    }
}

#[cfg(unix)]
fn try_lock_exclusive(file: &File) -> bool {
    use std::os::unix::io::AsRawFd;
    // SAFETY: the descriptor is owned by `file` and valid for this call
    unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) == 0 }
}

#[cfg(not(unix))]
fn try_lock_exclusive(_file: &File) -> bool {
    true
}
