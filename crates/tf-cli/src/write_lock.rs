//! Advisory per-data-dir lock so two `taskflow` processes never interleave
//! whole-collection writes.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const LOCK_FILE: &str = "write.lock";
const LOCK_WAIT_TIMEOUT: Duration = Duration::from_secs(30);
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(200);

/// Removes the lock file on drop.
#[derive(Debug)]
pub struct WriteLockGuard {
    path: PathBuf,
}

impl Drop for WriteLockGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Holder {
    Live(u32),
    Dead,
    Unreadable,
}

/// Take the write lock in `data_dir`, waiting for a live holder to finish.
pub async fn acquire(data_dir: &Path) -> anyhow::Result<WriteLockGuard> {
    let path = data_dir.join(LOCK_FILE);
    let started = Instant::now();

    loop {
        let holder = match try_acquire(&path)? {
            Ok(guard) => return Ok(guard),
            Err(holder) => holder,
        };

        if holder == Holder::Dead {
            tracing::debug!(path = %path.display(), "removing stale write lock");
            let _ = std::fs::remove_file(&path);
            continue;
        }

        if started.elapsed() >= LOCK_WAIT_TIMEOUT {
            match holder {
                Holder::Live(pid) => anyhow::bail!(
                    "another taskflow process (pid {pid}) is writing; try again after it finishes"
                ),
                _ => anyhow::bail!(
                    "could not acquire write lock at {}; remove it if no taskflow process is running",
                    path.display()
                ),
            }
        }
        tokio::time::sleep(LOCK_RETRY_DELAY).await;
    }
}

fn try_acquire(path: &Path) -> anyhow::Result<Result<WriteLockGuard, Holder>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match OpenOptions::new().create_new(true).write(true).open(path) {
        Ok(mut file) => {
            writeln!(file, "{}", std::process::id())?;
            Ok(Ok(WriteLockGuard {
                path: path.to_path_buf(),
            }))
        }
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => Ok(Err(read_holder(path))),
        Err(err) => Err(err.into()),
    }
}

fn read_holder(path: &Path) -> Holder {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return Holder::Unreadable;
    };
    match contents.trim().parse::<u32>() {
        Ok(pid) if is_process_running(pid) => Holder::Live(pid),
        Ok(_) => Holder::Dead,
        Err(_) => Holder::Unreadable,
    }
}

#[cfg(unix)]
fn is_process_running(pid: u32) -> bool {
    std::process::Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .status()
        .is_ok_and(|status| status.success())
}

#[cfg(not(unix))]
fn is_process_running(_pid: u32) -> bool {
    true
}
