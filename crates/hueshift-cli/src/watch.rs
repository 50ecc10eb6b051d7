//! Change detection for `hueshift watch`.
//!
//! Filesystem events arrive from a `notify` watcher on the file's directory,
//! since editors often save by replacing the file. Each event for the watched
//! name restarts a quiet period; the conversion runs once the file has been
//! left alone for the whole period, so a burst of saves produces one
//! conversion of the final contents.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Longest wait for a filesystem event before the caller gets control back.
pub const WAIT_INTERVAL: Duration = Duration::from_millis(100);

/// Fires once after changes stop arriving for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    last_change: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_change: None,
        }
    }

    /// Records a change at `now`, superseding any pending one.
    pub fn notify(&mut self, now: Instant) {
        self.last_change = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_change.is_some()
    }

    /// True exactly once per settled burst of changes.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.last_change {
            Some(at) if now.saturating_duration_since(at) >= self.delay => {
                self.last_change = None;
                true
            }
            _ => false,
        }
    }
}

/// Watches one file and reports when a debounced change is ready.
pub struct FileWatch {
    path: PathBuf,
    events: Receiver<notify::Result<Event>>,
    debouncer: Debouncer,
    // Dropping the watcher closes the channel.
    _watcher: RecommendedWatcher,
}

impl FileWatch {
    /// Starts watching `path`, which must already exist.
    pub fn new(path: impl Into<PathBuf>, delay: Duration) -> notify::Result<Self> {
        let path = path.into();
        std::fs::metadata(&path)?;

        let (tx, events) = channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        watcher.watch(watched_dir(&path), RecursiveMode::NonRecursive)?;

        Ok(Self {
            path,
            events,
            debouncer: Debouncer::new(delay),
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Waits up to `timeout` for events; true when a change has settled.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        match self.events.recv_timeout(timeout) {
            Ok(event) => {
                self.record(event);
                while let Ok(event) = self.events.try_recv() {
                    self.record(event);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!(path = %self.path.display(), "file watcher stopped");
            }
        }
        self.debouncer.fire(Instant::now())
    }

    fn record(&mut self, event: notify::Result<Event>) {
        match event {
            Ok(event) if self.concerns(&event) => {
                tracing::debug!(path = %self.path.display(), kind = ?event.kind, "change detected");
                self.debouncer.notify(Instant::now());
            }
            Ok(_) => {}
            Err(error) => tracing::warn!(%error, "watch error"),
        }
    }

    fn concerns(&self, event: &Event) -> bool {
        matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        ) && event
            .paths
            .iter()
            .any(|changed| changed.file_name() == self.path.file_name())
    }
}

fn watched_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::new(DELAY);
        let now = Instant::now();
        assert!(!debouncer.fire(now));
        assert!(!debouncer.fire(now + DELAY * 4));
    }

    #[test]
    fn fires_once_after_the_delay() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();
        debouncer.notify(start);

        assert!(!debouncer.fire(start + Duration::from_millis(499)));
        assert!(debouncer.fire(start + DELAY));
        assert!(!debouncer.fire(start + DELAY * 2));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn newer_changes_supersede_pending_ones() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();
        debouncer.notify(start);
        debouncer.notify(start + Duration::from_millis(400));

        assert!(!debouncer.fire(start + Duration::from_millis(600)));
        assert!(debouncer.fire(start + Duration::from_millis(900)));
    }

    #[test]
    fn zero_delay_fires_immediately() {
        let mut debouncer = Debouncer::new(Duration::ZERO);
        let now = Instant::now();
        debouncer.notify(now);
        assert!(debouncer.fire(now));
    }

    #[test]
    fn bare_file_names_watch_the_current_directory() {
        assert_eq!(watched_dir(Path::new("theme.css")), Path::new("."));
        assert_eq!(watched_dir(Path::new("styles/theme.css")), Path::new("styles"));
    }

    #[test]
    fn only_events_for_the_watched_name_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.css");
        std::fs::write(&path, "").unwrap();
        let watch = FileWatch::new(&path, DELAY).unwrap();

        let modified = |changed: PathBuf| {
            Event::new(EventKind::Modify(notify::event::ModifyKind::Any)).add_path(changed)
        };
        assert!(watch.concerns(&modified(path.clone())));
        assert!(!watch.concerns(&modified(dir.path().join("out.css"))));
        assert!(!watch.concerns(
            &Event::new(EventKind::Access(notify::event::AccessKind::Any)).add_path(path)
        ));
    }

    #[test]
    fn file_watch_fires_after_a_settled_edit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.css");
        std::fs::write(&path, "--a: 1 1% 1%;").unwrap();
        let mut watch = FileWatch::new(&path, Duration::from_millis(200)).unwrap();
        assert!(!watch.wait(WAIT_INTERVAL));

        std::fs::write(&path, "--a: 2 2% 2%;").unwrap();
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut fired = false;
        while !fired && Instant::now() < deadline {
            fired = watch.wait(WAIT_INTERVAL);
        }
        assert!(fired);
        assert!(!watch.wait(Duration::from_millis(300)));
    }

    #[test]
    fn missing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileWatch::new(dir.path().join("theme.css"), DELAY).is_err());
    }
}
