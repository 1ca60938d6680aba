//! File watching for live sprint reloads.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

/// Set up a file watcher for sprint file changes
///
/// The watcher sets the shared flag when the sprint file is written;
/// the main loop picks it up on the next tick. Returns None when the
/// platform watcher cannot be created, in which case the dashboard
/// still works and `r` reloads by hand.
pub fn setup_sprint_watcher(
    sprint_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    // Use a shorter poll interval for more responsive updates
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    // Canonicalize the path for reliable comparison
    let canonical_sprint = sprint_path
        .canonicalize()
        .unwrap_or_else(|_| sprint_path.clone());
    let sprint_filename = sprint_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                // Compare canonical paths first; editors that replace the
                // file on save emit events under varying representations.
                let matches = event.paths.iter().any(|p| {
                    if let Ok(canonical) = p.canonicalize() {
                        if canonical == canonical_sprint {
                            return true;
                        }
                    }
                    // Fall back to filename comparison
                    if let Some(ref expected_name) = sprint_filename {
                        if let Some(event_name) = p.file_name() {
                            return event_name == expected_name;
                        }
                    }
                    false
                });

                if matches {
                    if let Ok(mut flag) = needs_reload.lock() {
                        *flag = true;
                    }
                }
            }
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            // Watch the parent directory since some editors replace files
            let parent = match sprint_path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            let _ = watcher.watch(parent, RecursiveMode::NonRecursive);
            Some(watcher)
        }
        Err(_) => None,
    }
}
