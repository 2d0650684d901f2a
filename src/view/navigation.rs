use std::sync::Mutex;

/// History collaborator the view controllers navigate through.
pub trait Navigator: Send + Sync {
    /// Records a new entry, dropping anything ahead of the current one.
    fn push(&self, path: &str);

    /// Moves `delta` entries through history. Out-of-range moves are ignored.
    fn go(&self, delta: i32);

    fn current_path(&self) -> String;
}

#[derive(Debug)]
struct History {
    entries: Vec<String>,
    index: usize,
}

/// In-process browser-style history stack, rooted at `/`.
#[derive(Debug)]
pub struct HistoryNavigator {
    history: Mutex<History>,
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec!["/".to_string()],
                index: 0,
            }),
        }
    }
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_history<T>(&self, f: impl FnOnce(&mut History) -> T) -> T {
        let mut guard = self.history.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

impl Navigator for HistoryNavigator {
    fn push(&self, path: &str) {
        self.with_history(|h| {
            h.entries.truncate(h.index + 1);
            h.entries.push(path.to_string());
            h.index = h.entries.len() - 1;
        });
    }

    fn go(&self, delta: i32) {
        self.with_history(|h| {
            let target = h.index as i64 + delta as i64;
            if (0..h.entries.len() as i64).contains(&target) {
                h.index = target as usize;
            }
        });
    }

    fn current_path(&self) -> String {
        self.with_history(|h| h.entries[h.index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_back_returns_to_previous_entry() {
        let nav = HistoryNavigator::new();
        nav.push("/point");
        nav.push("/point/3/view");
        nav.go(-1);
        assert_eq!(nav.current_path(), "/point");
        nav.go(1);
        assert_eq!(nav.current_path(), "/point/3/view");
    }

    #[test]
    fn go_past_start_is_ignored() {
        let nav = HistoryNavigator::new();
        nav.go(-1);
        assert_eq!(nav.current_path(), "/");
    }

    #[test]
    fn push_discards_forward_entries() {
        let nav = HistoryNavigator::new();
        nav.push("/a");
        nav.push("/b");
        nav.go(-1);
        nav.push("/c");
        nav.go(1);
        assert_eq!(nav.current_path(), "/c");
    }
}
