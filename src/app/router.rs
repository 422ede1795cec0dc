pub const HOME_PATH: &str = "/admin";
const MAX_HISTORY: usize = 50;

/// Push-only navigation history for the admin shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    history: Vec<String>,
}

impl Router {
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            history: vec![initial.to_string()],
        }
    }

    #[must_use]
    pub fn current(&self) -> &str {
        self.history.last().map_or(HOME_PATH, String::as_str)
    }

    /// Newest last.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Pushes `path` unless it is already current. Returns whether it moved.
    pub fn push(&mut self, path: &str) -> bool {
        if self.current() == path {
            return false;
        }
        self.history.push(path.to_string());
        if self.history.len() > MAX_HISTORY {
            let excess = self.history.len() - MAX_HISTORY;
            self.history.drain(..excess);
        }
        true
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(HOME_PATH)
    }
}
