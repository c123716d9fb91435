/// In-app navigation history. Starts at the root path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct History {
    entries: Vec<String>,
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
        }
    }

    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        log::debug!("navigate to {path}");
        self.entries.push(path);
    }

    /// Go one entry back. The first entry is never removed.
    pub fn back(&mut self) -> Option<String> {
        if self.entries.len() > 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    pub fn pathname(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("/")
    }
}
