//! Activity list owned by the control window

/// Ordered list of activity labels, unique on the trimmed label, with at
/// most one marked active.
#[derive(Debug, Clone, Default)]
pub struct ActivitySet {
    entries: Vec<String>,
    active: Option<String>,
}

impl ActivitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label, trimmed. The first label added to an empty set becomes
    /// active automatically. Empty and duplicate submissions are no-ops.
    /// Returns true when the set changed.
    pub fn add(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.entries.iter().any(|existing| existing == label) {
            return false;
        }
        let first = self.entries.is_empty();
        self.entries.push(label.to_string());
        if first {
            self.active = Some(label.to_string());
        }
        true
    }

    /// Mark an existing label active. Unknown labels are ignored.
    pub fn select(&mut self, label: &str) -> bool {
        if self.entries.iter().any(|existing| existing == label) {
            self.active = Some(label.to_string());
            true
        } else {
            false
        }
    }

    /// Remove a label. If it was the active one, active reverts to none.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|existing| existing != label);
        if self.entries.len() == before {
            return false;
        }
        if self.active.as_deref() == Some(label) {
            self.active = None;
        }
        true
    }

    /// The label bound to the next countdown, if one is selected
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn labels(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
