//! Ordered, duplicate-free dependency list.

/// Selected package names, insertion-ordered with no duplicates.
///
/// Semantically a set with deterministic iteration order. Both operations are
/// total: invalid input degrades to a no-op rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyList {
    names: Vec<String>,
}

impl DependencyList {
    /// Add a package name to the end of the list.
    ///
    /// Surrounding whitespace is trimmed. Empty names and exact-match
    /// duplicates are ignored. Returns true when the list changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove a package name. Returns true when the list changed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for DependencyList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = DependencyList::default();
        for name in iter {
            list.add(&name);
        }
        list
    }
}
