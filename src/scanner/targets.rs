use std::ffi::OsStr;

/// The set of folder basenames that define a match.
///
/// Fixed for the lifetime of a scan; a match's own contents never extend
/// the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetNames {
    names: Vec<String>,
}

impl TargetNames {
    /// Basenames matched when no override is given.
    pub const DEFAULT_NAMES: [&'static str; 2] = ["vendor", "node_modules"];

    /// Create a target set from the given basenames.
    ///
    /// An empty list falls back to [`Self::DEFAULT_NAMES`].
    pub fn new(names: Vec<String>) -> Self {
        if names.is_empty() {
            Self::default()
        } else {
            Self { names }
        }
    }

    /// Check whether a directory basename is a member of the set.
    ///
    /// Names that are not valid UTF-8 never match.
    pub fn matches(&self, name: &OsStr) -> bool {
        match name.to_str() {
            Some(name) => self.names.iter().any(|t| t == name),
            None => false,
        }
    }

    /// The configured basenames.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for TargetNames {
    fn default() -> Self {
        Self {
            names: Self::DEFAULT_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
