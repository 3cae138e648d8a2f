//! The seam between the store and whatever renders the theme
//!
//! A [`ThemeBinding`] receives the flattened variable list every time
//! the active theme changes. Real applications back this with a CSS
//! variable sheet or a native style registry; [`MemoryBinding`] is the
//! in-process implementation used by tests and headless tooling.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// A sink for theme variables
pub trait ThemeBinding: Send {
    /// Apply the full variable set for a newly active theme
    ///
    /// The list is always complete, never a delta, so implementations
    /// can replace their state wholesale.
    fn apply(&mut self, variables: &[(String, String)]);
}

/// Shared bindings apply through the mutex
impl<B: ThemeBinding> ThemeBinding for Arc<Mutex<B>> {
    fn apply(&mut self, variables: &[(String, String)]) {
        self.lock().apply(variables);
    }
}

/// An in-memory variable sink
#[derive(Debug, Default)]
pub struct MemoryBinding {
    vars: HashMap<String, String>,
    generation: u64,
}

impl MemoryBinding {
    /// Create an empty binding
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Number of variables currently held
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether any variables have been applied yet
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// How many times a theme has been applied
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl ThemeBinding for MemoryBinding {
    fn apply(&mut self, variables: &[(String, String)]) {
        for (name, value) in variables {
            self.vars.insert(name.clone(), value.clone());
        }
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_binding_applies_variables() {
        let mut binding = MemoryBinding::new();
        assert!(binding.is_empty());

        binding.apply(&[
            ("background".to_string(), "#ffffff".to_string()),
            ("foreground".to_string(), "#111827".to_string()),
        ]);

        assert_eq!(binding.len(), 2);
        assert_eq!(binding.get("background"), Some("#ffffff"));
        assert_eq!(binding.get("missing"), None);
        assert_eq!(binding.generation(), 1);
    }

    #[test]
    fn test_memory_binding_overwrites_on_reapply() {
        let mut binding = MemoryBinding::new();
        binding.apply(&[("background".to_string(), "#ffffff".to_string())]);
        binding.apply(&[("background".to_string(), "#111827".to_string())]);

        assert_eq!(binding.get("background"), Some("#111827"));
        assert_eq!(binding.generation(), 2);
    }

    #[test]
    fn test_shared_binding_delegates() {
        let shared = Arc::new(Mutex::new(MemoryBinding::new()));
        let mut handle = Arc::clone(&shared);

        handle.apply(&[("ring".to_string(), "#3b82f6".to_string())]);

        assert_eq!(shared.lock().get("ring"), Some("#3b82f6"));
    }
}
