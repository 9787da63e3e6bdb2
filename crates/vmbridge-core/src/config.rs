//! Configuration lookup for the library selection policy.
//!
//! The policy only needs a key/value lookup with a default, so it is
//! abstracted behind [`PropertySource`]; production code reads process
//! environment variables, tests inject a map.

/// Property keys read by the selection policy.
pub mod keys {
    /// Names the VM library to open when no name is requested explicitly.
    /// Only consulted in debuggable mode.
    pub const VM_LIBRARY: &str = "VMBRIDGE_VM_LIBRARY";

    /// Debuggable flag. Selection is only permissive when this is unset
    /// (host builds have no platform debuggable signal) or set to exactly
    /// `"1"`; any other set value pins selection to the fallback library
    /// and ignores both requested names and [`VM_LIBRARY`].
    pub const DEBUGGABLE: &str = "VMBRIDGE_DEBUGGABLE";
}

/// Key/value configuration lookup.
pub trait PropertySource: Send + Sync {
    /// Look up a property by key.
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a property, substituting `default` when unset.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// Property source backed by process environment variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvProperties;

impl PropertySource for EnvProperties {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::PropertySource;
    use std::collections::HashMap;

    /// Map-backed property source for tests.
    pub struct MapProperties(HashMap<String, String>);

    impl MapProperties {
        pub fn empty() -> Self {
            Self(HashMap::new())
        }

        pub fn with(pairs: &[(&str, &str)]) -> Self {
            Self(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        }
    }

    impl PropertySource for MapProperties {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_substitutes_default() {
        let props = testing::MapProperties::empty();
        assert_eq!(props.get_or("missing", "fallback"), "fallback");

        let props = testing::MapProperties::with(&[("present", "value")]);
        assert_eq!(props.get_or("present", "fallback"), "value");
    }
}
