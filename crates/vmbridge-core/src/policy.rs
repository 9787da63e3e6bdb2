//! Library name selection.
//!
//! Which VM library gets opened is a policy decision, not a pure lookup.
//! Outside debuggable mode the requested name is ignored entirely and the
//! fixed fallback is used; honoring an untrusted or environment-provided
//! name is only allowed in debuggable mode.

use crate::config::{keys, EnvProperties, PropertySource};

/// Library opened when nothing else is requested or allowed.
pub const FALLBACK_LIBRARY: &str = "libart.so";

/// Decides the effective library name for a load attempt.
pub struct SelectionPolicy {
    debuggable: bool,
    properties: Box<dyn PropertySource>,
}

impl SelectionPolicy {
    /// Build a policy with an explicit debuggable flag and property source.
    pub fn new(debuggable: bool, properties: Box<dyn PropertySource>) -> Self {
        Self {
            debuggable,
            properties,
        }
    }

    /// Build a policy from a property source, deriving the debuggable flag
    /// from [`keys::DEBUGGABLE`]. Unset means permissive, matching host
    /// builds where there is no platform debuggable signal; a set value
    /// fails closed, so only exactly `"1"` is debuggable.
    pub fn from_properties(properties: Box<dyn PropertySource>) -> Self {
        let debuggable = properties
            .get(keys::DEBUGGABLE)
            .map_or(true, |value| value == "1");
        Self {
            debuggable,
            properties,
        }
    }

    /// Build a policy over process environment variables.
    pub fn from_env() -> Self {
        Self::from_properties(Box::new(EnvProperties))
    }

    pub fn debuggable(&self) -> bool {
        self.debuggable
    }

    /// Resolve the effective library name for `requested`.
    ///
    /// Restricted (non-debuggable) mode always selects the fallback.
    /// Debuggable mode honors a non-empty requested name, then the
    /// [`keys::VM_LIBRARY`] property, then the fallback. The result is
    /// never empty.
    pub fn select(&self, requested: Option<&str>) -> String {
        if !self.debuggable {
            return FALLBACK_LIBRARY.to_string();
        }

        if let Some(name) = requested {
            if !name.is_empty() {
                return name.to_string();
            }
        }

        let configured = self.properties.get_or(keys::VM_LIBRARY, FALLBACK_LIBRARY);
        if configured.is_empty() {
            FALLBACK_LIBRARY.to_string()
        } else {
            configured
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::testing::MapProperties;

    fn restricted() -> SelectionPolicy {
        SelectionPolicy::new(false, Box::new(MapProperties::empty()))
    }

    fn permissive(pairs: &[(&str, &str)]) -> SelectionPolicy {
        SelectionPolicy::new(true, Box::new(MapProperties::with(pairs)))
    }

    #[test]
    fn restricted_mode_ignores_requested_name() {
        let policy = restricted();
        assert_eq!(policy.select(Some("libother.so")), FALLBACK_LIBRARY);
        assert_eq!(policy.select(Some("")), FALLBACK_LIBRARY);
        assert_eq!(policy.select(None), FALLBACK_LIBRARY);
    }

    #[test]
    fn restricted_mode_ignores_configured_property() {
        let policy = SelectionPolicy::new(
            false,
            Box::new(MapProperties::with(&[(keys::VM_LIBRARY, "libother.so")])),
        );
        assert_eq!(policy.select(None), FALLBACK_LIBRARY);
    }

    #[test]
    fn debuggable_mode_honors_requested_name() {
        let policy = permissive(&[]);
        assert_eq!(policy.select(Some("libother.so")), "libother.so");
    }

    #[test]
    fn debuggable_mode_reads_property_when_nothing_requested() {
        let policy = permissive(&[(keys::VM_LIBRARY, "libcustom.so")]);
        assert_eq!(policy.select(None), "libcustom.so");
        // An empty request is treated as no request.
        assert_eq!(policy.select(Some("")), "libcustom.so");
    }

    #[test]
    fn debuggable_mode_falls_back_when_property_unset_or_empty() {
        let policy = permissive(&[]);
        assert_eq!(policy.select(None), FALLBACK_LIBRARY);

        let policy = permissive(&[(keys::VM_LIBRARY, "")]);
        assert_eq!(policy.select(None), FALLBACK_LIBRARY);
    }

    #[test]
    fn from_properties_derives_debuggable_flag() {
        let policy =
            SelectionPolicy::from_properties(Box::new(MapProperties::with(&[(
                keys::DEBUGGABLE,
                "0",
            )])));
        assert!(!policy.debuggable());

        let policy =
            SelectionPolicy::from_properties(Box::new(MapProperties::with(&[(
                keys::DEBUGGABLE,
                "1",
            )])));
        assert!(policy.debuggable());

        // Unset means permissive on host builds.
        let policy = SelectionPolicy::from_properties(Box::new(MapProperties::empty()));
        assert!(policy.debuggable());
    }

    #[test]
    fn set_debuggable_values_other_than_one_fail_closed() {
        for value in ["false", "true", "yes", "2", "01", ""] {
            let policy = SelectionPolicy::from_properties(Box::new(MapProperties::with(&[(
                keys::DEBUGGABLE,
                value,
            )])));
            assert!(!policy.debuggable(), "value {value:?} must be restricted");
            assert_eq!(policy.select(Some("libother.so")), FALLBACK_LIBRARY);
        }
    }
}
