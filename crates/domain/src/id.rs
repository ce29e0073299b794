//! Typed identifier newtypes backed by strings.

use std::fmt;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier, returning the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

define_id!(
    /// Opaque identifier of a stored [`Location`](crate::location::Location).
    ///
    /// Assigned by the storage backend on insert.
    LocationId
);

define_id!(
    /// Identifier a client device reports alongside its readings.
    DeviceId
);

impl DeviceId {
    /// The device id recorded when a client does not send one.
    pub const UNKNOWN: &'static str = "unknown";

    /// Use the given device id, or [`DeviceId::UNKNOWN`] when absent.
    #[must_use]
    pub fn or_unknown(value: Option<String>) -> Self {
        value.map_or_else(Self::default, Self)
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self(Self::UNKNOWN.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_device_id_to_unknown() {
        assert_eq!(DeviceId::default().as_str(), "unknown");
    }

    #[test]
    fn should_fall_back_to_unknown_when_device_id_missing() {
        assert_eq!(DeviceId::or_unknown(None).as_str(), "unknown");
        assert_eq!(
            DeviceId::or_unknown(Some("phone-1".to_string())).as_str(),
            "phone-1"
        );
    }

    #[test]
    fn should_keep_empty_device_id_as_sent() {
        assert_eq!(DeviceId::or_unknown(Some(String::new())).as_str(), "");
    }

    #[test]
    fn should_display_inner_value() {
        let id = LocationId::new("665f1c2ab9e4d1a7c3f0e812");
        assert_eq!(id.to_string(), "665f1c2ab9e4d1a7c3f0e812");
        assert_eq!(id.into_inner(), "665f1c2ab9e4d1a7c3f0e812");
    }
}
