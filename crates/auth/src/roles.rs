use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role name carried in tokens (e.g. `admin`, `estimator`, `customer`).
///
/// Opaque at this layer; nothing here maps roles to permissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const ADMIN: Role = Role::from_static("admin");
    pub const CUSTOMER: Role = Role::from_static("customer");

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_roles_compare_equal() {
        assert_eq!(Role::ADMIN, Role::new(String::from("admin")));
        assert_ne!(Role::ADMIN, Role::CUSTOMER);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Role::CUSTOMER).unwrap();
        assert_eq!(json, "\"customer\"");
    }
}
