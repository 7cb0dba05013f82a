//! Named permission sets.

use std::fmt;

use portfolio_entity::user::Role;

/// The set of roles an endpoint admits.
///
/// Sets are nested: every role allowed by `Owner` is allowed by
/// `Maintainer`, and every role allowed by `Maintainer` is allowed by `User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionSet {
    /// Only the owner.
    Owner,
    /// Owner and maintainer.
    Maintainer,
    /// Any authenticated caller.
    User,
}

impl PermissionSet {
    /// Roles admitted by this set.
    pub fn roles(&self) -> &'static [Role] {
        match self {
            Self::Owner => &[Role::Owner],
            Self::Maintainer => &[Role::Owner, Role::Maintainer],
            Self::User => &[Role::Owner, Role::Maintainer, Role::User],
        }
    }

    /// Whether `role` is admitted.
    pub fn allows(&self, role: Role) -> bool {
        self.roles().contains(&role)
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.roles().iter().map(Role::as_str).collect();
        write!(f, "{}", names.join(", "))
    }
}
