//! Static visibility decision for privileged operations
//!
//! The decision is made once at startup and only controls whether a
//! privileged operation is advertised in the API schema. It never gates a
//! request at runtime.

use std::fmt::Debug;

/// Decides whether privileged operations are advertised
pub trait PrivilegeCheck: Send + Sync + Debug {
    fn is_privileged(&self) -> bool;
}

/// Fixed answer taken from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticPrivilegeCheck {
    privileged: bool,
}

impl StaticPrivilegeCheck {
    pub fn new(privileged: bool) -> Self {
        Self { privileged }
    }
}

impl PrivilegeCheck for StaticPrivilegeCheck {
    fn is_privileged(&self) -> bool {
        self.privileged
    }
}
