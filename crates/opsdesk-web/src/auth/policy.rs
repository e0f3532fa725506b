/// Role policy
///
/// Maps the role string from the session record to the capabilities the
/// sidebar checks. Only the privileged role unlocks anything.

pub const PRIVILEGED_ROLE: &str = "superadmin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Privileged,
    Standard,
}

impl Role {
    /// Exact, case-sensitive match; empty and unknown roles are standard
    pub fn parse(role: &str) -> Self {
        if role == PRIVILEGED_ROLE {
            Role::Privileged
        } else {
            Role::Standard
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ViewPrivilegedMenu,
    ViewAssignedRoutes,
}

pub fn has_capability(role: Role, capability: Capability) -> bool {
    match capability {
        Capability::ViewPrivilegedMenu => role == Role::Privileged,
        Capability::ViewAssignedRoutes => role == Role::Privileged,
    }
}

/// Sidebar background, chosen purely from the role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarTheme {
    Privileged,
    Standard,
}

impl SidebarTheme {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Privileged => SidebarTheme::Privileged,
            Role::Standard => SidebarTheme::Standard,
        }
    }

    pub fn gradient_class(self) -> &'static str {
        match self {
            SidebarTheme::Privileged => "bg-gradient-to-b from-purple-800 via-indigo-800 to-indigo-950",
            SidebarTheme::Standard => "bg-gradient-to-b from-blue-700 via-blue-800 to-gray-900",
        }
    }
}
