/// Sidebar navigation model
///
/// The static link catalog, the disclosure sections that group part of it,
/// and the projection of a session onto what the sidebar shows. Nothing here
/// touches the DOM, so the visibility rules can be checked without a browser.

use std::collections::BTreeSet;

use crate::auth::policy::{has_capability, Capability, Role, SidebarTheme};
use crate::auth::session::SessionState;

/// Route paths handed to the router
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";

    pub const USERS: &str = "/dashboard/users";
    pub const PRODUCTS: &str = "/dashboard/products";
    pub const ORDERS: &str = "/dashboard/orders";

    pub const MASTERS_CATEGORIES: &str = "/dashboard/masters/categories";
    pub const MASTERS_BRANDS: &str = "/dashboard/masters/brands";
    pub const MASTERS_UNITS: &str = "/dashboard/masters/units";
    pub const MASTERS_VENDORS: &str = "/dashboard/masters/vendors";

    pub const REPORTS_SALES: &str = "/dashboard/reports/sales";
    pub const REPORTS_STOCK: &str = "/dashboard/reports/stock";
    pub const REPORTS_DELIVERY: &str = "/dashboard/reports/delivery";

    pub const SETTINGS_PROFILE: &str = "/dashboard/settings/profile";
    pub const SETTINGS_PASSWORD: &str = "/dashboard/settings/password";
    pub const SETTINGS_PREFERENCES: &str = "/dashboard/settings/preferences";

    pub const ADMINS: &str = "/dashboard/admins";
    pub const ROLES: &str = "/dashboard/roles";
    pub const DELIVERY_ROUTES: &str = "/dashboard/delivery-routes";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    Users,
    Box,
    Cart,
    Database,
    Tag,
    Chart,
    Truck,
    Settings,
    User,
    Key,
    Sliders,
    Shield,
    Lock,
    Map,
    Logout,
}

/// A fixed sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

const fn entry(label: &'static str, path: &'static str, icon: NavIcon) -> NavEntry {
    NavEntry { label, path, icon }
}

/// Rendered for every role, including unauthenticated visitors
pub const BASE_LINKS: &[NavEntry] = &[
    entry("Dashboard", paths::DASHBOARD, NavIcon::Home),
    entry("Users", paths::USERS, NavIcon::Users),
    entry("Products", paths::PRODUCTS, NavIcon::Box),
    entry("Orders", paths::ORDERS, NavIcon::Cart),
];

const MASTERS_LINKS: &[NavEntry] = &[
    entry("Categories", paths::MASTERS_CATEGORIES, NavIcon::Tag),
    entry("Brands", paths::MASTERS_BRANDS, NavIcon::Tag),
    entry("Units", paths::MASTERS_UNITS, NavIcon::Box),
    entry("Vendors", paths::MASTERS_VENDORS, NavIcon::Truck),
];

const REPORTS_LINKS: &[NavEntry] = &[
    entry("Sales Report", paths::REPORTS_SALES, NavIcon::Chart),
    entry("Stock Report", paths::REPORTS_STOCK, NavIcon::Box),
    entry("Delivery Report", paths::REPORTS_DELIVERY, NavIcon::Truck),
];

const SETTINGS_LINKS: &[NavEntry] = &[
    entry("Profile", paths::SETTINGS_PROFILE, NavIcon::User),
    entry("Change Password", paths::SETTINGS_PASSWORD, NavIcon::Key),
    entry("Preferences", paths::SETTINGS_PREFERENCES, NavIcon::Sliders),
];

/// Rendered only for roles holding `Capability::ViewPrivilegedMenu`
pub const PRIVILEGED_LINKS: &[NavEntry] = &[
    entry("Admins", paths::ADMINS, NavIcon::Shield),
    entry("Roles & Access", paths::ROLES, NavIcon::Lock),
    entry("Delivery Routes", paths::DELIVERY_ROUTES, NavIcon::Map),
];

/// Collapsible sidebar group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DisclosureSection {
    Masters,
    Reports,
    Settings,
}

impl DisclosureSection {
    /// Render order
    pub const ALL: [DisclosureSection; 3] = [
        DisclosureSection::Masters,
        DisclosureSection::Reports,
        DisclosureSection::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DisclosureSection::Masters => "Masters",
            DisclosureSection::Reports => "Reports",
            DisclosureSection::Settings => "Settings",
        }
    }

    pub fn icon(self) -> NavIcon {
        match self {
            DisclosureSection::Masters => NavIcon::Database,
            DisclosureSection::Reports => NavIcon::Chart,
            DisclosureSection::Settings => NavIcon::Settings,
        }
    }

    pub fn entries(self) -> &'static [NavEntry] {
        match self {
            DisclosureSection::Masters => MASTERS_LINKS,
            DisclosureSection::Reports => REPORTS_LINKS,
            DisclosureSection::Settings => SETTINGS_LINKS,
        }
    }
}

/// Set of currently expanded disclosure sections; empty means all collapsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenSections(BTreeSet<DisclosureSection>);

impl OpenSections {
    pub fn is_open(&self, section: DisclosureSection) -> bool {
        self.0.contains(&section)
    }

    /// Flip one section, leaving the others as they are
    pub fn toggle(&mut self, section: DisclosureSection) {
        if !self.0.remove(&section) {
            self.0.insert(section);
        }
    }

    pub fn open_count(&self) -> usize {
        self.0.len()
    }
}

/// What the sidebar renders for a given session
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    pub theme: SidebarTheme,
    pub show_privileged_links: bool,
    /// Empty means the assigned-routes section is not rendered
    pub assigned_routes: Vec<String>,
}

impl MenuLayout {
    pub fn for_session(session: &SessionState) -> Self {
        let role = Role::parse(&session.role);

        let assigned_routes = if has_capability(role, Capability::ViewAssignedRoutes) {
            session.assigned_routes.clone()
        } else {
            Vec::new()
        };

        Self {
            theme: SidebarTheme::for_role(role),
            show_privileged_links: has_capability(role, Capability::ViewPrivilegedMenu),
            assigned_routes,
        }
    }

    pub fn show_assigned_routes(&self) -> bool {
        !self.assigned_routes.is_empty()
    }
}

/// Every link the sidebar can render, in sidebar order
pub fn all_entries() -> impl Iterator<Item = &'static NavEntry> {
    BASE_LINKS
        .iter()
        .chain(DisclosureSection::ALL.into_iter().flat_map(|s| s.entries().iter()))
        .chain(PRIVILEGED_LINKS.iter())
}

/// Label of the catalog entry for `path`, ignoring a trailing slash
pub fn label_for_path(path: &str) -> Option<&'static str> {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };

    all_entries()
        .find(|entry| entry.path == trimmed)
        .map(|entry| entry.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn session(role: &str, routes: &[&str]) -> SessionState {
        SessionState {
            role: role.to_string(),
            assigned_routes: routes.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_toggle_is_independent() {
        let mut open = OpenSections::default();
        for section in DisclosureSection::ALL {
            assert!(!open.is_open(section));
        }

        open.toggle(DisclosureSection::Reports);
        assert!(open.is_open(DisclosureSection::Reports));
        assert!(!open.is_open(DisclosureSection::Masters));
        assert!(!open.is_open(DisclosureSection::Settings));

        open.toggle(DisclosureSection::Masters);
        open.toggle(DisclosureSection::Settings);
        assert_eq!(open.open_count(), 3);

        open.toggle(DisclosureSection::Reports);
        assert!(!open.is_open(DisclosureSection::Reports));
        assert!(open.is_open(DisclosureSection::Masters));
        assert!(open.is_open(DisclosureSection::Settings));
    }

    #[test]
    fn test_toggle_every_combination() {
        // Walk all 8 open/closed combinations and check each toggle flips exactly one flag
        for mask in 0u8..8 {
            let mut open = OpenSections::default();
            for (i, section) in DisclosureSection::ALL.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    open.toggle(*section);
                }
            }

            for target in DisclosureSection::ALL {
                let mut next = open.clone();
                next.toggle(target);
                for other in DisclosureSection::ALL {
                    if other == target {
                        assert_ne!(next.is_open(other), open.is_open(other));
                    } else {
                        assert_eq!(next.is_open(other), open.is_open(other));
                    }
                }
            }
        }
    }

    #[test]
    fn test_standard_layout_hides_privileged_content() {
        for role in ["", "admin", "manager", "SuperAdmin", "superadmin "] {
            let layout = MenuLayout::for_session(&session(role, &["North"]));
            assert_eq!(layout.theme, SidebarTheme::Standard);
            assert!(!layout.show_privileged_links);
            assert!(!layout.show_assigned_routes());
        }
    }

    #[test]
    fn test_privileged_layout() {
        let layout = MenuLayout::for_session(&session("superadmin", &["North", "South"]));
        assert_eq!(layout.theme, SidebarTheme::Privileged);
        assert!(layout.show_privileged_links);
        assert_eq!(layout.assigned_routes, vec!["North", "South"]);
    }

    #[test]
    fn test_privileged_without_routes() {
        let layout = MenuLayout::for_session(&session("superadmin", &[]));
        assert!(layout.show_privileged_links);
        assert!(!layout.show_assigned_routes());
    }

    #[test]
    fn test_catalog_paths_unique() {
        let mut seen = HashSet::new();
        for entry in all_entries() {
            assert!(seen.insert(entry.path), "duplicate path {}", entry.path);
            assert!(entry.path.starts_with(paths::DASHBOARD));
        }
        assert!(!seen.contains(paths::LOGIN));
    }

    #[test]
    fn test_label_for_path() {
        assert_eq!(label_for_path("/dashboard"), Some("Dashboard"));
        assert_eq!(label_for_path("/dashboard/"), Some("Dashboard"));
        assert_eq!(label_for_path("/dashboard/reports/stock"), Some("Stock Report"));
        assert_eq!(label_for_path("/dashboard/roles"), Some("Roles & Access"));
        assert_eq!(label_for_path("/dashboard/nope"), None);
        assert_eq!(label_for_path("/"), None);

        for entry in all_entries() {
            assert_eq!(label_for_path(entry.path), Some(entry.label));
        }
    }
}
