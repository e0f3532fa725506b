//! End-to-end checks of the sidebar and logout behaviour through the public,
//! DOM-free API: session loading, layout projection, disclosures, sign-out.

use std::cell::RefCell;

use opsdesk_web::auth::{
    sign_out, Navigator, Notifier, SessionSource, SessionState, SidebarTheme,
    StaticSessionProvider, TokenStore,
};
use opsdesk_web::config::AppConfig;
use opsdesk_web::navigation::{
    label_for_path, DisclosureSection, MenuLayout, OpenSections, BASE_LINKS, PRIVILEGED_LINKS,
};
use opsdesk_web::types::SessionRecord;

fn layout_for(provider: StaticSessionProvider) -> MenuLayout {
    let state = SessionSource::new(provider).load();
    MenuLayout::for_session(&state)
}

#[test]
fn no_session_renders_default_sidebar() {
    let layout = layout_for(StaticSessionProvider::empty());

    assert_eq!(layout.theme, SidebarTheme::Standard);
    assert!(!layout.show_privileged_links);
    assert!(!layout.show_assigned_routes());

    let open = OpenSections::default();
    for section in DisclosureSection::ALL {
        assert!(!open.is_open(section), "{:?} should start collapsed", section);
    }
    assert_eq!(open.open_count(), 0);

    for entry in BASE_LINKS {
        assert!(label_for_path(entry.path).is_some());
    }
}

#[test]
fn superadmin_with_routes_renders_everything() {
    let layout = layout_for(StaticSessionProvider::from_json(
        r#"{"role":"superadmin","routes":["North","South"]}"#,
    ));

    assert_eq!(layout.theme, SidebarTheme::Privileged);
    assert!(layout.show_privileged_links);
    assert!(layout.show_assigned_routes());
    assert_eq!(layout.assigned_routes, vec!["North".to_string(), "South".to_string()]);
    assert!(!PRIVILEGED_LINKS.is_empty());
}

#[test]
fn non_privileged_roles_never_see_privileged_content() {
    let roles = ["", "admin", "user", "Superadmin", "super admin", "superadmin\n"];
    let route_sets: [&[&str]; 3] = [&[], &["North"], &["A", "B", "C"]];

    for role in roles {
        for routes in route_sets {
            let record = SessionRecord {
                role: role.to_string(),
                routes: Some(routes.iter().map(|r| r.to_string()).collect()),
            };
            let layout = layout_for(StaticSessionProvider::from_record(&record).unwrap());

            assert!(!layout.show_privileged_links, "role {:?}", role);
            assert!(!layout.show_assigned_routes(), "role {:?}", role);
            assert_eq!(layout.theme, SidebarTheme::Standard);
        }
    }
}

#[test]
fn superadmin_routes_listed_once_in_order() {
    let routes: Vec<String> = (1..=12).map(|i| format!("Route {}", 13 - i)).collect();
    let record = SessionRecord {
        role: "superadmin".to_string(),
        routes: Some(routes.clone()),
    };

    let layout = layout_for(StaticSessionProvider::from_record(&record).unwrap());
    assert_eq!(layout.assigned_routes, routes);
}

#[test]
fn superadmin_without_routes_hides_list() {
    for raw in [r#"{"role":"superadmin"}"#, r#"{"role":"superadmin","routes":[]}"#] {
        let layout = layout_for(StaticSessionProvider::from_json(raw));
        assert!(layout.show_privileged_links);
        assert!(!layout.show_assigned_routes(), "input {}", raw);
    }
}

#[test]
fn corrupt_session_falls_back_to_default() {
    let state = SessionSource::new(StaticSessionProvider::from_json("{\"role\":")).load();
    assert_eq!(state, SessionState::default());
    assert_eq!(MenuLayout::for_session(&state).theme, SidebarTheme::Standard);
}

#[test]
fn disclosures_toggle_independently() {
    let mut open = OpenSections::default();

    open.toggle(DisclosureSection::Masters);
    open.toggle(DisclosureSection::Settings);
    assert!(open.is_open(DisclosureSection::Masters));
    assert!(!open.is_open(DisclosureSection::Reports));
    assert!(open.is_open(DisclosureSection::Settings));

    open.toggle(DisclosureSection::Masters);
    assert!(!open.is_open(DisclosureSection::Masters));
    assert!(open.is_open(DisclosureSection::Settings));
}

#[derive(Default)]
struct Browser {
    storage: RefCell<Vec<(String, String)>>,
    events: RefCell<Vec<String>>,
}

impl TokenStore for Browser {
    fn remove(&self, key: &str) -> opsdesk_web::Result<()> {
        self.storage.borrow_mut().retain(|(k, _)| k != key);
        self.events.borrow_mut().push(format!("remove:{}", key));
        Ok(())
    }
}

impl Notifier for Browser {
    fn success(&self, title: &str) {
        self.events.borrow_mut().push(format!("toast:{}", title));
    }
}

impl Navigator for Browser {
    fn navigate(&self, path: &str) {
        self.events.borrow_mut().push(format!("navigate:{}", path));
    }
}

#[test]
fn logout_clears_token_then_navigates_to_login() {
    let browser = Browser::default();
    browser.storage.borrow_mut().extend([
        ("token".to_string(), "abc".to_string()),
        ("loggedInUser".to_string(), r#"{"role":"superadmin"}"#.to_string()),
    ]);

    // Sidebar state is irrelevant to logout
    let mut open = OpenSections::default();
    open.toggle(DisclosureSection::Reports);

    sign_out(&AppConfig::default(), &browser, &browser, &browser);

    assert_eq!(
        *browser.events.borrow(),
        vec![
            "remove:token".to_string(),
            "toast:Logged out successfully".to_string(),
            "navigate:/login".to_string(),
        ]
    );
    let storage = browser.storage.borrow();
    assert!(storage.iter().all(|(k, _)| k != "token"));
    assert!(storage.iter().any(|(k, _)| k == "loggedInUser"));
}
