/// Client-side session handling for the web interface
///
/// Reading the persisted logged-in user, role policy, and signing out.
/// Issuing sessions is the login flow's job and does not happen here.

pub mod logout;
pub mod policy;
pub mod session;

pub use logout::{sign_out, BrowserTokenStore, Navigator, Notifier, RouterNavigator, TokenStore};
pub use policy::{has_capability, Capability, Role, SidebarTheme};
pub use session::{
    provide_session_source, use_session_source, BrowserSessionProvider, SessionProvider,
    SessionSource, SessionState, StaticSessionProvider,
};
