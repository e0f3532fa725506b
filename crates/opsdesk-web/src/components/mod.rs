/// UI components for the OpsDesk web interface

pub mod icons;
pub mod logout_button;
pub mod notifications;
pub mod shell;
pub mod sidebar;
