/// Page components for the OpsDesk web interface

pub mod login;
pub mod not_found;
pub mod section;
