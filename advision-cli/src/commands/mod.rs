pub mod charts;
pub mod lead;
pub mod prefs;
pub mod projects;
pub mod report;
pub mod session;
