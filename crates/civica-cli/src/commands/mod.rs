pub mod assign;
pub mod check;
pub mod delete;
pub mod list;
pub mod report;
pub mod show;
pub mod status;
