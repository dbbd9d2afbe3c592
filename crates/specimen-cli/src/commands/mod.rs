pub mod dispatch;
pub mod json;
pub mod projects;
pub mod run;
pub mod schema;
pub mod vars;
