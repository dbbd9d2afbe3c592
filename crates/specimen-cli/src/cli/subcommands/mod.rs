pub mod projects;

pub use projects::{ProjectCommands, ProjectSort};
