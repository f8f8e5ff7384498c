pub mod app;
pub mod cli;
pub mod errors;
pub mod input;
pub mod logging;
pub mod runner;
pub mod startup;
pub mod ui;

pub use crate::app::{App, Credentials, FieldStyle, Focus, LoginForm, NoopSubmit, SubmitHandler, Visibility};
