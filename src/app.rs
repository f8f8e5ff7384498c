pub mod core;
pub mod form;
pub mod settings;
pub mod types;

pub use core::App;
pub use form::{Credentials, LoginForm, NoopSubmit, SubmitHandler, Visibility};
pub use types::{FieldStyle, Focus};
