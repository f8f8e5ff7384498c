pub mod button;
pub mod divider;
pub mod footer;
pub mod header;
pub mod links;
pub mod text_field;
