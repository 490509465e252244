pub mod drill;
pub mod keyboard;
pub mod overlay;
pub mod r#trait;
