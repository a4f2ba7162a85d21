pub mod errors;
pub mod pass;
pub mod passes;
pub mod settings;
pub mod r#static;
pub mod template;
pub mod templates;
