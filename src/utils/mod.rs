pub mod config;
pub mod literal;

pub use config::Config;
pub use literal::format_as_js_literal;
