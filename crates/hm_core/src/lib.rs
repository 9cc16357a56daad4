pub mod config;
pub mod error;
pub mod types;

pub use config::MigrateConfig;
pub use error::Error;
pub use types::Post;

pub type Result<T> = std::result::Result<T, Error>;
