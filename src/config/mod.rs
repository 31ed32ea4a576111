pub mod catalog;
pub mod mappings;
pub mod settings;

pub use catalog::SeedCatalog;
pub use mappings::NameMappings;
pub use settings::AppConfig;
