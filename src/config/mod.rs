// Link catalog configuration loaded from YAML

pub mod catalog;
pub mod settings;

pub use catalog::{Link, LinkCatalog};
pub use settings::LinkSettings;
