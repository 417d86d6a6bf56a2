//! Configuration module

mod site;

pub use site::BlogConfig;
pub use site::CollectionConfig;
pub use site::ProjectsConfig;
pub use site::SearchConfig;
pub use site::SiteConfig;
