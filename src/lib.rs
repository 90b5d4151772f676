pub mod catalog;
pub mod cli;
pub mod estimator;
pub mod schema;
pub mod store;

pub use catalog::{populate, Distance, GenerateParams, Object, PopulateSummary};
pub use cli::{Cli, Commands};
pub use estimator::{Estimate, StellarPopulation};
pub use store::CatalogStore;
