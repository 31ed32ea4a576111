pub mod catalog;
pub mod resolver;
pub mod suggest;

pub use catalog::Catalog;
pub use resolver::{IdentityResolver, UnresolvedNames};
pub use suggest::{suggest, Suggestion};
