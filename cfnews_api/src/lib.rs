mod client;
mod errors;
pub mod query;
pub mod registry;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    ActorFilter, CompanyFilter, Filter, FilterSpec, FilterValue, FundFilter, NewsFilter,
    OperationFilter, PeopleFilter, Scalar, SortDirection,
};
