mod common;
pub use self::common::{Filter, SortDirection};
mod spec;
pub use self::spec::{FilterSpec, FilterValue, Scalar};

mod operation;
pub use self::operation::OperationFilter;

mod fund;
pub use self::fund::FundFilter;

mod actor;
pub use self::actor::ActorFilter;

mod company;
pub use self::company::CompanyFilter;

mod people;
pub use self::people::PeopleFilter;

mod news;
pub use self::news::NewsFilter;
