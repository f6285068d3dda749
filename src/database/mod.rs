pub mod activities_repo;
pub mod seed;

pub use activities_repo::{ActivityDirectory, DuplicateActivityError, EnrollError};
