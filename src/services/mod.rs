pub mod delete_contributor;

pub use delete_contributor::{DeleteContributorService, IDeleteContributorService};
