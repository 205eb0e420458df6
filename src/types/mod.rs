mod pull_request;
mod repository_result;
mod user;

pub use pull_request::PullRequest;
pub use repository_result::{total_pull_requests, RepositoryFetchResult};
pub use user::User;
