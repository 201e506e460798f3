pub mod constants;
pub mod movie;
pub mod movies_client;

pub use crate::movie::Movie;
pub use crate::movies_client::movies_client::MoviesClient;
pub use crate::movies_client::movies_client_error::MoviesClientError;
