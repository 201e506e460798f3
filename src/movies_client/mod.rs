pub mod movies_client;
pub mod movies_client_error;
