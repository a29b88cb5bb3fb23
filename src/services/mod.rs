pub mod api_client;
pub mod session_service;
pub mod token;

pub use api_client::ApiClient;
pub use session_service::{parse_stored, RestoredSession, SessionStore};
pub use token::user_id_from_token;
