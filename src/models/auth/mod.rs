pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{AuthSession, UserType};
pub use requests::LoginRequest;
pub use responses::{LoginResponse, RefreshTokenResponse};
