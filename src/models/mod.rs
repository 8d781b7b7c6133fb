pub mod auth;
pub mod company;
pub mod envelope;
pub mod role;
pub mod user;

pub use auth::{AuthUser, LoginCredentials, LoginData};
pub use company::{Company, CreateCompanyRequest, UpdateCompanyRequest};
pub use envelope::Envelope;
pub use role::Role;
pub use user::{CreateUserRequest, User};
