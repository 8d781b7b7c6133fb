pub mod app;
pub mod company_registration;
pub mod form_field;
pub mod login_screen;
pub mod toast;
pub mod user_registration;

pub use app::App;
pub use company_registration::CompanyRegistrationScreen;
pub use form_field::{field_error, FormField};
pub use login_screen::LoginScreen;
pub use toast::Toast;
pub use user_registration::UserRegistrationScreen;
