// ============================================================================
// STATE MODULE - Stores persistidos con Rc<RefCell>
// ============================================================================

pub mod auth_state;
pub mod company_state;

pub use auth_state::*;
pub use company_state::*;
