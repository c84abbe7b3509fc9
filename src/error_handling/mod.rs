//! Error handling.
//!
//! Error types are grouped by where they arise:
//! - **Initialization**: logger setup and listener binding
//! - **Database**: pool creation, migrations, SQL, JSON column encoding
//! - **Validation**: request input the service refuses (HTTP 400)
//!
//! Non-fatal parse degradation (unreadable `additionalData`) is not an error
//! type; it is logged where it happens and the field is stored as null.

mod types;

// Re-export public API
pub use types::{DatabaseError, InitializationError, ValidationError};
