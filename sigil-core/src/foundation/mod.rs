pub mod error;
pub mod secret;
pub mod types;
pub mod util;

pub use error::{ErrorCode, ErrorContext, Result, SigningError};
pub use secret::SecretBytes;
pub use types::{AccountId, Hash32, Signature64};
