pub mod address;
pub mod call;
pub mod chain;
pub mod era;
pub mod extrinsic;
pub mod model;
pub mod payload;
pub mod scale;
pub mod signing;

pub use call::{AccountAddress, Call, RewardDestination};
pub use chain::{CallIndexTable, ChainConfig};
pub use era::Era;
pub use model::{SignedExtrinsic, SigningOutput, SigningRequest};
pub use signing::SignatureScheme;
