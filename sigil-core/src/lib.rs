//! Transaction signing core for Substrate-family chains.
//!
//! Turns a [`SigningRequest`] plus an explicit [`ChainConfig`] into signed,
//! network-ready extrinsic bytes. Pure computation: no I/O, no global
//! state, no key storage.

// Public crate surface is organized by layer: `domain`, `application`, `foundation`.
pub mod application;
pub mod domain;
pub mod foundation;

pub use application::SigningPipeline;
pub use domain::{
    AccountAddress, Call, CallIndexTable, ChainConfig, Era, SignatureScheme, SignedExtrinsic,
    SigningOutput, SigningRequest,
};
pub use foundation::{ErrorCode, ErrorContext, Result, SecretBytes, SigningError};
