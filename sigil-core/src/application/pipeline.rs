use log::debug;

use crate::domain::call::{encode_call, MultiAddress};
use crate::domain::chain::ChainConfig;
use crate::domain::extrinsic;
use crate::domain::model::{SignedExtrinsic, SigningOutput, SigningRequest};
use crate::domain::payload::{SigningPayload, TxExtra, MAX_DIRECT_SIGN_LEN};
use crate::domain::signing;
use crate::foundation::util::hex_fmt::hx;
use crate::foundation::{Result, SigningError};

/// Drives one request through encode -> build payload -> sign -> assemble.
///
/// The pipeline is pure and stateless apart from its configuration; one
/// instance can serve any number of requests from any number of threads.
#[derive(Debug)]
pub struct SigningPipeline {
    config: ChainConfig,
}

impl SigningPipeline {
    pub fn new(config: ChainConfig) -> Self {
        Self { config }
    }

    pub fn for_network(network: u16) -> Result<Self> {
        Ok(Self::new(ChainConfig::for_network(network)?))
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn sign(&self, request: SigningRequest) -> Result<SignedExtrinsic> {
        self.validate(&request)?;

        let call_bytes = encode_call(&request.call, &self.config)?;
        debug!("encoded {} call: {} bytes", request.call.name(), call_bytes.len());

        let extra = TxExtra { era: request.era, nonce: request.nonce, tip: request.tip };
        let payload = SigningPayload::build(
            &call_bytes,
            &extra,
            request.spec_version,
            request.transaction_version,
            &request.genesis_hash,
            &request.block_hash,
        );
        let target = payload.sign_target();
        if target.is_hashed() {
            debug!("payload is {} bytes (> {}), signing its digest", payload.len(), MAX_DIRECT_SIGN_LEN);
        }

        let public = signing::public_key(self.config.scheme, &request.private_key)?;
        let signature = signing::sign(self.config.scheme, &request.private_key, target.message())?;

        let signer = MultiAddress::new(public, self.config.multi_address);
        let encoded = extrinsic::assemble(signer, self.config.scheme, &signature, &extra, &call_bytes);
        debug!("assembled {} byte extrinsic for signer {}", encoded.len(), hx(&public));

        Ok(SignedExtrinsic { encoded, signature })
        // `request` (and the private key with it) is dropped and zeroized
        // here on every exit path.
    }

    /// Record-producing variant: failures become an error context instead
    /// of a `Result`.
    pub fn sign_to_output(&self, request: SigningRequest) -> SigningOutput {
        SigningOutput::from_result(self.sign(request))
    }

    fn validate(&self, request: &SigningRequest) -> Result<()> {
        if request.network != self.config.network {
            return Err(SigningError::NetworkMismatch {
                request: request.network,
                config: self.config.network,
            });
        }
        if request.private_key.len() != signing::SECRET_KEY_LEN {
            return Err(SigningError::KeyLength {
                expected: signing::SECRET_KEY_LEN,
                actual: request.private_key.len(),
            });
        }
        Ok(())
    }
}
