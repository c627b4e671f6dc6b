//! Transaction mortality.

/// Validity window encoded into every transaction.
///
/// Immortal transactions encode as a single zero byte and are checked
/// against the genesis hash. Mortal transactions encode as two bytes
/// carrying the period exponent and the quantized phase, and are checked
/// against the hash of the block the phase was computed from.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Era {
    #[default]
    Immortal,
    Mortal { period: u64, phase: u64 },
}

impl Era {
    /// Mortal era valid for `period` blocks, anchored at `current_block`.
    ///
    /// The period is clamped to a power of two between 4 and 65536, matching
    /// what runtimes accept.
    pub fn mortal(period: u64, current_block: u64) -> Self {
        let period = period.clamp(4, 1 << 16).next_power_of_two();
        let phase = current_block % period;
        Era::Mortal { period, phase }
    }

    pub fn is_immortal(&self) -> bool {
        matches!(self, Era::Immortal)
    }

    pub fn encode_to(&self, out: &mut Vec<u8>) {
        match self {
            Era::Immortal => out.push(0),
            Era::Mortal { period, phase } => {
                let quantize_factor = (period >> 12).max(1);
                let encoded_period = period.trailing_zeros().saturating_sub(1).min(15) as u16;
                let quantized_phase = (phase / quantize_factor) as u16;
                let encoded = encoded_period | (quantized_phase << 4);
                out.extend_from_slice(&encoded.to_le_bytes());
            }
        }
    }
}
