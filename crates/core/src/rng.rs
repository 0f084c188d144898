use rand::{rngs::OsRng, rngs::StdRng, RngCore, SeedableRng};
use std::fmt;

/// Random source behind every shuffle. Draws go through `try_fill_bytes`, so entropy
/// failures surface as errors.
pub struct RngState {
    seed: Option<u64>,
    rng: Box<dyn RngCore>,
}

impl RngState {
    /// Operating system entropy.
    pub fn secure() -> Self {
        Self {
            seed: None,
            rng: Box::new(OsRng),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: Box::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_source(source: Box<dyn RngCore>) -> Self {
        Self {
            seed: None,
            rng: source,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn try_next_u64(&mut self) -> Result<u64, rand::Error> {
        let mut buf = [0u8; 8];
        self.rng.try_fill_bytes(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    /// Uniform integer in `[0, upper]`.
    pub fn try_index_inclusive(&mut self, upper: usize) -> Result<usize, rand::Error> {
        let span = upper as u64 + 1;
        // Reject the tail of the u64 range that would bias the modulo.
        let zone = u64::MAX - (u64::MAX % span);
        loop {
            let value = self.try_next_u64()?;
            if value < zone {
                return Ok((value % span) as usize);
            }
        }
    }
}

impl fmt::Debug for RngState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RngState").field("seed", &self.seed).finish()
    }
}
