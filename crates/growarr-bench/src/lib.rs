//! Benchmark workloads for growarr.
//!
//! - [`removal_positions`]: deterministic in-range removal positions via seed
//! - [`filled`]: an array holding `0..len` with default policies

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growarr::{ArrayConfig, ArrayError, Element, GrowableArray};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build an array from `config` holding `0..len`.
pub fn filled(config: ArrayConfig, len: usize) -> Result<GrowableArray, ArrayError> {
    let mut arr = GrowableArray::with_config(config)?;
    for i in 0..len {
        arr.append(i as Element)?;
    }
    Ok(arr)
}

/// Generate `len` removal positions, each valid for an array that shrinks
/// by one element per removal starting from size `len`.
pub fn removal_positions(len: usize, seed: u64) -> Vec<isize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|i| {
            let remaining = (len - i) as u64;
            (rng.next_u64() % remaining) as isize
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_stay_in_range() {
        let positions = removal_positions(100, 42);
        assert_eq!(positions.len(), 100);
        for (i, &p) in positions.iter().enumerate() {
            assert!(p >= 0 && (p as usize) < 100 - i);
        }
    }

    #[test]
    fn positions_are_deterministic() {
        assert_eq!(removal_positions(50, 7), removal_positions(50, 7));
    }

    #[test]
    fn draining_with_positions_empties_array() {
        let mut arr = filled(ArrayConfig::new(8), 64).unwrap();
        for p in removal_positions(64, 3) {
            arr.remove(p).unwrap();
        }
        assert!(arr.is_empty());
    }
}
