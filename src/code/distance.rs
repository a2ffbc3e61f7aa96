//! Free distance of a convolutional encoder.
//!
//! The free distance is the minimum Hamming weight of an output sequence
//! produced by a non-zero, eventually-zero input sequence. It is computed as
//! a shortest path over the encoder trellis:
//!
//! - a node is the content of all `k` shift registers, input stream `i`
//!   holding `max_size(i) - 1` past symbols;
//! - from every node there is one edge per next input vector in GF(4)^k;
//! - an edge costs the number of non-zero output symbols it emits.
//!
//! The search starts at the all-zero node and stops the first time the
//! all-zero node is popped again. The zero-input self-loop at the start is
//! skipped so the search cannot return immediately.
//!
//! Node keys pack every register digit into a `u64` (two bits per symbol,
//! oldest symbol least significant, stream 0 first).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use super::Code;
use crate::error::{Error, Result};
use crate::gf::tables::ORDER;
use crate::gf::Gf4;
use crate::utils::odometer_step;

/// Largest total register length whose states fit a `u64` key.
pub const MAX_REGISTER_SYMBOLS: usize = 31;

/// Compute the free distance of `code`.
///
/// # Errors
///
/// Returns [`Error::InvalidCode`] if the code fails validation or has no
/// input or output streams, and [`Error::InvalidParams`] if the trellis has
/// more than [`MAX_REGISTER_SYMBOLS`] register symbols.
pub fn free_distance(code: &Code) -> Result<u64> {
    if !code.validate() {
        return Err(Error::invalid_code(
            "generators must be causal and number exactly n·k",
        ));
    }
    if code.n() == 0 || code.k() == 0 {
        return Err(Error::invalid_code(
            "free distance needs at least one input and one output stream",
        ));
    }

    let trellis = Trellis::new(code)?;
    let distance = trellis.shortest_return()?;
    debug!(
        n = code.n(),
        k = code.k(),
        lags = ?trellis.lags,
        distance,
        "free distance"
    );
    Ok(distance)
}

struct Trellis<'a> {
    code: &'a Code,
    lags: Vec<usize>,
}

impl<'a> Trellis<'a> {
    fn new(code: &'a Code) -> Result<Self> {
        let lags = (0..code.k())
            .map(|i| code.max_size(i).map(|size| size.saturating_sub(1)))
            .collect::<Result<Vec<_>>>()?;

        let total: usize = lags.iter().sum();
        if total > MAX_REGISTER_SYMBOLS {
            return Err(Error::invalid_params(format!(
                "trellis with {total} register symbols exceeds the limit of {MAX_REGISTER_SYMBOLS}"
            )));
        }
        Ok(Self { code, lags })
    }

    /// Unpack a node key into one register per input stream. Each register
    /// carries one extra trailing slot for the incoming symbol.
    fn decode(&self, mut key: u64) -> Vec<Vec<Gf4>> {
        self.lags
            .iter()
            .map(|&lag| {
                let mut register = Vec::with_capacity(lag + 1);
                for _ in 0..lag {
                    register.push(digit(key % ORDER as u64));
                    key /= ORDER as u64;
                }
                register.push(Gf4::ZERO);
                register
            })
            .collect()
    }

    /// Shift every register by its incoming symbol: returns the key of the
    /// node reached and the weight of the emitted output block.
    fn step(&self, registers: &[Vec<Gf4>]) -> (u64, u64) {
        let mut next = 0u64;
        let mut place = 1u64;
        for register in registers {
            for &symbol in &register[1..] {
                next += u64::from(symbol.value()) * place;
                place = place.wrapping_mul(ORDER as u64);
            }
        }

        let n = self.code.n();
        let weight = (0..n)
            .filter(|&m| {
                let out: Gf4 = registers
                    .iter()
                    .enumerate()
                    .map(|(i, register)| self.code.generators()[i * n + m].inner_product(register))
                    .sum();
                !out.is_zero()
            })
            .count() as u64;

        (next, weight)
    }

    fn shortest_return(&self) -> Result<u64> {
        let k = self.code.k();
        let mut best: HashMap<u64, u64> = HashMap::new();
        let mut queue = BinaryHeap::new();
        queue.push(Reverse((0u64, 0u64)));

        let mut departed = false;
        while let Some(Reverse((dist, node))) = queue.pop() {
            if departed && node == 0 {
                debug!(visited = best.len(), "trellis search returned to zero");
                return Ok(dist);
            }
            if best.get(&node).is_some_and(|&d| dist > d) {
                continue;
            }

            let mut registers = self.decode(node);
            let mut input = vec![Gf4::ZERO; k];
            loop {
                let idle = !departed && input.iter().all(|x| x.is_zero());
                if !idle {
                    for (register, &symbol) in registers.iter_mut().zip(&input) {
                        if let Some(slot) = register.last_mut() {
                            *slot = symbol;
                        }
                    }
                    let (next, weight) = self.step(&registers);
                    let candidate = dist + weight;
                    if best.get(&next).map_or(true, |&d| candidate < d) {
                        best.insert(next, candidate);
                        queue.push(Reverse((candidate, next)));
                    }
                }
                if !odometer_step(&mut input) {
                    break;
                }
            }
            departed = true;
        }

        Err(Error::invalid_code(
            "trellis search ended without returning to the zero state",
        ))
    }
}

fn digit(value: u64) -> Gf4 {
    // value < ORDER by construction
    match value {
        1 => Gf4::ONE,
        2 => Gf4::U,
        3 => Gf4::V,
        _ => Gf4::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;

    fn code(text: &str) -> Code {
        text.parse().unwrap()
    }

    #[test]
    fn test_repetition_code() {
        assert_eq!(code("1|1").min_distance(), Ok(2));
        assert_eq!(code("1|1|1").min_distance(), Ok(3));
    }

    #[test]
    fn test_zero_length_trellis() {
        assert_eq!(code("1").min_distance(), Ok(1));
    }

    #[test]
    fn test_memory_one() {
        assert_eq!(code("11|1u").min_distance(), Ok(4));
        // 1 + x on a single output: weight 2 for an impulse
        assert_eq!(code("11").min_distance(), Ok(2));
    }

    #[test]
    fn test_unequal_generator_lengths() {
        // the shorter generator pads with zeros
        assert_eq!(code("1|11").min_distance(), Ok(3));
    }

    #[test]
    fn test_two_input_streams() {
        // each input stream drives its own output
        assert_eq!(code("1|0||0|1").min_distance(), Ok(1));
        assert_eq!(code("1|1|0||0|1|1").min_distance(), Ok(2));
    }

    #[test]
    fn test_invalid_code_fails() {
        let mut c = Code::new(2, 1);
        c.add(Series::one());
        assert!(matches!(c.min_distance(), Err(Error::InvalidCode { .. })));

        assert!(matches!(
            code("u(1)|1").min_distance(),
            Err(Error::InvalidCode { .. })
        ));
        assert!(Code::new(0, 1).min_distance().is_err());
    }

    #[test]
    fn test_zero_code_has_distance_zero() {
        assert_eq!(code("0|0").min_distance(), Ok(0));
        assert_eq!(code("00|0").min_distance(), Ok(0));
    }

    #[test]
    fn test_register_limit() {
        let long = "1".repeat(MAX_REGISTER_SYMBOLS + 2);
        let c: Code = long.parse().unwrap();
        assert!(matches!(
            c.min_distance(),
            Err(Error::InvalidParams { .. })
        ));
    }

    #[test]
    fn test_decode_step_roundtrip() {
        let c = code("1u1|11");
        let trellis = Trellis::new(&c).unwrap();
        assert_eq!(trellis.lags, vec![2]);
        // register [oldest, newer, incoming]
        let registers = trellis.decode(0b11_10);
        assert_eq!(registers, vec![vec![Gf4::U, Gf4::V, Gf4::ZERO]]);
        let (next, _) = trellis.step(&registers);
        assert_eq!(next, 3);
    }
}
