//! Even and odd parity.

use crate::BitString;
use core::fmt;

/// Parity convention applied to a [BitString].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Total number of ones (including the parity bit) is even.
    Even,
    /// Total number of ones (including the parity bit) is odd.
    Odd,
}

impl Mode {
    /// Both conventions, in menu order.
    pub const ALL: [Mode; 2] = [Mode::Even, Mode::Odd];

    /// Upper-case label used in headings.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Even => "EVEN",
            Mode::Odd => "ODD",
        }
    }

    /// Parity bit required for data containing `ones` set bits.
    pub fn bit(&self, ones: usize) -> u8 {
        let rem = (ones % 2) as u8;
        match self {
            Mode::Even => rem,
            Mode::Odd => 1 - rem,
        }
    }

    fn goal(&self) -> &'static str {
        match self {
            Mode::Even => "to keep total even",
            Mode::Odd => "to make total odd",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Even => f.write_str("even"),
            Mode::Odd => f.write_str("odd"),
        }
    }
}

/// Outcome of computing a parity bit over some data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    data: BitString,
    mode: Mode,
    ones: usize,
    zeros: usize,
    parity_bit: u8,
    explanation: String,
}

impl Report {
    pub fn data(&self) -> &BitString {
        &self.data
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn ones(&self) -> usize {
        self.ones
    }

    pub fn zeros(&self) -> usize {
        self.zeros
    }

    /// The computed parity bit (0 or 1).
    pub fn parity_bit(&self) -> u8 {
        self.parity_bit
    }

    /// How the parity bit was derived, in one line.
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Data followed by the parity bit.
    pub fn transmitted(&self) -> String {
        format!("{}{}", self.data, self.parity_bit)
    }

    /// Number of ones in the transmitted frame.
    pub fn total_ones(&self) -> usize {
        self.ones + self.parity_bit as usize
    }
}

/// Compute the parity bit for `data` under `mode`.
pub fn compute_parity(data: &BitString, mode: Mode) -> Report {
    let ones = data.ones();
    let zeros = data.len() - ones;
    let parity_bit = mode.bit(ones);
    let observed = if ones % 2 == 0 { "EVEN" } else { "ODD" };
    let explanation = format!(
        "Count of 1's = {ones} ({observed}) -> Parity bit = {parity_bit} ({})",
        mode.goal()
    );
    Report {
        data: data.clone(),
        mode,
        ones,
        zeros,
        parity_bit,
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate_binary, MAX_BITS, MIN_BITS};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use test_case::test_case;

    fn bits(s: &str) -> BitString {
        validate_binary(s).unwrap()
    }

    #[test_case("1011", Mode::Even, 1, "10111"; "odd ones even mode")]
    #[test_case("1011", Mode::Odd, 0, "10110"; "odd ones odd mode")]
    #[test_case("0000", Mode::Even, 0, "00000"; "no ones even mode")]
    #[test_case("0000", Mode::Odd, 1, "00001"; "no ones odd mode")]
    #[test_case("1111", Mode::Even, 0, "11110"; "all ones even mode")]
    #[test_case("1111", Mode::Odd, 1, "11111"; "all ones odd mode")]
    fn test_known_values(data: &str, mode: Mode, bit: u8, transmitted: &str) {
        let report = compute_parity(&bits(data), mode);
        assert_eq!(report.parity_bit(), bit);
        assert_eq!(report.transmitted(), transmitted);
        assert_eq!(report.mode(), mode);
        assert_eq!(report.data().as_str(), data);
    }

    #[test]
    fn test_explanation() {
        let data = bits("1011");
        assert_eq!(
            compute_parity(&data, Mode::Even).explanation(),
            "Count of 1's = 3 (ODD) -> Parity bit = 1 (to keep total even)"
        );
        assert_eq!(
            compute_parity(&data, Mode::Odd).explanation(),
            "Count of 1's = 3 (ODD) -> Parity bit = 0 (to make total odd)"
        );

        let data = bits("0000");
        assert_eq!(
            compute_parity(&data, Mode::Odd).explanation(),
            "Count of 1's = 0 (EVEN) -> Parity bit = 1 (to make total odd)"
        );
    }

    #[test]
    fn test_random_strings() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..1_000 {
            let len = rng.gen_range(MIN_BITS..=MAX_BITS);
            let s: String = (0..len)
                .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
                .collect();
            let expected_ones = s.chars().filter(|c| *c == '1').count();
            let data = bits(&s);

            let even = compute_parity(&data, Mode::Even);
            assert_eq!(even.ones(), expected_ones);
            assert_eq!(even.ones() + even.zeros(), len);
            assert_eq!(even.parity_bit() as usize, expected_ones % 2);
            assert_eq!(even.total_ones() % 2, 0);

            let odd = compute_parity(&data, Mode::Odd);
            assert_eq!(odd.parity_bit() as usize, 1 - (expected_ones % 2));
            assert_eq!(odd.total_ones() % 2, 1);
        }
    }

    #[test]
    fn test_modes_disagree() {
        for ones in 0..=MAX_BITS {
            assert_ne!(Mode::Even.bit(ones), Mode::Odd.bit(ones));
        }
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Even.to_string(), "even");
        assert_eq!(Mode::Odd.label(), "ODD");
        assert_eq!(Mode::ALL, [Mode::Even, Mode::Odd]);
    }
}
