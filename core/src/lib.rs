//! Validate bounded binary strings and compute even or odd parity bits.
//!
//! A parity bit is a single redundancy bit appended to data so that the total count of one-bits
//! follows a fixed convention. Under [Mode::Even] the count (including the parity bit) is even,
//! under [Mode::Odd] it is odd. A receiver can then detect any single flipped bit.
//!
//! # Example
//!
//! ```rust
//! use paritybit::{compute_parity, validate_binary, Mode};
//!
//! let data = validate_binary("1011").unwrap();
//! let even = compute_parity(&data, Mode::Even);
//! assert_eq!(even.ones(), 3);
//! assert_eq!(even.parity_bit(), 1);
//! assert_eq!(even.transmitted(), "10111");
//!
//! let odd = compute_parity(&data, Mode::Odd);
//! assert_eq!(odd.transmitted(), "10110");
//! ```
//!
//! # Status
//!
//! Only single-bit parity is provided. There is no error correction.

mod bits;
pub use bits::{validate_binary, BitString, MAX_BITS, MIN_BITS};
mod error;
pub use error::Error;
mod parity;
pub use parity::{compute_parity, Mode, Report};
mod range;
pub use range::validate_integer_range;
