//! # Baht Text
//!
//! Converts exact money amounts into Thai baht text, the written form used
//! on cheques and invoices.
//!
//! ## Design Principles
//!
//! - **Exact input**: Amounts are exact decimals of any magnitude
//!   (`bigdecimal::BigDecimal`, or `rust_decimal::Decimal`); more than two
//!   fractional digits is an error, never rounded away
//! - **Unbounded digits**: The transliterator works on digit sequences of any
//!   length, grouping by six with repeated ล้าน
//! - **Pure conversion**: No shared state; safe to call from any thread
//!
//! ## Example
//!
//! ```
//! use std::str::FromStr;
//! use rust_decimal::Decimal;
//! use bahttext::to_baht_text;
//!
//! let amount = Decimal::from_str("33333.75").unwrap();
//! assert_eq!(
//!     to_baht_text(&amount).unwrap(),
//!     "สามหมื่นสามพันสามร้อยสามสิบสามบาทเจ็ดสิบห้าสตางค์"
//! );
//! ```

pub mod amount;
pub mod batch;
pub mod config;
pub mod convert;
pub mod digits;
pub mod error;
pub mod normalize;
pub mod repl;
pub mod server;
pub mod transliterate;
pub mod vocab;

pub use amount::parse_amount;
pub use batch::{convert_csv, BatchSummary};
pub use config::ServerConfig;
pub use convert::to_baht_text;
pub use digits::Digit;
pub use error::{BahtTextError, Result};
pub use normalize::{ExactAmount, SplitAmount};
pub use transliterate::{spell, spell_digits};
