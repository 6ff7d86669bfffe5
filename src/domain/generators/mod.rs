//! Derivation rules producing default analysis content.
//!
//! Pure, deterministic generators: the same inputs always yield the same
//! output, and every generator returns a complete record.

mod company_pestel;
mod competitors;
mod porters_defaults;

pub use company_pestel::company_pestel;
pub use competitors::competitors;
pub use porters_defaults::porters_defaults;
