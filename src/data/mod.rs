//! Data structures for a single categorical character.

mod character;
mod taxon_states;

pub use character::{parse_taxon, CharacterData, DEFAULT_SEPARATOR};
pub use taxon_states::{Taxon, TaxonStateSet};
