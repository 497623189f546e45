//! Parent module for the three static tables: the property table, the
//! sequence table, and the combination table.
//!
//! Each submodule owns one table: [`property`] the two-stage per-codepoint
//! lookup, [`sequence`] the packed word array backing decompositions and
//! case mappings, [`combination`] the starter/combiner composition index.
//! [`data`] holds the curated ruleset all three are built from.

pub mod combination;
pub mod data;
pub mod property;
pub mod sequence;

pub use property::{BidiClass, BoundClass, Category, DecompType, Property, get_property};
