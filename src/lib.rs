//! # Algokit Crate
//!
//! Textbook algorithm primitives organized by category.
//!
//! ## Modules
//!
//! - `string_algorithms` – character-code summation demos (linear vs quadratic cost)
//! - `searching` – lookup algorithms (linear, binary, two crystal balls)
//! - `sorting` – ordering algorithms (bubble sort, basic and early-exit forms)
//! - `data_structures` – doubly-linked node arena
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algokit::searching::binary_search::binary_search;
//!
//! let found = binary_search(&[1, 2, 3], &2).unwrap();
//! assert!(found);
//! ```
//!
//! ---
//!
//! Progress narration inside the search and sort loops goes through the
//! `log` facade at trace level; with no logger installed it is a no-op.

pub mod data_structures;
pub mod searching;
pub mod sorting;
pub mod string_algorithms;
