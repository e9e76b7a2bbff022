pub mod binary_search;
pub mod linear_search;
pub mod two_crystal_balls;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("binary search requires a non-empty haystack")]
    EmptyHaystack,
}
