pub mod char_sum;
pub mod pairwise_char_sum;
