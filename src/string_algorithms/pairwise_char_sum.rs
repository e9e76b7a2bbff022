//! Pairwise character-code sums — the nested-loop vs sequential-pass contrast.
//!
//! Variables:
//!   codes : Vec<u32> — character codes of the input, length N
//!
//! Equations:
//!   pairwise_char_sum:      sum over all (i, j) of codes[i] + codes[j]   O(N^2)
//!   pairwise_char_sum_two:  sum of codes(a) then sum of codes(b)         O(A + B)

/// Sums `code(i) + code(j)` for every ordered pair of positions in `text`,
/// including `i == j`. Two nested loops over the same sequence: quadratic.
pub fn pairwise_char_sum(text: &str) -> u64 {
    let codes: Vec<u32> = text.chars().map(|c| c as u32).collect();
    let mut sum = 0u64;
    for i in 0..codes.len() {
        for j in 0..codes.len() {
            sum += u64::from(codes[i]) + u64::from(codes[j]);
        }
    }
    sum
}

/// Sums all codes of `a`, then all codes of `b`. Two independent passes,
/// no nesting: linear in the combined length.
pub fn pairwise_char_sum_two(a: &str, b: &str) -> u64 {
    let mut sum = 0u64;
    for c in a.chars() {
        sum += u64::from(c as u32);
    }
    for c in b.chars() {
        sum += u64::from(c as u32);
    }
    sum
}
