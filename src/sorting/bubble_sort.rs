//! Bubble sort — repeated adjacent compare-and-swap passes, in place.
//!
//! Variables:
//!   arr : &mut [T] — sorted in place, length N
//!
//! Equations:
//!   pass i: scan j = 0 .. N-1-i, swap arr[j], arr[j+1] if out of order
//!   after pass i the i+1 largest elements occupy the tail
//!   early-exit form stops after the first swap-free pass: best case O(N)
//!   basic form always runs N passes: O(N^2) even on sorted input

use log::trace;

/// Early-exit form: stops after the first pass with no swaps.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let mut n = arr.len();
    let mut swapped = true;
    while swapped && n > 1 {
        swapped = false;
        for j in 0..n - 1 {
            if arr[j] > arr[j + 1] {
                trace!("swapping positions {j} and {}", j + 1);
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        n -= 1;
    }
}

/// Textbook form: a fixed N passes with no early exit.
pub fn bubble_sort_basic<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    for i in 0..len {
        for j in 0..len - 1 - i {
            if arr[j] > arr[j + 1] {
                trace!("swapping positions {j} and {}", j + 1);
                arr.swap(j, j + 1);
            }
        }
    }
}
