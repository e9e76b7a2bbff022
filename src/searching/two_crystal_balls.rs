//! Two crystal balls — first break index in a monotonic boolean sequence.
//!
//! Variables:
//!   breaks : &[bool] — false prefix then true suffix, length N
//!   jump   : usize   — floor(sqrt(N)), coarse stride
//!   i      : usize   — probe index
//!
//! Equations:
//!   coarse: probe i = jump, 2*jump, ... until breaks[i] or i >= N   <= sqrt(N) probes
//!   fine:   i -= jump, then walk i += 1 while i < N                 <= sqrt(N) probes
//!   result = min { i | breaks[i] },  None if breaks is all false

use log::trace;

pub fn two_crystal_balls(breaks: &[bool]) -> Option<usize> {
    // jump would be 0 here and the coarse phase would never advance
    if breaks.is_empty() {
        return None;
    }
    let jump = (breaks.len() as f64).sqrt().floor() as usize;

    let mut i = jump;
    while i < breaks.len() && !breaks[i] {
        trace!("coarse probe at {i}");
        i += jump;
    }
    i -= jump;

    while i < breaks.len() {
        trace!("fine probe at {i}");
        if breaks[i] {
            return Some(i);
        }
        i += 1;
    }
    None
}
