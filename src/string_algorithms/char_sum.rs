/// Character code that stops accumulation: 69, `'E'`.
const BREAK_CODE: u32 = 'E' as u32;

/// Sums the character codes of `text`, returning the running sum the
/// moment an `'E'` is seen (its code is not added). Still O(N) worst
/// case; the break condition only shortens average-case work.
pub fn char_sum(text: &str) -> u64 {
    let mut sum = 0u64;
    for c in text.chars() {
        let code = c as u32;
        if code == BREAK_CODE {
            return sum;
        }
        sum += u64::from(code);
    }
    sum
}
