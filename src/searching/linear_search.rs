pub fn linear_search<T: PartialEq>(haystack: &[T], needle: &T) -> bool {
    for v in haystack {
        if v == needle {
            return true;
        }
    }
    false
}
