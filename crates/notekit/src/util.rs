pub fn is_word_char(c: char) -> bool {
    return c.is_alphanumeric() || c == '_';
}

#[inline]
pub fn sort2<T>(a: T, b: T) -> (T, T)
where
    T: Ord,
{
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
