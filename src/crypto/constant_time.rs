/// Compares two byte strings without short-circuiting on the first differing byte.
///
/// Lengths are compared up front. The length of an encoded digest is fixed by its salt
/// and algorithm, neither of which is secret.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0_u8, |diff, (x, y)| diff | (x ^ y)) == 0
}
