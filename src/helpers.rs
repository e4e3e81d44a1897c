//! Pure arithmetic used by the functions section.

/// Sum two 32-bit integers, wrapping on overflow.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Multiply two 32-bit integers, wrapping on overflow.
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}
