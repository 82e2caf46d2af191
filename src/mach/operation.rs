use super::Cell;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Pure cell operations

/// Canonical truth cell: -1 for true, 0 for false.
pub fn truth(b: bool) -> Cell {
    if b {
        -1
    } else {
        0
    }
}

/// Floored division. Guarantees, for non-zero `b`:
/// `a = b*q + r`, `0 <= |r| < |b|`, `sign(r) == sign(b)`.
pub fn floored_divmod(a: Cell, b: Cell) -> Result<(Cell, Cell)> {
    if b == 0 {
        return Err(error!(DivisionByZero; "division by zero"));
    }
    // Machine division truncates toward zero; shift the remainder into
    // the divisor's sign class when they disagree.
    let mut q = a.wrapping_div(b);
    let mut r = a.wrapping_rem(b);
    if r != 0 && (r < 0) != (b < 0) {
        r += b;
        q -= 1;
    }
    Ok((q, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth() {
        assert_eq!(truth(true), -1);
        assert_eq!(truth(false), 0);
    }

    #[test]
    fn test_floored_signs() {
        assert_eq!(floored_divmod(7, 3).unwrap(), (2, 1));
        assert_eq!(floored_divmod(-7, 3).unwrap(), (-3, 2));
        assert_eq!(floored_divmod(7, -3).unwrap(), (-3, -2));
        assert_eq!(floored_divmod(-7, -3).unwrap(), (2, -1));
    }

    #[test]
    fn test_floored_invariant() {
        for &a in &[-9, -7, -1, 0, 1, 6, 13] {
            for &b in &[-4, -3, -1, 1, 2, 5] {
                let (q, r) = floored_divmod(a, b).unwrap();
                assert_eq!(a, b * q + r, "a={} b={}", a, b);
                assert!(r.abs() < b.abs(), "a={} b={}", a, b);
                assert!(r == 0 || (r < 0) == (b < 0), "a={} b={}", a, b);
            }
        }
    }

    #[test]
    fn test_zero_divisor() {
        assert!(floored_divmod(5, 0).is_err());
    }
}
