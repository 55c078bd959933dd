// Mon Oct 19 2026 - Alex

pub struct MathUtils;

impl MathUtils {
    /// Remainder in `[0, modulus)` regardless of the sign of `value`.
    pub fn mod_floor(value: i128, modulus: i128) -> i128 {
        debug_assert!(modulus > 0);
        value.rem_euclid(modulus)
    }

    pub fn gcd(mut a: i128, mut b: i128) -> i128 {
        a = a.abs();
        b = b.abs();
        while b != 0 {
            let temp = b;
            b = a % b;
            a = temp;
        }
        a
    }

    /// Returns `(d, x, y)` with `a*x + b*y == d == gcd(a, b)`.
    ///
    /// Inputs are expected non-negative; `|x| <= b/d` and `|y| <= a/d`.
    pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
        let (mut old_r, mut r) = (a, b);
        let (mut old_x, mut x) = (1i128, 0i128);
        let (mut old_y, mut y) = (0i128, 1i128);

        while r != 0 {
            let q = old_r / r;
            (old_r, r) = (r, old_r - q * r);
            (old_x, x) = (x, old_x - q * x);
            (old_y, y) = (y, old_y - q * y);
        }

        (old_r, old_x, old_y)
    }

    /// Least common multiple of two positive values, or `None` if it does not fit in `i64`.
    pub fn checked_lcm(a: i64, b: i64) -> Option<i64> {
        if a <= 0 || b <= 0 {
            return None;
        }
        let d = Self::gcd(a as i128, b as i128);
        let lcm = (a as i128 / d) * b as i128;
        i64::try_from(lcm).ok()
    }
}
