// Mon Oct 19 2026 - Alex

use crate::alignment::{Alignment, AlignmentError};
use crate::utils::MathUtils;
use log::debug;

impl Alignment {
    /// Merges two rules into one satisfied by exactly the sectors satisfying both.
    ///
    /// Returns `Ok(None)` when the rules have no common sector. For two periodic
    /// rules the merged offset is kept in `[0, lcm)`, so the result does not
    /// depend on argument order.
    pub fn intersect(&self, other: &Alignment) -> Result<Option<Alignment>, AlignmentError> {
        if self.grain_size() == 0 {
            return Ok(fixed_point(self, other));
        }
        if other.grain_size() == 0 {
            return Ok(fixed_point(other, self));
        }

        let (g1, g2) = (self.grain_size() as i128, other.grain_size() as i128);
        let (o1, o2) = (self.offset() as i128, other.offset() as i128);

        let (d, p, _) = MathUtils::extended_gcd(g1, g2);
        let diff = o2 - o1;
        if diff % d != 0 {
            debug!("{} and {} have no common sector (gcd {})", self, other, d);
            return Ok(None);
        }

        let grain_size = MathUtils::checked_lcm(self.grain_size(), other.grain_size())
            .ok_or_else(|| {
                AlignmentError::Overflow(format!(
                    "lcm of grain sizes {} and {}",
                    self.grain_size(),
                    other.grain_size()
                ))
            })?;

        // x = o1 + g1 * k with k ≡ (diff / d) * p (mod g2 / d); both factors are
        // reduced first so the product stays inside i128.
        let m = g2 / d;
        let k = MathUtils::mod_floor(diff / d, m) * MathUtils::mod_floor(p, m);
        let k = MathUtils::mod_floor(k, m);
        let offset = MathUtils::mod_floor(o1 + g1 * k, grain_size as i128);

        let merged = Alignment::new(offset as i64, grain_size)?;
        debug!("{} ∩ {} = {}", self, other, merged);
        Ok(Some(merged))
    }
}

fn fixed_point(point: &Alignment, rule: &Alignment) -> Option<Alignment> {
    rule.satisfies(point.offset()).then_some(*point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alignment(offset: i64, grain_size: i64) -> Alignment {
        Alignment::new(offset, grain_size).unwrap()
    }

    #[test]
    fn test_intersect_common_zero_offset() {
        let merged = alignment(0, 4).intersect(&alignment(0, 6)).unwrap();
        assert_eq!(merged, Some(alignment(0, 12)));
    }

    #[test]
    fn test_intersect_gcd_divisibility() {
        // gcd(4, 6) = 2 does not divide 0 - 1
        assert_eq!(alignment(1, 4).intersect(&alignment(0, 6)).unwrap(), None);
        // but it divides 3 - 1
        let merged = alignment(1, 4).intersect(&alignment(3, 6)).unwrap().unwrap();
        assert_eq!(merged, alignment(9, 12));
    }

    #[test]
    fn test_intersect_coprime() {
        let merged = alignment(2, 3).intersect(&alignment(3, 5)).unwrap().unwrap();
        assert_eq!(merged, alignment(8, 15));
    }

    #[test]
    fn test_intersect_canonical_offset() {
        let merged = alignment(-7, 4).intersect(&alignment(1, 4)).unwrap().unwrap();
        assert_eq!(merged, alignment(1, 4));

        let merged = alignment(2049, 2048).intersect(&alignment(1, 8)).unwrap().unwrap();
        assert_eq!(merged, alignment(1, 2048));
    }

    #[test]
    fn test_intersect_zero_grain() {
        let point = alignment(12, 0);
        assert_eq!(point.intersect(&alignment(0, 4)).unwrap(), Some(point));
        assert_eq!(alignment(0, 4).intersect(&point).unwrap(), Some(point));
        assert_eq!(point.intersect(&alignment(1, 4)).unwrap(), None);
        assert_eq!(point.intersect(&alignment(12, 0)).unwrap(), Some(point));
        assert_eq!(point.intersect(&alignment(13, 0)).unwrap(), None);
    }

    #[test]
    fn test_intersect_overflow() {
        let a = alignment(0, i64::MAX);
        let b = alignment(0, i64::MAX - 1);
        let err = a.intersect(&b).unwrap_err();
        assert!(matches!(err, AlignmentError::Overflow(_)));

        // an unsatisfiable pair is reported as empty even when the lcm would overflow
        let a = alignment(0, 1 << 62);
        let b = alignment(1, 3 << 61);
        assert_eq!(a.intersect(&b).unwrap(), None);
    }

    #[test]
    fn test_intersect_matches_brute_force() {
        for g1 in 0..9 {
            for g2 in 0..9 {
                for o1 in -6..6 {
                    for o2 in -6..6 {
                        let a = alignment(o1, g1);
                        let b = alignment(o2, g2);
                        let merged = a.intersect(&b).unwrap();
                        for s in -100..100 {
                            let both = a.satisfies(s) && b.satisfies(s);
                            let got = merged.map_or(false, |m| m.satisfies(s));
                            assert_eq!(both, got, "{} ∩ {} at sector {}", a, b, s);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_intersect_commutative() {
        for g1 in 0..10 {
            for g2 in 0..10 {
                for o1 in -5..15 {
                    for o2 in -5..15 {
                        let a = alignment(o1, g1);
                        let b = alignment(o2, g2);
                        assert_eq!(a.intersect(&b).unwrap(), b.intersect(&a).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn test_intersect_associative() {
        let rules = [
            alignment(0, 4),
            alignment(2, 6),
            alignment(8, 10),
            alignment(20, 0),
            alignment(-1, 3),
            alignment(5, 7),
        ];
        let chain = |x: Option<Alignment>, y: &Alignment| -> Option<Alignment> {
            x.and_then(|x| x.intersect(y).unwrap())
        };
        for a in &rules {
            for b in &rules {
                for c in &rules {
                    let left = chain(a.intersect(b).unwrap(), c);
                    let right = b.intersect(c).unwrap().and_then(|bc| a.intersect(&bc).unwrap());
                    assert_eq!(left, right);
                }
            }
        }
    }
}
