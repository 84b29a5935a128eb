//! Uniform sampling for [`Matrix::random`][crate::Matrix::random] and
//! [`Vector::random`][crate::Vector::random].

use fastrand::Rng;

use crate::Float;

/// Draws a value uniformly distributed in `[-1, 1)`.
pub(crate) fn signed_unit(rng: &mut Rng) -> Float {
    rng.f32() * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range() {
        let mut rng = Rng::with_seed(0x5eed);
        for _ in 0..10_000 {
            let v = signed_unit(&mut rng);
            assert!((-1.0..1.0).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn seeded() {
        let a = (0..16)
            .scan(Rng::with_seed(7), |rng, _| Some(signed_unit(rng)))
            .collect::<Vec<_>>();
        let b = (0..16)
            .scan(Rng::with_seed(7), |rng, _| Some(signed_unit(rng)))
            .collect::<Vec<_>>();
        assert_eq!(a, b);
    }
}
