use crate::PfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PfError::NonFinite { what, value: v })
    }
}

/// `n` evenly spaced values over [a, b], endpoints included.
///
/// Returns an empty vec for n == 0 and `[a]` for n == 1.
pub fn linspace(a: Real, b: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (n - 1) as Real;
            (0..n).map(|i| a + step * i as Real).collect()
        }
    }
}

/// `n` log10-spaced values over [10^log_a, 10^log_b], endpoints included.
pub fn logspace(log_a: Real, log_b: Real, n: usize) -> Vec<Real> {
    linspace(log_a, log_b, n)
        .into_iter()
        .map(|e| 10.0_f64.powf(e))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linspace_is_sorted_and_sized(
            a in -1.0e3_f64..1.0e3,
            span in 1.0e-3_f64..1.0e3,
            n in 2_usize..500,
        ) {
            let v = linspace(a, a + span, n);
            prop_assert_eq!(v.len(), n);
            prop_assert!(v.windows(2).all(|w| w[1] > w[0]));
            prop_assert_eq!(v[0], a);
        }

        #[test]
        fn nearly_equal_is_reflexive(x in -1.0e12_f64..1.0e12) {
            prop_assert!(nearly_equal(x, x, Tolerances::default()));
        }
    }
}
