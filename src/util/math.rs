use bitflags::bitflags;
use num::Float;
use std::{fmt, ops::RangeInclusive};

bitflags! {
    /// Which terms of `ax² + bx + c` take part in a curve.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Terms: u8 {
        const CONSTANT = 0b001;
        const LINEAR = 0b010;
        const QUADRATIC = 0b100;
    }
}

/// Range shared by the coefficient sliders and the command line.
pub const COEFFICIENT_RANGE: RangeInclusive<i32> = -10..=10;

/// Slider values. `a` multiplies x², `b` multiplies x and `c` is the constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "persistence", derive(serde::Deserialize, serde::Serialize))]
pub struct Coefficients {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self { a: 1, b: 1, c: 1 }
    }
}

impl Coefficients {
    pub fn clamped(self) -> Self {
        let clamp = |v: i32| v.clamp(*COEFFICIENT_RANGE.start(), *COEFFICIENT_RANGE.end());
        Self {
            a: clamp(self.a),
            b: clamp(self.b),
            c: clamp(self.c),
        }
    }

    // Ascending power order, like numpy's polyval
    pub fn ascending(&self) -> [f64; 3] {
        [self.c.into(), self.b.into(), self.a.into()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial<T: Float> {
    // Contract: coefficients[i] multiplies x^i
    coefficients: [T; 3],
}

impl<T: Float> Polynomial<T> {
    /// Zeroes every coefficient whose term is not part of `terms`.
    pub fn masked(coefficients: [T; 3], terms: Terms) -> Self {
        let [c, b, a] = coefficients;
        let keep = |term: Terms, v: T| if terms.contains(term) { v } else { T::zero() };
        Self {
            coefficients: [
                keep(Terms::CONSTANT, c),
                keep(Terms::LINEAR, b),
                keep(Terms::QUADRATIC, a),
            ],
        }
    }

    pub fn eval(&self, x: T) -> T {
        self.coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, &coefficient| acc * x + coefficient)
    }

    pub fn sample<'a, I>(&'a self, xs: I) -> impl Iterator<Item = (T, T)> + 'a
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        xs.into_iter().map(move |x| (x, self.eval(x)))
    }
}

impl<T: Float + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c, b, a] = self.coefficients;
        write!(f, "{}x² + {}x + {}", a, b, c)
    }
}

/// `n` evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| start + step * i as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIPLES: [[f64; 3]; 5] = [
        [1.0, 1.0, 1.0],
        [0.0, 0.0, 0.0],
        [-3.0, 7.0, 2.0],
        [10.0, -10.0, -10.0],
        [-1.0, 0.0, 5.0],
    ];

    #[test]
    fn eval_at_zero_is_masked_constant() {
        for bits in 0..=Terms::all().bits() {
            let terms = Terms::from_bits_truncate(bits);
            for &triple in TRIPLES.iter() {
                let poly = Polynomial::masked(triple, terms);
                let expected = if terms.contains(Terms::CONSTANT) {
                    triple[0]
                } else {
                    0.0
                };
                assert_eq!(poly.eval(0.0), expected, "terms {:?} {:?}", terms, triple);
            }
        }
    }

    #[test]
    fn eval_matches_expanded_form() {
        let poly = Polynomial::masked([-3.0, 7.0, 2.0], Terms::all());
        for &x in [-2.5, 0.0, 1.0, 4.0].iter() {
            let expected: f64 = 2.0 * x * x + 7.0 * x - 3.0;
            assert!((poly.eval(x) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn masking_drops_terms() {
        let poly = Polynomial::masked([4.0, 5.0, 6.0], Terms::QUADRATIC | Terms::CONSTANT);
        assert_eq!(poly.coefficients, [4.0, 0.0, 6.0]);
        assert_eq!(poly.eval(2.0), 28.0);

        let linear = Polynomial::masked([4.0f32, 5.0, 6.0], Terms::LINEAR);
        assert_eq!(linear.eval(3.0), 15.0);
    }

    #[test]
    fn coefficients_are_ascending() {
        let coefficients = Coefficients { a: 3, b: -2, c: 9 };
        assert_eq!(coefficients.ascending(), [9.0, -2.0, 3.0]);
    }

    #[test]
    fn coefficients_clamp_to_slider_range() {
        let coefficients = Coefficients { a: 42, b: -11, c: 0 }.clamped();
        assert_eq!(coefficients, Coefficients { a: 10, b: -10, c: 0 });
    }

    #[test]
    fn display_lists_highest_power_first() {
        let poly = Polynomial::masked([1.0, -2.0, 3.0], Terms::QUADRATIC | Terms::CONSTANT);
        assert_eq!(poly.to_string(), "3x² + 0x + 1");
    }

    #[test]
    fn linspace_includes_both_ends() {
        let xs: Vec<_> = linspace(-20.0, 20.0, 100).collect();
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], -20.0);
        assert!((xs[99] - 20.0).abs() < 1e-9);

        assert_eq!(linspace(3.0, 9.0, 1).collect::<Vec<_>>(), vec![3.0]);
        assert_eq!(linspace(3.0, 9.0, 0).count(), 0);
    }

    #[test]
    fn sample_pairs_abscissa_with_value() {
        let poly = Polynomial::masked([1.0, 0.0, 1.0], Terms::all());
        let points: Vec<_> = poly.sample(linspace(-1.0, 1.0, 3)).collect();
        assert_eq!(points, vec![(-1.0, 2.0), (0.0, 1.0), (1.0, 2.0)]);
    }
}
