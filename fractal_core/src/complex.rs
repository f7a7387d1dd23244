use std::ops::{Add, Mul};

/// Single-precision complex value, matching the shader's arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub re: f32,
    pub im: f32,
}

impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);

    pub const fn new(re: f32, im: f32) -> Self {
        Complex { re, im }
    }

    /// Squared magnitude. The escape test compares this against 4 instead of
    /// taking a square root.
    pub fn norm_sqr(self) -> f32 {
        self.re * self.re + self.im * self.im
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squaring_matches_the_expansion() {
        let z = Complex::new(3.0, -2.0);
        assert_eq!(z * z, Complex::new(5.0, -12.0));
    }

    #[test]
    fn norm_sqr_is_the_squared_magnitude() {
        assert_eq!(Complex::new(3.0, 4.0).norm_sqr(), 25.0);
        assert_eq!(Complex::ZERO.norm_sqr(), 0.0);
    }

    #[test]
    fn addition_is_componentwise() {
        let sum = Complex::new(1.0, -0.5) + Complex::new(-2.0, 1.5);
        assert_eq!(sum, Complex::new(-1.0, 1.0));
    }
}
