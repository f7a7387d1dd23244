use bytemuck::{Pod, Zeroable};

use crate::complex::Complex;
use crate::viewport::{ScreenPosition, ViewportMapping};

/// Iteration budget; reaching it classifies the point as interior.
pub const MAX_ITERATIONS: u32 = 60;

/// RGBA color, each channel in [0, 1].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    pub const fn grayscale(value: f32) -> Self {
        Color::new(value, value, value, 1.0)
    }

    /// 8-bit quantization for CPU frame buffers.
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |channel: f32| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

/// Count iterations of `z = z * z + c` until the squared magnitude exceeds 4
/// or the budget runs out.
///
/// The counter increments strictly before the escape test, so a reported
/// count includes the escaping step. Swapping the two would shift every
/// boundary shade by one step.
pub fn escape_time(c: Complex) -> u32 {
    let mut z = Complex::ZERO;
    let mut i = 0;
    while i < MAX_ITERATIONS {
        z = z * z + c;
        i += 1;
        if z.norm_sqr() > 4.0 {
            break;
        }
    }
    i
}

/// Grayscale for an iteration count: interior points are black, escaping
/// points shade up to pure white for a count of `MAX_ITERATIONS - 1`.
///
/// The divisor is `MAX_ITERATIONS - 1`, not `MAX_ITERATIONS`; an escape on
/// the final allowed step leaves the loop with the full count and takes the
/// interior branch instead, so no shade ever exceeds 1.
pub fn shade(iterations: u32) -> Color {
    if iterations >= MAX_ITERATIONS {
        Color::BLACK
    } else {
        Color::grayscale(iterations as f32 / (MAX_ITERATIONS - 1) as f32)
    }
}

/// Color for one screen position under the given frame mapping.
pub fn evaluate(position: ScreenPosition, mapping: &ViewportMapping) -> Color {
    shade(escape_time(mapping.to_complex(position)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::MANDELBROT_REGION;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(Complex::ZERO), MAX_ITERATIONS);
        assert_eq!(shade(escape_time(Complex::ZERO)), Color::BLACK);
    }

    #[test]
    fn far_point_escapes_on_the_first_step() {
        // z1 = c = 3, |z1|^2 = 9 > 4: the escaping step itself is counted.
        let count = escape_time(Complex::new(3.0, 0.0));
        assert_eq!(count, 1);
        assert_eq!(shade(count), Color::grayscale(1.0 / 59.0));
    }

    #[test]
    fn escape_count_is_monotonic_along_the_real_axis() {
        let counts: Vec<u32> = [0.26, 0.3, 0.5, 1.0, 2.0, 3.0]
            .iter()
            .map(|&re| escape_time(Complex::new(re, 0.0)))
            .collect();
        for pair in counts.windows(2) {
            assert!(pair[0] >= pair[1], "counts not monotonic: {counts:?}");
        }
    }

    #[test]
    fn shade_divides_by_the_budget_minus_one() {
        assert_eq!(shade(59), Color::grayscale(1.0));
        assert_eq!(shade(1), Color::grayscale(1.0 / 59.0));
    }

    #[test]
    fn full_budget_is_black_not_near_black() {
        assert_eq!(shade(MAX_ITERATIONS), Color::BLACK);
        assert_eq!(shade(MAX_ITERATIONS + 1), Color::BLACK);
    }

    #[test]
    fn evaluation_is_pure() {
        let mapping = ViewportMapping::new(MANDELBROT_REGION, 800, 800);
        let position = ScreenPosition::new(0.37, -0.62);
        let first = evaluate(position, &mapping);
        let second = evaluate(position, &mapping);
        assert_eq!(first.to_rgba8(), second.to_rgba8());
        assert_eq!(first, second);
    }

    #[test]
    fn viewport_center_is_inside_the_set() {
        let mapping = ViewportMapping::new(MANDELBROT_REGION, 800, 800);
        let color = evaluate(ScreenPosition::new(0.0, 0.0), &mapping);
        assert_eq!(color, Color::BLACK);
    }

    #[test]
    fn quantization_rounds_and_clamps() {
        assert_eq!(Color::BLACK.to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(Color::grayscale(1.0).to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Color::new(2.0, -1.0, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
    }
}
