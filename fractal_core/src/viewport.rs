use bytemuck::{Pod, Zeroable};

use crate::complex::Complex;

/// Rectangle of the complex plane selected for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub lower_left: Complex,
    pub upper_right: Complex,
}

/// The classic full-set view: real in [-2, 0.5], imaginary in [-1.25, 1.25].
pub const MANDELBROT_REGION: Region =
    Region::new(Complex::new(-2.0, -1.25), Complex::new(0.5, 1.25));

impl Region {
    pub const fn new(lower_left: Complex, upper_right: Complex) -> Self {
        Region {
            lower_left,
            upper_right,
        }
    }

    pub fn width(&self) -> f32 {
        self.upper_right.re - self.lower_left.re
    }

    pub fn height(&self) -> f32 {
        self.upper_right.im - self.lower_left.im
    }
}

/// Normalized device coordinate: both axes in [-1, 1], (-1, -1) at the
/// bottom-left, +y up. Values outside the range extrapolate linearly rather
/// than erroring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPosition {
    pub x: f32,
    pub y: f32,
}

impl ScreenPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        ScreenPosition { x, y }
    }
}

/// Uniform record uploaded to the fragment stage once per frame.
///
/// Field order and the 16-byte size are part of the shader interface: the
/// WGSL struct in the viewer declares the same four floats in the same
/// order.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewParams {
    pub minimum_real: f32,
    pub maximum_imaginary: f32,
    pub horizontal_stride: f32,
    pub vertical_stride: f32,
}

/// Affine map from screen coordinates to the complex plane for one frame.
///
/// Built once per frame from the region and the viewport's pixel size, never
/// mutated afterwards. The strides satisfy
/// `horizontal_stride = region_width / width_px` and
/// `vertical_stride = region_height / height_px`.
#[derive(Clone, Copy, Debug)]
pub struct ViewportMapping {
    params: ViewParams,
    width_px: u32,
    height_px: u32,
}

impl ViewportMapping {
    pub fn new(region: Region, width_px: u32, height_px: u32) -> Self {
        let params = ViewParams {
            minimum_real: region.lower_left.re,
            maximum_imaginary: region.upper_right.im,
            horizontal_stride: region.width() / width_px as f32,
            vertical_stride: region.height() / height_px as f32,
        };
        ViewportMapping {
            params,
            width_px,
            height_px,
        }
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// The wire record for this frame.
    pub fn params(&self) -> ViewParams {
        self.params
    }

    /// The wire record for a viewport whose top-left corner sits at `(x, y)`
    /// in framebuffer space. Folding the origin into the two anchors lets a
    /// fragment stage keep using absolute fragment coordinates even when the
    /// viewport is embedded inside a larger surface.
    pub fn params_with_origin(&self, x: f32, y: f32) -> ViewParams {
        ViewParams {
            minimum_real: self.params.minimum_real - x * self.params.horizontal_stride,
            maximum_imaginary: self.params.maximum_imaginary + y * self.params.vertical_stride,
            ..self.params
        }
    }

    /// Map a framebuffer-space coordinate (pixels, +y down) to the complex
    /// plane. This is exactly the map the fragment shader applies to its
    /// interpolated position; the imaginary axis flips sign because raster y
    /// grows downward.
    pub fn raster_to_complex(&self, x: f32, y: f32) -> Complex {
        Complex::new(
            self.params.minimum_real + x * self.params.horizontal_stride,
            self.params.maximum_imaginary - y * self.params.vertical_stride,
        )
    }

    /// Map a normalized device coordinate to the complex plane via the
    /// standard viewport transform.
    pub fn to_complex(&self, position: ScreenPosition) -> Complex {
        let x = (position.x + 1.0) * 0.5 * self.width_px as f32;
        let y = (1.0 - position.y) * 0.5 * self.height_px as f32;
        self.raster_to_complex(x, y)
    }
}
