use core::fmt;

use lumiere::{
    nalgebra::{convert, RealField},
    Vector,
};

/// A named RGBA color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub name: &'static str,
    pub rgba: [f32; 4],
}

impl Color {
    pub const RED: Self = Self::new("red", [1., 0., 0., 1.]);
    pub const BLUE: Self = Self::new("blue", [0., 0., 1., 1.]);
    pub const GREEN: Self = Self::new("green", [0., 1., 0., 1.]);

    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, rgba: [f32; 4]) -> Self {
        Self { name, rgba }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Everything the setup phase needs to know beforehand.
#[derive(Clone, Debug, PartialEq)]
pub struct Config<S: RealField + Copy> {
    /// Canvas width, in pixels
    pub width: S,
    /// Canvas height, in pixels
    pub height: S,
    /// The colors given to emitters, in order of placement.
    ///
    /// Its length is the maximum number of emitters.
    pub palette: Vec<Color>,
    /// How many reflections are traced, see [`lumiere::trace_ray`]
    pub max_reflections: usize,
    /// Width and height of an emitter's body
    pub emitter_size: Vector<S>,
}

impl<S: RealField + Copy> Default for Config<S> {
    fn default() -> Self {
        Self {
            width: convert(800.),
            height: convert(600.),
            palette: vec![Color::RED, Color::BLUE, Color::GREEN],
            max_reflections: 10,
            emitter_size: Vector::new(convert(40.), convert(30.)),
        }
    }
}

impl<S: RealField + Copy> Config<S> {
    #[inline]
    #[must_use]
    pub fn max_emitters(&self) -> usize {
        self.palette.len()
    }

    #[inline]
    #[must_use]
    pub fn with_canvas(mut self, width: S, height: S) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_palette(mut self, palette: impl IntoIterator<Item = Color>) -> Self {
        self.palette = palette.into_iter().collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_max_reflections(mut self, max_reflections: usize) -> Self {
        self.max_reflections = max_reflections;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_emitter_size(mut self, size: impl Into<Vector<S>>) -> Self {
        self.emitter_size = size.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::<f64>::default();

        assert_eq!((config.width, config.height), (800., 600.));
        assert_eq!(config.max_emitters(), 3);
        assert_eq!(config.palette[0], Color::RED);
        assert_eq!(config.max_reflections, 10);
        assert_eq!(config.emitter_size, Vector::new(40., 30.));
    }

    #[test]
    fn test_builder() {
        let config = Config::<f32>::default()
            .with_canvas(320., 240.)
            .with_palette([Color::GREEN])
            .with_max_reflections(2)
            .with_emitter_size([8., 6.]);

        assert_eq!((config.width, config.height), (320., 240.));
        assert_eq!(config.palette, [Color::GREEN]);
        assert_eq!(config.max_reflections, 2);
        assert_eq!(config.emitter_size, Vector::new(8., 6.));
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::BLUE.to_string(), "blue");
    }
}
