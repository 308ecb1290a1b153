use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{expression::ExpressionPointer, sample::Sample};

use super::{dispatch::AnyWindow, error::WindowError};

/// Window families, numbered in table order starting from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum WindowFamily {
    Rectangular = 1,
    Triangular = 2,
    Bartlett = 3,
    Cosine = 4,
    Hann = 5,
    BartlettHann = 6,
    Hamming = 7,
    Bohman = 8,
    Blackman = 9,
    BlackmanHarris = 10,
    Kaiser = 11,
    Flattop = 12,
    Gaussian = 13,
    Lanczos = 14,
}

impl WindowFamily {
    pub const ALL: [WindowFamily; 14] = [
        Self::Rectangular,
        Self::Triangular,
        Self::Bartlett,
        Self::Cosine,
        Self::Hann,
        Self::BartlettHann,
        Self::Hamming,
        Self::Bohman,
        Self::Blackman,
        Self::BlackmanHarris,
        Self::Kaiser,
        Self::Flattop,
        Self::Gaussian,
        Self::Lanczos,
    ];

    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangular => "rectangular",
            Self::Triangular => "triangular",
            Self::Bartlett => "bartlett",
            Self::Cosine => "cosine",
            Self::Hann => "hann",
            Self::BartlettHann => "bartlett_hann",
            Self::Hamming => "hamming",
            Self::Bohman => "bohman",
            Self::Blackman => "blackman",
            Self::BlackmanHarris => "blackman_harris",
            Self::Kaiser => "kaiser",
            Self::Flattop => "flattop",
            Self::Gaussian => "gaussian",
            Self::Lanczos => "lanczos",
        }
    }

    /// Value the shape parameter takes when none is given.
    ///
    /// `None` for families without a shape parameter.
    pub fn default_shape_param(self) -> Option<f64> {
        match self {
            Self::Hamming => Some(0.54),
            Self::Blackman => Some(0.16),
            Self::Kaiser => Some(0.5),
            Self::Gaussian => Some(2.5),
            _ => None,
        }
    }

    pub fn has_shape_param(self) -> bool {
        self.default_shape_param().is_some()
    }
}

impl TryFrom<u8> for WindowFamily {
    type Error = WindowError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(tag).wrapping_sub(1))
            .copied()
            .ok_or(WindowError::UnknownTag(tag))
    }
}

impl FromStr for WindowFamily {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| WindowError::UnknownFamily(s.to_string()))
    }
}

impl fmt::Display for WindowFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Endpoint policy of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowSymmetry {
    /// DFT-even: the last sample of the ideal window is dropped.
    Periodic,
    /// Both endpoints of the ideal window are included.
    #[default]
    Symmetric,
}

impl WindowSymmetry {
    #[inline]
    pub fn is_symmetric(self) -> bool {
        self == Self::Symmetric
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Periodic => "periodic",
            Self::Symmetric => "symmetric",
        }
    }
}

/// Description of a window, independent of the sample type it will be
/// evaluated in.
///
/// ```
/// use kawari::{expression::Expression, window::{WindowFamily, WindowSpec, WindowSymmetry}};
///
/// let spec = WindowSpec::new(WindowFamily::Kaiser, 64)
///     .with_shape_param(4.0)?
///     .with_symmetry(WindowSymmetry::Periodic);
/// let window = spec.build::<f64>();
/// assert_eq!(window.size(), 64);
/// # Ok::<(), kawari::window::WindowError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    family: WindowFamily,
    size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shape_param: Option<f64>,
    #[serde(default)]
    symmetry: WindowSymmetry,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self::new(WindowFamily::Hann, 0)
    }
}

impl WindowSpec {
    /// Symmetric window with the family's default shape parameter.
    pub fn new(family: WindowFamily, size: usize) -> Self {
        Self {
            family,
            size,
            shape_param: None,
            symmetry: WindowSymmetry::Symmetric,
        }
    }

    /// Sets the shape parameter (alpha or beta, depending on the family).
    ///
    /// Families without a shape parameter keep it but ignore it.
    pub fn with_shape_param(self, value: f64) -> Result<Self, WindowError> {
        if !value.is_finite() {
            return Err(WindowError::InvalidShapeParameter {
                family: self.family,
                value,
            });
        }
        Ok(Self {
            shape_param: Some(value),
            ..self
        })
    }

    pub fn with_symmetry(self, symmetry: WindowSymmetry) -> Self {
        Self { symmetry, ..self }
    }

    pub fn with_size(self, size: usize) -> Self {
        Self { size, ..self }
    }

    pub fn family(&self) -> WindowFamily {
        self.family
    }
    pub fn size(&self) -> usize {
        self.size
    }
    /// The explicitly set shape parameter, if any.
    pub fn shape_param(&self) -> Option<f64> {
        self.shape_param
    }
    /// The shape parameter the window is built with.
    pub fn effective_shape_param(&self) -> Option<f64> {
        if self.family.has_shape_param() {
            self.shape_param.or(self.family.default_shape_param())
        } else {
            None
        }
    }
    pub fn symmetry(&self) -> WindowSymmetry {
        self.symmetry
    }

    /// Builds the concrete window behind a closed enum.
    pub fn build<T: Sample>(&self) -> AnyWindow<T> {
        AnyWindow::new(
            self.size,
            self.family,
            self.shape_param.map(T::from_f64),
            self.symmetry,
        )
    }

    /// Builds the window behind a trait object.
    pub fn boxed<T: Sample>(&self) -> ExpressionPointer<T> {
        super::dispatch::window(
            self.size,
            self.family,
            self.shape_param.map(T::from_f64),
            self.symmetry,
        )
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self.family, self.size)?;
        if let Some(param) = self.shape_param {
            write!(f, ", {}", param)?;
        }
        if self.symmetry == WindowSymmetry::Periodic {
            write!(f, ", {}", self.symmetry.name())?;
        }
        f.write_str(")")
    }
}
