//! Window functions as lazy expressions.
//!
//! There are three ways to get a window:
//!
//! - name the type: [`shapes::Hann::new`], or generically [`window_static`],
//! - pick the family at run time without allocating: [`AnyWindow::new`],
//! - pick the family at run time behind a trait object: [`window`].
//!
//! All three evaluate to the same samples.
//!
//! ```
//! use kawari::{expression::Expression, window::{window, WindowFamily, WindowSymmetry}};
//!
//! let hann = window::<f64>(8, WindowFamily::Hann, None, WindowSymmetry::Symmetric);
//! let block = hann.evaluate(0, 4);
//! assert_eq!(block[0], 0.0);
//! ```

mod dispatch;
mod error;
mod family;
#[cfg(feature = "text")]
mod parser;
pub mod shapes;

pub use dispatch::{AnyWindow, window, window_static};
pub use error::WindowError;
pub use family::{WindowFamily, WindowSpec, WindowSymmetry};
#[cfg(feature = "text")]
pub use parser::WindowSpecParser;
pub use shapes::WindowShape;
