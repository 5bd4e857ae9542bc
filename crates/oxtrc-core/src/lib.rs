//! # oxtrc - ICC tone response curves
//!
//! Forward and inverse evaluation of the tone response curves (TRCs) found
//! in ICC profiles, one channel sample at a time or over whole buffers.
//!
//! ## Curve kinds
//!
//! - **Sampled** (`curv`): identity, a single gamma exponent, or a lookup
//!   table. Table lookup is nearest-sample; the inverse is a binary search.
//! - **Parametric** (`para`): the five ICC function types, from a plain
//!   power law to the seven-parameter piecewise form.
//!
//! Results follow the ICC formulas exactly, with no clamping. Out-of-range
//! inputs and degenerate parameters give IEEE 754 infinities or NaNs.
//!
//! ## Quick Start
//!
//! ```
//! use oxtrc_core::{Curve, TrcTag, evaluate, evaluate_channels};
//!
//! // Validate curve data handed over by a profile loader
//! let tag = TrcTag::Parametric { function_type: 0, params: vec![2.2] };
//! let curve = Curve::try_from(&tag).unwrap();
//!
//! let linear = evaluate(&curve, false, 0.5);
//! let encoded = evaluate(&curve, true, linear);
//! assert!((encoded - 0.5).abs() < 1e-6);
//!
//! // One curve per channel
//! let curves = [curve.clone(), Curve::identity(), Curve::srgb()];
//! let out = evaluate_channels(&curves, false, &[0.5, 0.5, 0.5]).unwrap();
//! assert_eq!(out[1], 0.5);
//! ```

pub mod batch;
pub mod color;
pub mod curve;
pub mod error;
pub mod eval;
pub mod tag;

pub use batch::{apply_interleaved_rgb, apply_rgb, apply_rgb8};
#[cfg(feature = "parallel")]
pub use batch::apply_rgb_par;
pub use color::{Companding, RgbWorkingSpace, Xyz};
pub use curve::{Curve, ParametricCurve, ParametricCurveType, SampledCurve};
pub use error::{Error, Result};
pub use eval::{build_lut, evaluate, evaluate_channels, evaluate_tag};
pub use tag::TrcTag;

/// Version of oxtrc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
