//! # Colorbot - character-level color regression (Rust)
//!
//! A multi-layer LSTM that regresses character sequences (color names) onto
//! real-valued color labels, built on the Burn framework.
//!
//! ## Features
//!
//! - **Stacked LSTM layers**: an ordered stack of independently-parameterized
//!   gated memory cells, one per configured hidden size
//! - **Variable-length sequences**: padded batches are unrolled to the full
//!   time dimension, then each example's output is read at its true final
//!   character, not the last padded slot
//! - **Per-layer dropout**: inverted-convention dropout between layers,
//!   active only in training mode
//! - **Non-negative output head**: affine projection to the label dimension
//!   followed by a zero-floor clamp
//!
//! ## Quick Start
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::{Int, Tensor};
//! use colorbot::prelude::*;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! // Two LSTM layers (32 then 16 units), RGB labels, a 26-letter alphabet.
//! let config = ColorbotConfig::new(vec![32, 16], 3, 0.5, 26);
//! let model = Colorbot::<Backend>::new(&config, &device).unwrap();
//!
//! // Batch of 2 one-hot encoded names padded to 10 characters.
//! let chars = Tensor::<Backend, 3>::zeros([2, 10, 26], &device);
//! let lengths = Tensor::<Backend, 1, Int>::from_ints([3, 10], &device);
//!
//! let rgb = model.forward(chars, lengths, false);
//! assert_eq!(rgb.dims(), [2, 3]);
//! ```
//!
//! ## Tensor Shapes
//!
//! | Tensor | Shape | Description |
//! |--------|-------|-------------|
//! | `chars` | `[batch, time_steps, alphabet_size]` | One-hot characters, zero-padded |
//! | `lengths` | `[batch]` | True (non-padding) length per sequence |
//! | output | `[batch, label_dimension]` | Non-negative color labels |
//!
//! Data loading, one-hot encoding, padding, and the training loop are the
//! caller's responsibility; this crate owns only the model itself.

pub mod cells;
pub mod config;
pub mod rnn;

pub use config::ColorbotConfig;
pub use rnn::Colorbot;

/// Library error types
#[derive(Debug, thiserror::Error)]
pub enum ColorbotError {
    #[error("at least one recurrent layer is required")]
    EmptyCellStack,

    #[error("recurrent layer sizes must be positive, got {0:?}")]
    InvalidCellSize(Vec<usize>),

    #[error("label dimension must be positive")]
    InvalidLabelDimension,

    #[error("alphabet size must be positive")]
    InvalidAlphabetSize,

    #[error("keep probability must be in (0, 1], got {0}")]
    InvalidKeepProb(f64),
}

pub type Result<T> = std::result::Result<T, ColorbotError>;

pub mod prelude {
    pub use crate::cells::LSTMCell;
    pub use crate::config::ColorbotConfig;
    pub use crate::rnn::{Colorbot, OutputProjection};
    pub use crate::ColorbotError;
}
