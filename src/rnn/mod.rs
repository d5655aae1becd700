//! # Sequence-level models
//!
//! This module provides the full sequence regression model that handles
//! layer stacking, time-step unrolling, dropout, and per-example final-state
//! selection. **This is the primary API most users should use.**
//!
//! ## Quick Start
//!
//! ```ignore
//! use colorbot::prelude::*;
//! use burn::tensor::{Int, Tensor};
//!
//! let config = ColorbotConfig::new(vec![256, 128], 3, 0.5, 256);
//! let model = Colorbot::<Backend>::new(&config, &device)?;
//!
//! // chars: [batch=64, time_steps=15, alphabet=256], one-hot, zero-padded
//! // lengths: [64], true length of each color name
//! let rgb = model.forward(chars, lengths, false);
//! // rgb: [64, 3], every element >= 0
//! ```
//!
//! ## Tensor Shapes
//!
//! | Tensor | Shape |
//! |--------|-------|
//! | `chars` | `[batch, time_steps, alphabet_size]` |
//! | `lengths` | `[batch]` (integer, `1 <= lengths[i] <= time_steps`) |
//! | output | `[batch, label_dimension]` |
//!
//! ## Padding
//!
//! Sequences in a batch are padded to a shared `time_steps` so they can be
//! fed through the unrolled loop together. The `lengths` vector recovers,
//! for each example, the hidden state produced by its last real character;
//! padding positions never influence the result.

pub mod colorbot;

pub use colorbot::{Colorbot, OutputProjection};
