//! # Single-timestep recurrent cells
//!
//! Cells process one character position at a time and are wrapped by the
//! sequence-level model in [`crate::rnn`], which handles unrolling, layer
//! stacking, and final-state selection. Use a cell directly only when you
//! need custom sequence processing logic.
//!
//! ## Tensor Shapes
//!
//! All cells expect 2D tensors for single-timestep processing:
//!
//! | Tensor | Shape | Description |
//! |--------|-------|-------------|
//! | `input` | `[batch, input_size]` | Input features for one step |
//! | `hidden_state` | `[batch, hidden_size]` | Previous hidden state |
//! | `cell_state` | `[batch, hidden_size]` | Previous cell memory |

pub mod lstm_cell;

pub use lstm_cell::LSTMCell;
