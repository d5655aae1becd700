//! Multi-layer LSTM color-name regression model.
//!
//! Stacks gated memory cells over the time dimension of a padded one-hot
//! character batch and regresses the final hidden state of each sequence
//! onto a real-valued color label.

use crate::cells::LSTMCell;
use crate::config::ColorbotConfig;
use crate::Result;
use burn::module::Module;
use burn::nn::{Dropout, DropoutConfig, Linear, LinearConfig};
use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::{Int, Tensor};

/// Affine head mapping a final hidden state to the label space, clamped at
/// zero so predicted color components are never negative.
#[derive(Module, Debug)]
pub struct OutputProjection<B: Backend> {
    linear: Linear<B>,
}

impl<B: Backend> OutputProjection<B> {
    /// Create a projection from `hidden_size` features to `label_dimension`.
    pub fn new(hidden_size: usize, label_dimension: usize, device: &B::Device) -> Self {
        let linear = LinearConfig::new(hidden_size, label_dimension)
            .with_bias(true)
            .init(device);

        Self { linear }
    }

    /// Project a `[batch, hidden_size]` tensor to `[batch, label_dimension]`.
    pub fn forward(&self, hidden: Tensor<B, 2>) -> Tensor<B, 2> {
        activation::relu(self.linear.forward(hidden))
    }
}

/// Multi-layer LSTM that regresses on real-valued vector labels.
///
/// The model owns one [`LSTMCell`] per configured layer size plus an
/// [`OutputProjection`] head; all parameters are created at construction.
/// Recurrent states are ephemeral, re-created inside every forward call, so
/// concurrent forward passes on a shared model are safe.
///
/// # Type Parameters
/// * `B` - The backend type
#[derive(Module, Debug)]
pub struct Colorbot<B: Backend> {
    /// One cell per layer, in stacking order
    cells: Vec<LSTMCell<B>>,
    /// Regression head applied to the gathered final hidden states
    head: OutputProjection<B>,
    /// Dropout applied to each layer's output sequence during training
    dropout: Dropout,
    #[module(skip)]
    cell_sizes: Vec<usize>,
    #[module(skip)]
    alphabet_size: usize,
    #[module(skip)]
    label_dimension: usize,
    #[module(skip)]
    keep_prob: f64,
}

impl<B: Backend> Colorbot<B> {
    /// Build a model from a validated configuration.
    ///
    /// The first layer consumes `alphabet_size` features; each subsequent
    /// layer consumes the previous layer's hidden size. Fails with a
    /// [`ColorbotError`](crate::ColorbotError) if the configuration is
    /// invalid (empty layer stack, zero sizes, keep probability outside
    /// `(0, 1]`).
    pub fn new(config: &ColorbotConfig, device: &B::Device) -> Result<Self> {
        config.validate()?;

        let mut cells = Vec::with_capacity(config.cell_sizes.len());
        let mut input_size = config.alphabet_size;
        for &hidden_size in &config.cell_sizes {
            cells.push(LSTMCell::new(input_size, hidden_size, device));
            input_size = hidden_size;
        }

        let head = OutputProjection::new(input_size, config.label_dimension, device);
        let dropout = DropoutConfig::new(1.0 - config.keep_prob).init();

        log::debug!(
            "colorbot model: {} LSTM layer(s) {:?}, label dimension {}, keep prob {}",
            cells.len(),
            config.cell_sizes,
            config.label_dimension,
            config.keep_prob
        );

        Ok(Self {
            cells,
            head,
            dropout,
            cell_sizes: config.cell_sizes.clone(),
            alphabet_size: config.alphabet_size,
            label_dimension: config.label_dimension,
            keep_prob: config.keep_prob,
        })
    }

    /// Get the layer sizes, in stacking order
    pub fn cell_sizes(&self) -> &[usize] {
        &self.cell_sizes
    }

    /// Get the number of LSTM layers
    pub fn num_layers(&self) -> usize {
        self.cells.len()
    }

    /// Get the input alphabet size
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Get the label dimension
    pub fn label_dimension(&self) -> usize {
        self.label_dimension
    }

    /// Get the dropout retention probability
    pub fn keep_prob(&self) -> f64 {
        self.keep_prob
    }

    /// Run the RNN over a padded batch and predict one label per sequence.
    ///
    /// # Arguments
    /// * `chars` - One-hot character tensor of shape
    ///   `[batch, time_steps, alphabet_size]`, zero-padded past each
    ///   sequence's true length
    /// * `lengths` - Integer tensor of shape `[batch]` holding the true
    ///   length of each sequence; every entry must lie in `[1, time_steps]`
    /// * `training` - Whether dropout is active; inference callers pass
    ///   `false`
    ///
    /// # Returns
    /// A `[batch, label_dimension]` tensor produced by passing each
    /// sequence's final non-padding hidden state through the output head.
    /// Every element is non-negative.
    ///
    /// # Panics
    /// If the batch dimensions of `chars` and `lengths` disagree, or if a
    /// length entry indexes outside the time dimension (backend indexing
    /// failure at the gather).
    pub fn forward(
        &self,
        chars: Tensor<B, 3>,
        lengths: Tensor<B, 1, Int>,
        training: bool,
    ) -> Tensor<B, 2> {
        let device = chars.device();
        let [batch_size, time_steps, _] = chars.dims();
        let [length_count] = lengths.dims();
        if length_count != batch_size {
            panic!(
                "chars holds {} sequences but lengths holds {} entries",
                batch_size, length_count
            );
        }

        // [batch, time, features] -> [time, batch, features]
        let mut sequence = chars.swap_dims(0, 1);

        // The outer loop walks the layers; the inner loop unrolls the time
        // steps for one layer. States start at zero for every layer and
        // every batch.
        for (cell, &hidden_size) in self.cells.iter().zip(&self.cell_sizes) {
            let mut state = (
                Tensor::<B, 2>::zeros([batch_size, hidden_size], &device),
                Tensor::<B, 2>::zeros([batch_size, hidden_size], &device),
            );
            let mut outputs: Vec<Tensor<B, 2>> = Vec::with_capacity(time_steps);

            for t in 0..time_steps {
                // sequence[t, batch, features] -> [batch, features]
                let step = sequence.clone().narrow(0, t, 1).squeeze(0);

                let (hidden, cell_memory) = cell.forward(step, state);
                outputs.push(hidden.clone());
                state = (hidden, cell_memory);
            }

            // This layer's outputs are the next layer's inputs.
            sequence = Tensor::stack(outputs, 0); // [time, batch, hidden]
            if training {
                sequence = self.dropout.forward(sequence);
            }
        }

        // Pick, for each sequence, the hidden state produced by its last
        // real character. lengths - 1 indexes past the padding, so two
        // sequences of different true length read different time slots.
        let sequence = sequence.swap_dims(0, 1); // [batch, time, hidden]
        let [_, _, last_hidden] = sequence.dims();
        let indices = lengths
            .sub_scalar(1)
            .reshape([batch_size, 1, 1])
            .repeat_dim(2, last_hidden);
        let final_hidden: Tensor<B, 2> = sequence.gather(1, indices).squeeze(1);

        self.head.forward(final_hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::tensor::backend::Backend as BurnBackend;
    use burn::tensor::Distribution;

    type TestBackend = NdArray<f32>;
    type TestDevice = <TestBackend as BurnBackend>::Device;

    fn get_test_device() -> TestDevice {
        Default::default()
    }

    fn full_lengths(batch_size: usize, time_steps: usize) -> Tensor<TestBackend, 1, Int> {
        let device = get_test_device();
        Tensor::<TestBackend, 1, Int>::ones([batch_size], &device) * (time_steps as i32)
    }

    #[test]
    fn test_colorbot_creation() {
        let device = get_test_device();
        let config = ColorbotConfig::new(vec![64, 32], 3, 0.5, 26);
        let model = Colorbot::<TestBackend>::new(&config, &device).unwrap();

        assert_eq!(model.num_layers(), 2);
        assert_eq!(model.cell_sizes(), &[64, 32]);
        assert_eq!(model.alphabet_size(), 26);
        assert_eq!(model.label_dimension(), 3);
    }

    #[test]
    fn test_colorbot_forward_shape() {
        let device = get_test_device();
        let config = ColorbotConfig::new(vec![32, 16], 3, 0.5, 26);
        let model = Colorbot::<TestBackend>::new(&config, &device).unwrap();

        let chars = Tensor::<TestBackend, 3>::random(
            [4, 10, 26],
            Distribution::Uniform(0.0, 1.0),
            &device,
        );
        let output = model.forward(chars, full_lengths(4, 10), false);

        assert_eq!(output.dims(), [4, 3]);
    }

    #[test]
    fn test_colorbot_output_non_negative() {
        let device = get_test_device();
        let config = ColorbotConfig::new(vec![32], 3, 0.5, 26);
        let model = Colorbot::<TestBackend>::new(&config, &device).unwrap();

        let chars = Tensor::<TestBackend, 3>::random(
            [8, 6, 26],
            Distribution::Uniform(-1.0, 1.0),
            &device,
        );
        let output = model.forward(chars, full_lengths(8, 6), false);

        let minimum: f32 = output.min().into_scalar();
        assert!(minimum >= 0.0, "Output must be clamped at zero");
    }

    #[test]
    fn test_colorbot_single_layer() {
        let device = get_test_device();
        let config = ColorbotConfig::new(vec![5], 3, 0.5, 26);
        let model = Colorbot::<TestBackend>::new(&config, &device).unwrap();

        let chars = Tensor::<TestBackend, 3>::random(
            [2, 4, 26],
            Distribution::Uniform(0.0, 1.0),
            &device,
        );
        let output = model.forward(chars, full_lengths(2, 4), false);

        assert_eq!(output.dims(), [2, 3]);
    }

    #[test]
    fn test_colorbot_rejects_empty_stack() {
        let device = get_test_device();
        let config = ColorbotConfig::new(vec![], 3, 0.5, 26);

        assert!(Colorbot::<TestBackend>::new(&config, &device).is_err());
    }

    #[test]
    fn test_colorbot_time_step_sweep() {
        let device = get_test_device();
        let config = ColorbotConfig::new(vec![16, 8], 3, 0.5, 12);
        let model = Colorbot::<TestBackend>::new(&config, &device).unwrap();

        for time_steps in [1, 5, 20] {
            let chars = Tensor::<TestBackend, 3>::random(
                [2, time_steps, 12],
                Distribution::Uniform(0.0, 1.0),
                &device,
            );
            let output = model.forward(chars, full_lengths(2, time_steps), false);

            assert_eq!(output.dims(), [2, 3]);
        }
    }

    #[test]
    #[should_panic]
    fn test_colorbot_batch_mismatch_panics() {
        let device = get_test_device();
        let config = ColorbotConfig::new(vec![8], 3, 0.5, 12);
        let model = Colorbot::<TestBackend>::new(&config, &device).unwrap();

        let chars = Tensor::<TestBackend, 3>::zeros([4, 5, 12], &device);
        let lengths = Tensor::<TestBackend, 1, Int>::from_ints([5, 5], &device);

        model.forward(chars, lengths, false);
    }
}
