use burn::module::Module;
use burn::nn::{Linear, LinearConfig};
use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Gated memory cell processing one time step of a character sequence.
///
/// Implements the standard LSTM equations with `(i, f, g, o)` gate ordering:
/// - i = sigmoid(W_i @ [x, h] + b_i)
/// - f = sigmoid(W_f @ [x, h] + b_f + 1)
/// - g = tanh(W_g @ [x, h] + b_g)
/// - o = sigmoid(W_o @ [x, h] + b_o)
/// - c' = f * c + i * g
/// - h' = o * tanh(c')
///
/// The four gate projections are fused into a single pair of linear maps
/// (one over the input, one over the previous hidden state) and split after
/// the matmul. The forget gate carries a unit bias so that memory is
/// retained by default early in training.
#[derive(Module, Debug)]
pub struct LSTMCell<B: Backend> {
    #[module(skip)]
    input_size: usize,
    #[module(skip)]
    hidden_size: usize,
    input_map: Linear<B>,     // input -> 4 stacked gates, carries the bias
    recurrent_map: Linear<B>, // hidden -> 4 stacked gates, no bias of its own
}

impl<B: Backend> LSTMCell<B> {
    /// Create a cell consuming `input_size` features per step.
    ///
    /// # Arguments
    /// * `input_size` - Size of the per-step input features
    /// * `hidden_size` - Number of units in the hidden and memory vectors
    /// * `device` - Device to create the module on
    pub fn new(input_size: usize, hidden_size: usize, device: &B::Device) -> Self {
        let input_map = LinearConfig::new(input_size, 4 * hidden_size)
            .with_bias(true)
            .init(device);

        let recurrent_map = LinearConfig::new(hidden_size, 4 * hidden_size)
            .with_bias(false)
            .init(device);

        Self {
            input_size,
            hidden_size,
            input_map,
            recurrent_map,
        }
    }

    /// Get the input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the hidden size
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Advance the cell by one time step.
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch_size, input_size]`
    /// * `state` - Tuple of (hidden_state, cell_state), each of shape
    ///   `[batch_size, hidden_size]`
    ///
    /// # Returns
    /// Tuple of (new_hidden_state, new_cell_state). The new hidden state is
    /// also the cell's output for this step.
    pub fn forward(
        &self,
        input: Tensor<B, 2>,
        state: (Tensor<B, 2>, Tensor<B, 2>),
    ) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let (hidden_state, cell_state) = state;

        let input_contrib = self.input_map.forward(input);
        let recurrent_contrib = self.recurrent_map.forward(hidden_state);
        let z = input_contrib + recurrent_contrib;

        // Split into the 4 gates: i, f, g, o
        let chunks = z.chunk(4, 1);
        let input_gate = activation::sigmoid(chunks[0].clone());
        let forget_gate = activation::sigmoid(chunks[1].clone() + 1.0); // Unit forget-gate bias
        let candidate = chunks[2].clone().tanh();
        let output_gate = activation::sigmoid(chunks[3].clone());

        // c' = f * c + i * g
        let new_cell = cell_state * forget_gate + candidate * input_gate;

        // h' = o * tanh(c')
        let new_hidden = new_cell.clone().tanh() * output_gate;

        (new_hidden, new_cell)
    }
}
