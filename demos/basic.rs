//! Basic usage of the colorbot sequence regressor.
//!
//! Builds a small model and runs a forward pass over a padded batch of
//! one-hot encoded color names with mixed true lengths.

use burn::backend::NdArray;
use burn::tensor::{Distribution, Int, Tensor};
use colorbot::prelude::*;

fn main() {
    println!("=== Colorbot Basic Example ===\n");

    // Use the NdArray backend (CPU)
    type Backend = NdArray<f32>;
    let device = Default::default();

    // Two LSTM layers, RGB labels, a lowercase-ascii alphabet.
    let config = ColorbotConfig::new(vec![64, 32], 3, 0.5, 26);
    let model = Colorbot::<Backend>::new(&config, &device).expect("valid configuration");

    println!("Created colorbot model:");
    println!("  LSTM layers:     {:?}", model.cell_sizes());
    println!("  Label dimension: {}", model.label_dimension());
    println!("  Alphabet size:   {}", model.alphabet_size());
    println!("  Keep prob:       {}", model.keep_prob());
    println!();

    // A real caller feeds one-hot character tensors; random stand-ins keep
    // the demo self-contained. Shape: [batch=4, time_steps=10, alphabet=26].
    let chars = Tensor::<Backend, 3>::random(
        [4, 10, 26],
        Distribution::Uniform(0.0, 1.0),
        &device,
    );

    // True lengths of the four names; everything past a length is padding.
    let lengths = Tensor::<Backend, 1, Int>::from_ints([3, 10, 7, 1], &device);

    println!("Running inference (training = false)...");
    let rgb = model.forward(chars.clone(), lengths.clone(), false);

    println!("  Input shape:  [4, 10, 26]");
    println!("  Output shape: {:?}", rgb.dims());
    println!("  Minimum component: {:.6} (always >= 0)", rgb.min().into_scalar());
    println!();

    println!("Running a training-mode pass (dropout active)...");
    let rgb_train = model.forward(chars, lengths, true);
    println!("  Output shape: {:?}", rgb_train.dims());
    println!();

    println!("=== Example completed successfully! ===");
}
