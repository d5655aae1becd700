//! Model configuration.

use serde::{Deserialize, Serialize};

use crate::{ColorbotError, Result};

/// Configuration for a [`Colorbot`](crate::Colorbot) model.
///
/// The configuration is plain data: it can be serialized alongside saved
/// model records so a model can be rebuilt with the same architecture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorbotConfig {
    /// Size of each LSTM layer, in order; `cell_sizes[i]` is the number of
    /// units in the i-th layer
    pub cell_sizes: Vec<usize>,

    /// Length of the real-valued labels to regress on
    pub label_dimension: usize,

    /// Probability that an element survives dropout (1 - dropout
    /// probability); dropout is applied to the outputs of each LSTM layer
    /// during training
    pub keep_prob: f64,

    /// Number of distinct characters in the one-hot input encoding
    pub alphabet_size: usize,
}

impl Default for ColorbotConfig {
    fn default() -> Self {
        Self {
            cell_sizes: vec![256, 128],
            label_dimension: 3,
            keep_prob: 0.5,
            alphabet_size: 256,
        }
    }
}

impl ColorbotConfig {
    /// Create a configuration from explicit values.
    pub fn new(
        cell_sizes: Vec<usize>,
        label_dimension: usize,
        keep_prob: f64,
        alphabet_size: usize,
    ) -> Self {
        Self {
            cell_sizes,
            label_dimension,
            keep_prob,
            alphabet_size,
        }
    }

    /// Check the configuration invariants.
    ///
    /// A model cannot be built from an empty layer stack (the final hidden
    /// size would be undefined), from zero-sized layers or labels, or with a
    /// keep probability outside `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.cell_sizes.is_empty() {
            return Err(ColorbotError::EmptyCellStack);
        }
        if self.cell_sizes.iter().any(|&size| size == 0) {
            return Err(ColorbotError::InvalidCellSize(self.cell_sizes.clone()));
        }
        if self.label_dimension == 0 {
            return Err(ColorbotError::InvalidLabelDimension);
        }
        if self.alphabet_size == 0 {
            return Err(ColorbotError::InvalidAlphabetSize);
        }
        if !(self.keep_prob > 0.0 && self.keep_prob <= 1.0) {
            return Err(ColorbotError::InvalidKeepProb(self.keep_prob));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ColorbotConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_sizes, vec![256, 128]);
        assert_eq!(config.label_dimension, 3);
    }

    #[test]
    fn test_empty_cell_stack_rejected() {
        let config = ColorbotConfig::new(vec![], 3, 0.5, 256);
        assert!(matches!(
            config.validate(),
            Err(ColorbotError::EmptyCellStack)
        ));
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let config = ColorbotConfig::new(vec![32, 0], 3, 0.5, 256);
        assert!(matches!(
            config.validate(),
            Err(ColorbotError::InvalidCellSize(_))
        ));
    }

    #[test]
    fn test_keep_prob_bounds() {
        for keep_prob in [0.0, -0.5, 1.5] {
            let config = ColorbotConfig::new(vec![32], 3, keep_prob, 256);
            assert!(matches!(
                config.validate(),
                Err(ColorbotError::InvalidKeepProb(_))
            ));
        }

        // 1.0 disables dropout entirely but is a legal retention probability
        let config = ColorbotConfig::new(vec![32], 3, 1.0, 256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_label_dimension_rejected() {
        let config = ColorbotConfig::new(vec![32], 0, 0.5, 256);
        assert!(matches!(
            config.validate(),
            Err(ColorbotError::InvalidLabelDimension)
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = ColorbotConfig::new(vec![64, 32], 3, 0.8, 26);
        let json = serde_json::to_string(&config).unwrap();
        let restored: ColorbotConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.cell_sizes, config.cell_sizes);
        assert_eq!(restored.label_dimension, config.label_dimension);
        assert_eq!(restored.alphabet_size, config.alphabet_size);
        assert!((restored.keep_prob - config.keep_prob).abs() < f64::EPSILON);
    }
}
