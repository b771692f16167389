//! Fixed-weight feed-forward network used for jewelry pricing.
//!
//! The network is never trained. Every kernel is hand-set and every weight
//! is non-negative, so the output never decreases when material score,
//! weight or design complexity go up.

use crate::error::ModelError;

pub const INPUT_UNITS: usize = 3;
pub const HIDDEN_UNITS: usize = 16;
pub const SECOND_HIDDEN_UNITS: usize = 8;

/// Hand-set kernel for the first layer, rows are (material, weight, design)
pub const INPUT_KERNEL: [[f64; HIDDEN_UNITS]; INPUT_UNITS] = [
    [5.0, 3.0, 1.0, 2.0, 4.0, 6.0, 2.0, 1.0, 3.0, 5.0, 0.5, 1.5, 2.5, 3.5, 4.5, 5.5],
    [0.5, 1.0, 1.5, 0.8, 1.2, 0.7, 1.3, 0.9, 1.1, 1.0, 0.6, 1.4, 0.5, 1.5, 0.8, 1.2],
    [1.0, 2.0, 3.0, 1.5, 2.5, 1.2, 2.2, 3.2, 1.8, 2.8, 1.1, 2.1, 3.1, 1.6, 2.6, 3.6],
];

/// Output weights; the second hidden layer averages neighbouring pairs of first-layer units
pub const OUTPUT_KERNEL: [f64; SECOND_HIDDEN_UNITS] = [0.03, 0.025, 0.035, 0.02, 0.03, 0.02, 0.035, 0.025];

fn pairwise_mean_kernel() -> Vec<Vec<f64>> {
    (0..HIDDEN_UNITS)
        .map(|i| {
            let mut row = vec![0.0; SECOND_HIDDEN_UNITS];
            row[i / 2] = 0.5;
            row
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Relu,
    Linear,
}

impl Activation {
    fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Relu => x.max(0.0),
            Activation::Linear => x,
        }
    }
}

/// Fully connected layer computing `activation(xW + b)`
#[derive(Debug, Clone)]
pub struct DenseLayer {
    /// Kernel of shape [inputs][units]
    kernel: Vec<Vec<f64>>,
    bias: Vec<f64>,
    activation: Activation,
}

impl DenseLayer {
    /// Build a layer from an explicit kernel with zero bias
    pub fn from_kernel(index: usize, kernel: Vec<Vec<f64>>, activation: Activation) -> Result<Self, ModelError> {
        let units = kernel.first().map(Vec::len).unwrap_or(0);
        if kernel.is_empty() || units == 0 {
            return Err(ModelError::Shape {
                layer: index,
                expected: "non-empty kernel".to_string(),
                actual: format!("{}x{}", kernel.len(), units),
            });
        }
        if let Some(row) = kernel.iter().find(|row| row.len() != units) {
            return Err(ModelError::Shape {
                layer: index,
                expected: format!("{} columns", units),
                actual: format!("{} columns", row.len()),
            });
        }

        Ok(Self {
            kernel,
            bias: vec![0.0; units],
            activation,
        })
    }

    pub fn inputs(&self) -> usize {
        self.kernel.len()
    }

    pub fn units(&self) -> usize {
        self.bias.len()
    }

    pub fn forward(&self, index: usize, input: &[f64]) -> Result<Vec<f64>, ModelError> {
        if input.len() != self.inputs() {
            return Err(ModelError::InputWidth {
                layer: index,
                expected: self.inputs(),
                actual: input.len(),
            });
        }

        let mut out = self.bias.clone();
        for (x, row) in input.iter().zip(&self.kernel) {
            for (acc, w) in out.iter_mut().zip(row) {
                *acc += x * w;
            }
        }
        for v in out.iter_mut() {
            *v = self.activation.apply(*v);
        }
        Ok(out)
    }
}

/// 3 → 16 → 8 → 1 regression network
#[derive(Debug, Clone)]
pub struct PriceNetwork {
    layers: Vec<DenseLayer>,
}

impl PriceNetwork {
    pub fn new(layers: Vec<DenseLayer>) -> Result<Self, ModelError> {
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].units() != pair[1].inputs() {
                return Err(ModelError::Shape {
                    layer: i + 1,
                    expected: format!("{} inputs", pair[0].units()),
                    actual: format!("{} inputs", pair[1].inputs()),
                });
            }
        }
        Ok(Self { layers })
    }

    /// The hand-set jewelry pricing network
    pub fn synthetic() -> Result<Self, ModelError> {
        let input_kernel = INPUT_KERNEL.iter().map(|row| row.to_vec()).collect();
        let output_kernel = OUTPUT_KERNEL.iter().map(|w| vec![*w]).collect();

        Self::new(vec![
            DenseLayer::from_kernel(0, input_kernel, Activation::Relu)?,
            DenseLayer::from_kernel(1, pairwise_mean_kernel(), Activation::Relu)?,
            DenseLayer::from_kernel(2, output_kernel, Activation::Linear)?,
        ])
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.layers.first().map(|l| vec![l.inputs()]).unwrap_or_default();
        sizes.extend(self.layers.iter().map(DenseLayer::units));
        sizes
    }

    /// Run a single sample through every layer and return the scalar output
    pub fn predict(&self, input: &[f64]) -> Result<f64, ModelError> {
        let mut activations = input.to_vec();
        for (i, layer) in self.layers.iter().enumerate() {
            activations = layer.forward(i, &activations)?;
        }
        activations.first().copied().ok_or(ModelError::EmptyOutput)
    }
}
