// src/data_analysis/fft_utils.rs

use ndarray::Array1;
use realfft::num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};

use crate::error::{AnalysisError, AnalysisResult};

/// Computes the Fast Fourier Transform (FFT) of a real-valued signal.
/// Returns the non-redundant half of the spectrum (`n / 2 + 1` bins). Handles empty input.
pub fn fft_forward(data: &Array1<f64>) -> AnalysisResult<Array1<Complex64>> {
    if data.is_empty() {
        return Ok(Array1::zeros(0));
    }
    let planner = RealFftPlanner::<f64>::new().plan_fft_forward(data.len());
    forward_with_plan(&*planner, data)
}

fn forward_with_plan(
    plan: &dyn RealToComplex<f64>,
    data: &Array1<f64>,
) -> AnalysisResult<Array1<Complex64>> {
    let mut input = data.to_vec();
    let mut output = plan.make_output_vec();
    plan.process(&mut input, &mut output)
        .map_err(|err| AnalysisError::Fft {
            samples: data.len(),
            reason: err.to_string(),
        })?;
    Ok(Array1::from(output))
}

/// Magnitude of the full `n`-point DFT of a real signal, index 0 being DC.
///
/// Bins above `n / 2` are the conjugate mirror of the lower half, so their
/// magnitudes are copied from bin `n - k`.
pub fn magnitude_spectrum(data: &Array1<f64>) -> AnalysisResult<Array1<f64>> {
    let n = data.len();
    let half = fft_forward(data)?;
    if half.is_empty() {
        return Ok(Array1::zeros(0));
    }
    Ok(Array1::from_shape_fn(n, |k| {
        let bin = if k < half.len() { k } else { n - k };
        half[bin].norm()
    }))
}


// src/data_analysis/fft_utils.rs
