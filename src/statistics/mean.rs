use num_traits::{Float, FromPrimitive};

use super::Statistic;

/// Arithmetic mean using **Kahan summation** to limit floating-point error
/// accumulation over long inputs.
///
/// An empty input has no mean and yields NaN.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mean;

impl<D, T> Statistic<D, T> for Mean
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice: &[T] = data.as_ref();

        if slice.is_empty() {
            return T::nan();
        }

        // Kahan summation: compensates for floating-point rounding errors
        let mut sum = T::zero();
        let mut c = T::zero();

        for &x in slice {
            let y = x - c;
            let t = sum + y;
            c = (t - sum) - y;
            sum = t;
        }

        match T::from_usize(slice.len()) {
            Some(n) => sum / n,
            None => T::nan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn empty_slice_returns_nan() {
        let mean_f32: f32 = Mean.compute(&Vec::<f32>::new());
        assert!(mean_f32.is_nan(), "Empty slice must return NaN (got: {})", mean_f32);

        let mean_f64: f64 = Mean.compute(&Vec::<f64>::new());
        assert!(mean_f64.is_nan(), "Empty slice must return NaN (got: {})", mean_f64);
    }

    #[test]
    fn exact_integer_means() {
        let mean_f32: f32 = Mean.compute(&[1.0_f32, 2.0, 3.0, 4.0, 5.0]);
        let mean_f64: f64 = Mean.compute(&[1.0_f64, 2.0, 3.0, 4.0, 5.0]);
        assert_abs_diff_eq!(mean_f32, 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(mean_f64, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn kahan_reduces_accumulation_error() {
        // Summing 0.1 × 10,000 exposes naive summation drift
        let n = 10_000;
        let data: Vec<f32> = vec![0.1_f32; n];
        let expected = 0.1_f32;

        let kahan_mean: f32 = Mean.compute(&data);
        let naive_mean: f32 = data.iter().sum::<f32>() / (n as f32);

        let kahan_error = (kahan_mean - expected).abs();
        let naive_error = (naive_mean - expected).abs();
        assert!(
            kahan_error < naive_error * 0.5,
            "Kahan error ({:.2e}) should be <50% of naive error ({:.2e})",
            kahan_error,
            naive_error
        );
        assert_abs_diff_eq!(kahan_mean, expected, epsilon = 5e-5);
    }

    #[test]
    fn identifiers_one_to_hundred() {
        let data: Vec<f64> = (1..=100).map(f64::from).collect();
        let mean: f64 = Mean.compute(&data);
        assert_relative_eq!(mean, 50.5, max_relative = 1e-12);
    }
}
