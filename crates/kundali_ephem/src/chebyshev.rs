//! Chebyshev series: Clenshaw evaluation and node-sampled fitting.

use std::f64::consts::PI;

/// Evaluate a Chebyshev expansion using the Clenshaw recurrence.
///
/// Given coefficients `[c_0, c_1, ..., c_{n-1}]` and normalised time
/// `s` in `[-1, 1]`, computes `sum(c_k * T_k(s))`.
pub fn clenshaw(coeffs: &[f64], s: f64) -> f64 {
    match coeffs.len() {
        0 => 0.0,
        1 => coeffs[0],
        n => {
            let mut b_k1 = 0.0;
            let mut b_k2 = 0.0;
            let two_s = 2.0 * s;
            for &c in coeffs[1..n].iter().rev() {
                let b_k = two_s * b_k1 - b_k2 + c;
                b_k2 = b_k1;
                b_k1 = b_k;
            }
            s * b_k1 - b_k2 + coeffs[0]
        }
    }
}

/// Chebyshev nodes of the first kind on `[-1, 1]`, in descending order.
pub fn nodes(count: usize) -> Vec<f64> {
    let n = count as f64;
    (0..count)
        .map(|k| (PI * (k as f64 + 0.5) / n).cos())
        .collect()
}

/// Fit coefficients to `values` sampled at [`nodes`]`(values.len())`.
///
/// The result evaluates exactly to `values` at the nodes under
/// [`clenshaw`].
pub fn fit(values: &[f64]) -> Vec<f64> {
    let count = values.len();
    if count == 0 {
        return Vec::new();
    }
    let n = count as f64;
    (0..count)
        .map(|j| {
            let sum: f64 = values
                .iter()
                .enumerate()
                .map(|(k, v)| v * (PI * j as f64 * (k as f64 + 0.5) / n).cos())
                .sum();
            let scale = if j == 0 { 1.0 / n } else { 2.0 / n };
            sum * scale
        })
        .collect()
}

/// Map `jd` in `[start, end]` to the normalised Chebyshev argument.
pub fn normalise(jd: f64, start: f64, end: f64) -> f64 {
    2.0 * (jd - start) / (end - start) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clenshaw_constant() {
        assert_eq!(clenshaw(&[5.0], 0.3), 5.0);
    }

    #[test]
    fn clenshaw_empty() {
        assert_eq!(clenshaw(&[], 0.5), 0.0);
    }

    #[test]
    fn clenshaw_linear() {
        // 3 + 2*T1(s) = 3 + 2s
        let v = clenshaw(&[3.0, 2.0], 0.5);
        assert!((v - 4.0).abs() < 1e-15);
    }

    #[test]
    fn clenshaw_quadratic() {
        // T2(s) = 2s^2 - 1
        let s: f64 = 0.7;
        let v = clenshaw(&[1.0, 2.0, 3.0], s);
        let expected = 1.0 + 2.0 * s + 3.0 * (2.0 * s * s - 1.0);
        assert!((v - expected).abs() < 1e-14);
    }

    #[test]
    fn fit_reproduces_cubic() {
        let f = |x: f64| 0.5 * x.powi(3) - x + 2.0;
        let values: Vec<f64> = nodes(6).into_iter().map(f).collect();
        let coeffs = fit(&values);
        for s in [-1.0, -0.4, 0.0, 0.25, 0.9, 1.0] {
            assert!((clenshaw(&coeffs, s) - f(s)).abs() < 1e-12, "s = {s}");
        }
    }

    #[test]
    fn nodes_stay_inside_interval() {
        let xs = nodes(9);
        assert_eq!(xs.len(), 9);
        assert!(xs.iter().all(|x| x.abs() < 1.0));
        assert!(xs.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn normalise_endpoints() {
        assert_eq!(normalise(10.0, 10.0, 14.0), -1.0);
        assert_eq!(normalise(14.0, 10.0, 14.0), 1.0);
        assert_eq!(normalise(12.0, 10.0, 14.0), 0.0);
    }
}
