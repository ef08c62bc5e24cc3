use crate::error::AnalyticsError;

/// Pearson correlation coefficient of two equal-length series.
///
/// No NaN filtering is done: a NaN in either input gives a NaN result, as
/// does a constant series (zero variance).
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64, AnalyticsError> {
    if x.len() != y.len() {
        return Err(AnalyticsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sum_dxdy = 0.0;
    let mut sum_dx2 = 0.0;
    let mut sum_dy2 = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sum_dxdy += dx * dy;
        sum_dx2 += dx * dx;
        sum_dy2 += dy * dy;
    }

    Ok(sum_dxdy / (sum_dx2 * sum_dy2).sqrt())
}
