//! Next-step price forecast from an ordinary-least-squares trend line.
//!
//! Observations are placed at x = 0, 1, 2, … in collection order, so the
//! forecast ignores the actual spacing between snapshots.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Up,
    Down,
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub current_price: i64,
    pub predicted_price: i64,
    pub trend: Trend,
}

impl Prediction {
    /// The flat prediction used when there is not enough history to fit a line.
    pub fn hold(price: i64) -> Self {
        Self {
            current_price: price,
            predicted_price: price,
            trend: Trend::Hold,
        }
    }
}

/// Fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination; 1.0 when every price is identical.
    pub r_squared: f64,
}

impl TrendFit {
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Least-squares fit over (index, price). `None` with fewer than two points.
pub fn fit_trend(prices: &[i64]) -> Option<TrendFit> {
    if prices.len() < 2 {
        return None;
    }
    let n = prices.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = prices.iter().map(|&p| p as f64).sum::<f64>() / n;

    let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
    for (i, &p) in prices.iter().enumerate() {
        let dx = i as f64 - mean_x;
        let dy = p as f64 - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let r_squared = if syy == 0.0 {
        1.0
    } else {
        (sxy * sxy) / (sxx * syy)
    };
    Some(TrendFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Predict the price one step after the last observation.
pub fn predict_next(prices: &[i64]) -> Prediction {
    let current = prices.last().copied().unwrap_or(0);
    let Some(fit) = fit_trend(prices) else {
        return Prediction::hold(current);
    };

    // Half-up rounding.
    let predicted = (fit.at(prices.len() as f64) + 0.5).floor() as i64;
    let trend = match predicted.cmp(&current) {
        std::cmp::Ordering::Greater => Trend::Up,
        std::cmp::Ordering::Less => Trend::Down,
        std::cmp::Ordering::Equal => Trend::Hold,
    };
    Prediction {
        current_price: current,
        predicted_price: predicted,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_holds_at_zero() {
        assert_eq!(predict_next(&[]), Prediction::hold(0));
    }

    #[test]
    fn test_single_point_holds() {
        let p = predict_next(&[100]);
        assert_eq!(p.current_price, 100);
        assert_eq!(p.predicted_price, 100);
        assert_eq!(p.trend, Trend::Hold);
    }

    #[test]
    fn test_perfect_rising_line() {
        let p = predict_next(&[100, 200, 300]);
        assert_eq!(p.current_price, 300);
        assert_eq!(p.predicted_price, 400);
        assert_eq!(p.trend, Trend::Up);
    }

    #[test]
    fn test_perfect_falling_line() {
        let p = predict_next(&[300, 200, 100]);
        assert_eq!(p.current_price, 100);
        assert_eq!(p.predicted_price, 0);
        assert_eq!(p.trend, Trend::Down);
    }

    #[test]
    fn test_flat_series_holds() {
        let p = predict_next(&[250, 250, 250, 250]);
        assert_eq!(p.predicted_price, 250);
        assert_eq!(p.trend, Trend::Hold);
        assert_eq!(fit_trend(&[250, 250]).unwrap().r_squared, 1.0);
    }

    #[test]
    fn test_noisy_series() {
        // slope = 0.2, intercept = 10.6, prediction at x=5 is 11.6 -> 12
        let p = predict_next(&[10, 12, 10, 12, 11]);
        assert_eq!(p.predicted_price, 12);
        assert_eq!(p.current_price, 11);
        assert_eq!(p.trend, Trend::Up);

        let fit = fit_trend(&[10, 12, 10, 12, 11]).unwrap();
        assert!((fit.slope - 0.2).abs() < 1e-9);
        assert!((fit.r_squared - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_trend_serializes_uppercase() {
        let json = serde_json::to_value(predict_next(&[1, 2])).unwrap();
        assert_eq!(json["trend"], "UP");
        assert_eq!(json["current_price"], 2);
        assert_eq!(json["predicted_price"], 3);
    }

    #[test]
    fn test_deterministic() {
        let series = [5, 9, 4, 11, 7, 13];
        assert_eq!(predict_next(&series), predict_next(&series));
    }
}
