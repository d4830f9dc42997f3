pub const NEUTRAL_SCORE: f64 = 50.0;

/// Min-max onto 0..=100. A constant column maps to [`NEUTRAL_SCORE`].
pub fn normalize(values: &[f64], reverse: bool) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let min_val = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max_val == min_val {
        return vec![NEUTRAL_SCORE; values.len()];
    }

    let range = max_val - min_val;
    values
        .iter()
        .map(|v| {
            let scaled = (v - min_val) / range * 100.0;
            if reverse { 100.0 - scaled } else { scaled }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/index/normalize.rs"]
mod tests;
