use std::cmp::Ordering;

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

fn tied(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Standard competition ranking, highest score first: tied scores share the
/// best rank of their tier and the next score resumes at tier start + tier
/// size, so `[90, 90, 80]` ranks as `[1, 1, 3]`.
pub fn competition_rank(scores: &[f64]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| descending_nan_last(scores[a], scores[b]));

    let mut ranks = vec![0u32; scores.len()];
    let mut tier_rank = 1u32;
    for (pos, &idx) in order.iter().enumerate() {
        if pos > 0 && !tied(scores[order[pos - 1]], scores[idx]) {
            tier_rank = pos as u32 + 1;
        }
        ranks[idx] = tier_rank;
    }
    ranks
}

pub fn best_by_rank(ranks: &[u32], n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..ranks.len()).collect();
    order.sort_by_key(|&i| ranks[i]);
    order.truncate(n);
    order
}

/// Row indices of the `n` worst ranks, worst first. Ties keep input order.
pub fn worst_by_rank(ranks: &[u32], n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..ranks.len()).collect();
    order.sort_by(|&a, &b| ranks[b].cmp(&ranks[a]));
    order.truncate(n);
    order
}

#[cfg(test)]
#[path = "../../tests/src_inline/index/rank.rs"]
mod tests;
