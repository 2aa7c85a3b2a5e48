//! Rounding helpers shared by the aggregators and the stock generator.

/// Round `value` half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Normalize `raw` shares so they sum to one, with every share expressed in
/// `places` decimal units.
///
/// Uses largest-remainder apportionment: each share first receives the floor of
/// its exact quota, then the leftover units go to the largest fractional parts
/// (earlier index wins ties). The result therefore sums to exactly
/// `10^places` units. A batch whose raw total is zero is split evenly.
pub fn apportion(raw: &[f64], places: u32) -> Vec<f64> {
    if raw.is_empty() {
        return Vec::new();
    }

    let scale = 10_u64.pow(places);
    let total: f64 = raw.iter().sum();
    let quotas: Vec<f64> = if total > 0.0 && total.is_finite() {
        raw.iter()
            .map(|share| share / total * scale as f64)
            .collect()
    } else {
        vec![scale as f64 / raw.len() as f64; raw.len()]
    };

    let mut units: Vec<u64> = quotas.iter().map(|quota| quota.floor() as u64).collect();
    let assigned: u64 = units.iter().sum();
    let leftover = scale.saturating_sub(assigned) as usize;

    let mut order: Vec<usize> = (0..raw.len()).collect();
    order.sort_by(|&a, &b| {
        let frac_a = quotas[a] - quotas[a].floor();
        let frac_b = quotas[b] - quotas[b].floor();
        frac_b.total_cmp(&frac_a).then(a.cmp(&b))
    });
    for &index in order.iter().cycle().take(leftover) {
        units[index] += 1;
    }

    units
        .into_iter()
        .map(|unit| unit as f64 / scale as f64)
        .collect()
}
