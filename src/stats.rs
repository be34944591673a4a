//! Fakemon stat generation.
//!
//! Distributes a randomly chosen base stat total across the six core stats
//! using per-stat random weights, with extra weight on "specialty" stats.

use rand::Rng;

/// The six core stats, in form order.
pub const STAT_KEYS: &[(&str, &str)] = &[
    ("hp", "HP"),
    ("attack", "Attack"),
    ("defense", "Defense"),
    ("special_attack", "Sp. Attack"),
    ("special_defense", "Sp. Defense"),
    ("speed", "Speed"),
];

/// Power-level buckets offered by the generator, with their BST ranges.
pub const POWER_LEVELS: &[(&str, &str, (u32, u32))] = &[
    ("weak", "Weak", (180, 300)),
    ("below_average", "Below Average", (300, 420)),
    ("average", "Average", (420, 500)),
    ("strong", "Strong", (500, 600)),
    ("legendary", "Legendary", (600, 720)),
];

/// BST range for a bucket key, if the bucket exists.
pub fn bst_range(power_level: &str) -> Option<(u32, u32)> {
    POWER_LEVELS
        .iter()
        .find(|(key, _, _)| *key == power_level)
        .map(|(_, _, range)| *range)
}

/// A generated spread plus the total it was built to hit.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedStats {
    /// hp, attack, defense, special attack, special defense, speed.
    pub stats: [u16; 6],
    pub target: u32,
}

/// Generate a stat spread for the given power level.
///
/// `specialties` are indices into [`STAT_KEYS`] that receive extra weight.
/// Picks a uniform target total inside the bucket's range, splits it across
/// the stats proportionally to random weights, perturbs each share slightly,
/// clamps every stat to [1, 255], then nudges random stats by one until the
/// six values sum exactly to the target. Returns `None` for an unknown
/// bucket.
pub fn generate_stats<R: Rng>(
    power_level: &str,
    specialties: &[usize],
    rng: &mut R,
) -> Option<GeneratedStats> {
    let (lo, hi) = bst_range(power_level)?;
    // Six stats in [1, 255] can only ever sum inside [6, 1530].
    let target = rng.gen_range(lo..=hi).clamp(6, 6 * 255);

    let mut weights = [0f64; 6];
    for (i, weight) in weights.iter_mut().enumerate() {
        let base = rng.gen_range(0.6..1.4);
        *weight = if specialties.contains(&i) { base * 1.8 } else { base };
    }
    let weight_sum: f64 = weights.iter().sum();

    let mut stats = [0u16; 6];
    for (i, stat) in stats.iter_mut().enumerate() {
        let share = f64::from(target) * weights[i] / weight_sum;
        let noise = rng.gen_range(-0.08..0.08) * share;
        *stat = ((share + noise).round() as i64).clamp(1, 255) as u16;
    }

    let mut total: i64 = stats.iter().map(|&s| i64::from(s)).sum();
    while total != i64::from(target) {
        let i = rng.gen_range(0..6);
        if total < i64::from(target) && stats[i] < 255 {
            stats[i] += 1;
            total += 1;
        } else if total > i64::from(target) && stats[i] > 1 {
            stats[i] -= 1;
            total -= 1;
        }
    }

    Some(GeneratedStats { stats, target })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_unknown_bucket() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(generate_stats("colossal", &[], &mut rng).is_none());
    }

    #[test]
    fn test_stats_sum_to_target_in_every_bucket() {
        for (key, _, (lo, hi)) in POWER_LEVELS {
            for seed in 0..50 {
                let mut rng = SmallRng::seed_from_u64(seed);
                let generated = generate_stats(key, &[], &mut rng).unwrap();
                let sum: u32 = generated.stats.iter().map(|&s| u32::from(s)).sum();
                assert_eq!(sum, generated.target, "bucket {key} seed {seed}");
                assert!(generated.target >= *lo && generated.target <= *hi);
                for stat in generated.stats {
                    assert!((1..=255).contains(&stat), "bucket {key} seed {seed}");
                }
            }
        }
    }

    #[test]
    fn test_specialty_stats_run_higher() {
        // Speed specialists should out-speed their own average stat over
        // enough rolls.
        let mut speed_sum = 0u64;
        let mut rest_sum = 0u64;
        for seed in 0..200 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let generated = generate_stats("average", &[5], &mut rng).unwrap();
            speed_sum += u64::from(generated.stats[5]);
            rest_sum += generated.stats[..5]
                .iter()
                .map(|&s| u64::from(s))
                .sum::<u64>()
                / 5;
        }
        assert!(speed_sum > rest_sum);
    }

    #[test]
    fn test_average_bucket_range() {
        assert_eq!(bst_range("average"), Some((420, 500)));
    }
}
