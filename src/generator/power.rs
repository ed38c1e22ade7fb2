use rand::Rng;

/// Charger power levels in watts, one entry per equally likely slot.
///
/// 7.2 kW fills three of the five slots because most vehicles on the road
/// charge at that rate; 11 kW and 22 kW take one slot each.
pub const POWER_DRAW_SLOTS_W: [u32; 5] = [7200, 11000, 22000, 7200, 7200];

/// Distinct power levels, ascending.
pub const POWER_LEVELS_W: [u32; 3] = [7200, 11000, 22000];

/// Draws `count` independent power readings from [`POWER_DRAW_SLOTS_W`].
///
/// # Examples
///
/// ```
/// use evc_datagen::generator::power::{POWER_LEVELS_W, sample_power_draws};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let draws = sample_power_draws(&mut StdRng::seed_from_u64(1), 10);
/// assert_eq!(draws.len(), 10);
/// assert!(draws.iter().all(|w| POWER_LEVELS_W.contains(w)));
/// ```
pub fn sample_power_draws(rng: &mut impl Rng, count: usize) -> Vec<u32> {
    (0..count)
        .map(|_| POWER_DRAW_SLOTS_W[rng.random_range(0..POWER_DRAW_SLOTS_W.len())])
        .collect()
}
