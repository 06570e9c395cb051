//! Boot-time seed for the target generator.

use defmt::{info, warn};
use embassy_nrf::peripherals::RNG;
use embassy_nrf::rng::Rng;
use embassy_time::Instant;

use crate::error::check_entropy;
use crate::rng::mix_seed;

/// Mix eight bytes of hardware entropy with the RTC tick count.
///
/// A stuck generator only costs the hardware half; the tick count still
/// varies from boot to boot.
pub fn boot_seed(rng: &mut Rng<'_, RNG>) -> u64 {
    let mut bytes = [0u8; 8];
    rng.blocking_fill_bytes(&mut bytes);
    let ticks = Instant::now().as_ticks();

    match check_entropy(bytes) {
        Ok(bytes) => {
            info!("RNG: seeded from hardware entropy");
            mix_seed(bytes, ticks)
        }
        Err(e) => {
            warn!("RNG: {}, seeding from ticks only", e);
            mix_seed([0; 8], ticks)
        }
    }
}
