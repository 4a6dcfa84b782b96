use fastrand::Rng;

use crate::fleet::{Drone, Position};

const MAX_BATTERY_DRAIN: f64 = 0.5;
const SIGNAL_STEP: f64 = 5.0;
pub const SIGNAL_FLOOR: f64 = 70.0;
pub const SIGNAL_CEIL: f64 = 100.0;
const POSITION_STEP_DEG: f64 = 0.0005;
const ALTITUDE_STEP_M: f64 = 2.5;
pub const MIN_ALTITUDE_M: f64 = 100.0;
pub const MAX_ALTITUDE_M: f64 = 200.0;

/// Uniform sample in `[-half_width, half_width)`.
fn jitter(rng: &mut Rng, half_width: f64) -> f64 {
    (rng.f64() - 0.5) * 2.0 * half_width
}

/// One telemetry tick over the whole fleet.
///
/// Battery only ever drains, signal random-walks inside
/// [`SIGNAL_FLOOR`, `SIGNAL_CEIL`], and only active drones move. Identity
/// fields are carried over untouched. The input is not modified; callers
/// swap in the returned collection.
pub fn advance_telemetry(drones: &[Drone], rng: &mut Rng) -> Vec<Drone> {
    drones.iter().map(|drone| advance_drone(drone, rng)).collect()
}

fn advance_drone(drone: &Drone, rng: &mut Rng) -> Drone {
    let battery = (drone.battery - rng.f64() * MAX_BATTERY_DRAIN).max(0.0);
    let signal = (drone.signal + jitter(rng, SIGNAL_STEP)).clamp(SIGNAL_FLOOR, SIGNAL_CEIL);

    let position = if drone.status.is_active() {
        Position {
            lat: drone.position.lat + jitter(rng, POSITION_STEP_DEG),
            lng: drone.position.lng + jitter(rng, POSITION_STEP_DEG),
            alt: (drone.position.alt + jitter(rng, ALTITUDE_STEP_M))
                .clamp(MIN_ALTITUDE_M, MAX_ALTITUDE_M),
        }
    } else {
        drone.position
    };

    Drone {
        battery,
        signal,
        position,
        ..drone.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{fixtures, DroneStatus};

    const TICKS: usize = 500;

    fn run<F: FnMut(&Drone, &Drone)>(seed: u64, mut check: F) {
        let mut rng = Rng::with_seed(seed);
        let mut drones = fixtures::drones();
        for _ in 0..TICKS {
            let next = advance_telemetry(&drones, &mut rng);
            assert_eq!(next.len(), drones.len());
            for (before, after) in drones.iter().zip(&next) {
                check(before, after);
            }
            drones = next;
        }
    }

    #[test]
    fn battery_never_increases_and_stays_non_negative() {
        run(1, |before, after| {
            assert!(after.battery <= before.battery);
            assert!(after.battery >= 0.0);
            assert!(before.battery - after.battery <= MAX_BATTERY_DRAIN);
        });
    }

    #[test]
    fn signal_is_clamped_after_any_tick() {
        run(2, |_, after| {
            assert!((SIGNAL_FLOOR..=SIGNAL_CEIL).contains(&after.signal));
        });
    }

    #[test]
    fn idle_drones_do_not_move() {
        run(3, |before, after| {
            if before.status != DroneStatus::Active {
                assert_eq!(before.position, after.position);
            }
        });
    }

    #[test]
    fn active_drones_stay_in_altitude_band() {
        run(4, |before, after| {
            if before.status == DroneStatus::Active {
                assert!((MIN_ALTITUDE_M..=MAX_ALTITUDE_M).contains(&after.position.alt));
                assert!((after.position.lat - before.position.lat).abs() <= POSITION_STEP_DEG);
                assert!((after.position.lng - before.position.lng).abs() <= POSITION_STEP_DEG);
            }
        });
    }

    #[test]
    fn identity_fields_are_preserved() {
        run(5, |before, after| {
            assert_eq!(before.id, after.id);
            assert_eq!(before.name, after.name);
            assert_eq!(before.status, after.status);
            assert_eq!(before.mission, after.mission);
            assert_eq!(before.formation, after.formation);
        });
    }

    #[test]
    fn single_tick_from_known_state() {
        let lead = fixtures::drones().remove(0);
        assert_eq!(lead.battery, 87.0);
        assert_eq!(lead.signal, 95.0);
        assert_eq!(lead.status, DroneStatus::Active);

        for seed in 0..200 {
            let mut rng = Rng::with_seed(seed);
            let next = advance_telemetry(std::slice::from_ref(&lead), &mut rng);
            let after = &next[0];
            assert!((86.5..=87.0).contains(&after.battery), "seed {seed}");
            assert!((85.0..=100.0).contains(&after.signal), "seed {seed}");
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let drones = fixtures::drones();
        let mut rng = Rng::with_seed(9);
        let _ = advance_telemetry(&drones, &mut rng);
        assert_eq!(drones, fixtures::drones());
    }

    #[test]
    fn same_seed_replays_identically() {
        let drones = fixtures::drones();
        let a = advance_telemetry(&drones, &mut Rng::with_seed(42));
        let b = advance_telemetry(&drones, &mut Rng::with_seed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_battery_stays_at_zero() {
        let mut drone = fixtures::drones().remove(3);
        drone.battery = 0.1;
        let mut rng = Rng::with_seed(11);
        for _ in 0..10 {
            drone = advance_telemetry(std::slice::from_ref(&drone), &mut rng).remove(0);
        }
        assert_eq!(drone.battery, 0.0);
    }
}
