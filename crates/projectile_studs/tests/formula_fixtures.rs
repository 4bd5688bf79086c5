#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

//! Fixture values and edge cases for the projectile formulas, with expected
//! values derived from the formulas rather than from prose examples.

use projectile_studs::{
    EARTH_GRAVITY, Trajectory, degrees_to_radians, max_distance, max_height, meters_to_studs,
    round_to_precision, standard_gravity, studs_to_meters, time_of_flight, trajectory,
};

fn rad(degrees: f64) -> f64 {
    degrees_to_radians(degrees).unwrap()
}

// =============================================================================
// Gravity and unit fixtures
// =============================================================================

#[test]
fn twenty_meters_is_standard_gravity() {
    assert_eq!(meters_to_studs(20.0).unwrap(), 196.2);
    assert_eq!(standard_gravity(), 196.2);
    assert_eq!(EARTH_GRAVITY, 9.81);
}

#[test]
fn studs_to_meters_rounds_to_one_decimal() {
    // 100 / 9.81 = 10.193...
    assert_eq!(studs_to_meters(100.0).unwrap(), 10.2);
    // 100 * 9.81 = 981
    assert_eq!(meters_to_studs(100.0).unwrap(), 981.0);
}

#[test]
fn reverse_round_trip_drifts_by_rounding() {
    // 10 studs -> 1.0 m -> 9.81 studs
    let back = meters_to_studs(studs_to_meters(10.0).unwrap()).unwrap();
    assert_eq!(back, 9.81);
    assert!((back - 10.0).abs() <= 0.05 * EARTH_GRAVITY + 0.005);
}

#[test]
fn reverse_round_trip_exact_for_whole_meter_studs() {
    for meters in [0.0, 1.0, 2.5, 20.0, 123.4] {
        let studs = meters_to_studs(meters).unwrap();
        let back = meters_to_studs(studs_to_meters(studs).unwrap()).unwrap();
        assert!((back - studs).abs() <= 0.01, "{studs} -> {back}");
    }
}

// =============================================================================
// Default 45 degree launch at 300 studs/s
// =============================================================================

#[test]
fn range_at_300() {
    assert_eq!(max_distance(300.0, None).unwrap(), 458.72);
}

#[test]
fn time_of_flight_at_300() {
    // 2 * 300 * sin(45deg) / 196.2 = 2.1624...
    let expected = round_to_precision(600.0 * (rad(45.0).sin() / standard_gravity()), 2).unwrap();
    assert_eq!(expected, 2.16);
    assert_eq!(time_of_flight(300.0, None).unwrap(), expected);
}

#[test]
fn peak_height_at_300() {
    // 300^2 * sin^2(45deg) / (2 * 196.2) = 114.678...
    let expected =
        round_to_precision(90_000.0 * rad(45.0).sin().powi(2) / (2.0 * standard_gravity()), 2)
            .unwrap();
    assert_eq!(expected, 114.68);
    assert_eq!(max_height(300.0, None).unwrap(), expected);
}

#[test]
fn trajectory_at_300() {
    let t = trajectory(300.0, None).unwrap();
    assert_eq!(t.distance, max_distance(300.0, None).unwrap());
    assert_eq!(t.height, max_height(300.0, None).unwrap());
    assert_eq!(t.time, time_of_flight(300.0, None).unwrap());
    assert_eq!(t.launch_angle.degrees, 45.0);
}

// =============================================================================
// Angle edge cases
// =============================================================================

#[test]
fn flat_launch_goes_nowhere() {
    for velocity in [1.0, 300.0, 10_000.0] {
        assert_eq!(max_distance(velocity, 0.0).unwrap(), 0.0);
        assert_eq!(time_of_flight(velocity, 0.0).unwrap(), 0.0);
        assert_eq!(max_height(velocity, 0.0).unwrap(), 0.0);
    }
}

#[test]
fn vertical_launch_has_no_range() {
    let up = rad(90.0);
    assert_eq!(max_distance(300.0, up).unwrap(), 0.0);

    // Time and height peak at 90 degrees
    for degrees in [15.0, 30.0, 45.0, 60.0, 75.0] {
        assert!(time_of_flight(300.0, rad(degrees)).unwrap() < time_of_flight(300.0, up).unwrap());
        assert!(max_height(300.0, rad(degrees)).unwrap() < max_height(300.0, up).unwrap());
    }
}

#[test]
fn range_peaks_at_45_degrees() {
    let best = max_distance(300.0, None).unwrap();
    for degrees in [10.0, 30.0, 44.0, 46.0, 60.0, 80.0] {
        assert!(max_distance(300.0, rad(degrees)).unwrap() < best);
    }
}

#[test]
fn complementary_angles_share_range() {
    assert_eq!(max_distance(300.0, rad(30.0)).unwrap(), 397.26);
    assert_eq!(max_distance(300.0, rad(60.0)).unwrap(), 397.26);
}

// =============================================================================
// Velocity edge cases
// =============================================================================

#[test]
fn zero_velocity_goes_nowhere() {
    for degrees in [0.0, 10.0, 45.0, 89.0] {
        assert_eq!(max_distance(0.0, rad(degrees)).unwrap(), 0.0);
    }
}

#[test]
fn negative_velocity_follows_the_formula() {
    assert_eq!(
        max_distance(-300.0, None).unwrap(),
        max_distance(300.0, None).unwrap()
    );
    assert_eq!(
        max_height(-300.0, None).unwrap(),
        max_height(300.0, None).unwrap()
    );
    assert_eq!(
        time_of_flight(-300.0, None).unwrap(),
        -time_of_flight(300.0, None).unwrap()
    );
}

#[test]
fn small_velocity_rounds_to_two_decimals() {
    assert_eq!(max_distance(100.0, None).unwrap(), 50.97);
    assert_eq!(time_of_flight(100.0, None).unwrap(), 0.72);
    assert_eq!(max_height(100.0, None).unwrap(), 12.74);
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn trajectory_serializes_with_host_keys() {
    let t = trajectory(300.0, None).unwrap();
    let json = serde_json::to_value(t).unwrap();

    assert_eq!(json["muzzleVelocity"], 300.0);
    assert_eq!(json["launchAngle"]["deg"], 45.0);
    assert_eq!(json["distance"], 458.72);
    assert_eq!(json["height"], 114.68);
    assert_eq!(json["time"], 2.16);

    let back: Trajectory = serde_json::from_value(json).unwrap();
    assert_eq!(back, t);
}
