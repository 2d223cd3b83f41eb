use approx::assert_relative_eq;
use oxygen_sim::physics::Electron;
use oxygen_sim::simulation::Atom;
use std::f64::consts::TAU;

/// Shortest distance between two angles on the circle.
fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

#[test]
fn first_electron_starts_on_the_positive_x_axis() {
    let atom = Atom::oxygen();
    let positions = atom.positions(1.5);
    assert_relative_eq!(positions[0].x, 1.5, epsilon = 1e-12);
    assert_relative_eq!(positions[0].y, 0.0, epsilon = 1e-12);
}

#[test]
fn one_full_revolution_returns_to_start() {
    let atom = Atom::oxygen();
    let mut electron: Electron = atom.electrons()[0].clone();
    let start = electron.angle();
    let period = TAU / electron.speed();

    let whole_steps = period.floor() as usize;
    for _ in 0..whole_steps {
        electron.step(1.0);
    }
    electron.step(period - whole_steps as f64);

    assert!(angular_distance(electron.angle(), start) < 1e-9);
}

#[test]
fn summary_reports_eight_electrons_on_two_shells() {
    let summary = Atom::oxygen().summary();
    assert!(summary.contains("8 électrons"));
    let shell_lines: Vec<&str> = summary
        .lines()
        .filter(|line| line.trim_start().starts_with("couche"))
        .collect();
    assert_eq!(shell_lines, ["  couche 1: 2 électrons", "  couche 2: 6 électrons"]);
}

#[test]
fn angles_stay_normalized_across_long_runs() {
    let mut atom = Atom::oxygen();
    for dt in [0.0, 0.5, 1.0, 7.3, 1_000.0] {
        for _ in 0..500 {
            atom.step(dt);
        }
        for electron in atom.electrons() {
            assert!((0.0..TAU).contains(&electron.angle()), "dt={dt}");
        }
    }
}

#[test]
fn shell_counts_match_the_oxygen_table() {
    let atom = Atom::oxygen();
    let counts = atom.shell_counts();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[&1], 2);
    assert_eq!(counts[&2], 6);
}
