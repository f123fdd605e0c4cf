//! Integration test: spool-valve piston stroke from rest.
//!
//! Scenario: both chambers at ambient, a small constant valve command admits
//! supply oil to the head side. Expected behavior:
//! - head-side pressure charges rapidly, overshoots, and settles as the
//!   chambers equalize around the piston
//! - rod-side pressure stays between vacuum and supply throughout
//! - the piston accelerates and approaches a steady extension rate

use pf_sim::{
    DEFAULT_SAMPLES, DEFAULT_T_END, IntegratorType, SimError, SimOptions, SpoolValveParams,
    simulate,
};

fn canonical_options() -> SimOptions {
    SimOptions {
        t_end: DEFAULT_T_END,
        ..Default::default()
    }
}

#[test]
fn piston_stroke_charges_head_side() {
    let traj = simulate(
        SpoolValveParams::default(),
        &canonical_options(),
        DEFAULT_SAMPLES,
    )
    .unwrap();

    assert_eq!(traj.len(), 200);
    assert_eq!(traj.t[0], 0.0);
    assert!((traj.t[199] - 0.02).abs() < 1e-12);

    let params = SpoolValveParams::default();

    // Head side charges from ambient: the initial rise is monotone and
    // carries the pressure well into the MPa range within a few ms.
    assert_eq!(traj.p_head[0], params.p_ambient);
    let rise = &traj.p_head[0..25];
    assert!(rise.windows(2).all(|w| w[1] >= w[0]), "early rise not monotone");
    assert!(traj.p_head[24] > 5.0e6);

    // Neither chamber exceeds supply or drops below vacuum at any sample.
    for i in 0..traj.len() {
        assert!(traj.p_head[i] >= 0.0 && traj.p_head[i] <= params.p_supply);
        assert!(traj.p_rod[i] >= 0.0 && traj.p_rod[i] <= params.p_supply);
    }

    // Chambers equalize near the mid pressure by the end of the window.
    let p_mid = 0.5 * (params.p_supply + params.p_ambient);
    assert!((traj.p_head[199] - p_mid).abs() < 0.1 * p_mid);
    assert!((traj.p_head[199] - traj.p_rod[199]).abs() < 0.05 * p_mid);

    // The piston extends with positive velocity settling near 0.66 m/s.
    assert!(traj.velocity.iter().all(|&v| v >= 0.0));
    assert!((traj.velocity[199] - 0.665).abs() < 0.02);
    assert!(traj.position[199] > 0.010 && traj.position[199] < 0.013);
}

#[test]
fn rk4_and_adaptive_agree_on_the_stroke() {
    let adaptive = simulate(
        SpoolValveParams::default(),
        &canonical_options(),
        DEFAULT_SAMPLES,
    )
    .unwrap();

    let opts = SimOptions {
        t_end: DEFAULT_T_END,
        dt: 2e-5,
        integrator: IntegratorType::Rk4,
        ..Default::default()
    };
    let fixed = simulate(SpoolValveParams::default(), &opts, DEFAULT_SAMPLES).unwrap();

    for i in 0..DEFAULT_SAMPLES {
        let scale = adaptive.p_head[i].abs().max(1.0e5);
        assert!(
            (adaptive.p_head[i] - fixed.p_head[i]).abs() < 0.02 * scale,
            "p_head diverges at sample {i}"
        );
    }
}

#[test]
fn zero_mass_fails_the_run() {
    let params = SpoolValveParams {
        mass: 0.0,
        ..Default::default()
    };
    let err = simulate(params, &canonical_options(), DEFAULT_SAMPLES).unwrap_err();
    assert!(matches!(err, SimError::NonPhysical { .. }));
}

#[test]
fn closed_valve_holds_steady() {
    // With zero command, both chambers stay at ambient and nothing moves.
    let params = SpoolValveParams {
        command: 0.0,
        ..Default::default()
    };
    let traj = simulate(params.clone(), &canonical_options(), 50).unwrap();
    for i in 0..traj.len() {
        assert_eq!(traj.velocity[i], 0.0);
        assert_eq!(traj.p_head[i], params.p_ambient);
        assert_eq!(traj.p_rod[i], params.p_ambient);
    }
}
