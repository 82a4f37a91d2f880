use std::time::Instant;

use crate::error::SimResult;
use crate::simulation::params::{Parameters, MU_SUN};
use crate::simulation::states::{Body, CentralBody, NVec3, System};
use crate::simulation::trajectory::RetentionPolicy;

/// Helper to build a system of `n` bodies on circular orbits between 0.4 and 30 AU
fn make_system(n: usize, retention: RetentionPolicy) -> SimResult<System> {
    let params = Parameters::new(MU_SUN)?.with_retention(retention)?;
    let mut sys = System::with_parameters(CentralBody::sun(), params);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic radii and phases, no rand needed
        let r = 0.4 + 29.6 * (i_f + 0.5) / n as f64;
        let phase = i_f * 2.399963; // golden angle
        let speed = (MU_SUN / r).sqrt();
        let x = NVec3::new(r * phase.cos(), r * phase.sin(), 0.0);
        let v = NVec3::new(-speed * phase.sin(), speed * phase.cos(), 0.0);
        sys.add_body(Body::new(i as u32, x, v)?);
    }

    sys.set_initial_time(0.0)?;
    Ok(sys)
}

/// Time one step() for growing body counts
/// History is capped so allocation does not dominate the timing
pub fn bench_step() -> SimResult<()> {
    let ns = [8, 64, 512, 4096, 32768];
    let steps = 1000; // number of steps per n

    for n in ns {
        let mut sys = make_system(n, RetentionPolicy::RingBuffer { capacity: 64 })?;

        // Warm up
        if let Err(e) = sys.step() {
            println!("N = {n:6}, warm-up failed: {e}");
            continue;
        }

        let t0 = Instant::now();
        let result = sys.advance(steps);
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        match result {
            Ok(_) => println!("N = {n:6}, step = {:10.3} us", per_step * 1.0e6),
            Err(e) => println!("N = {n:6}, failed: {e}"),
        }
    }
    Ok(())
}

/// Compare retention policies on a long run
/// Paste output directly into a spreadsheet to graph
pub fn bench_retention() -> SimResult<()> {
    let n = 512;
    let steps = 22 * 365;
    let policies = [
        ("unbounded", RetentionPolicy::Unbounded),
        ("ring_1000", RetentionPolicy::RingBuffer { capacity: 1000 }),
        ("decimate_10", RetentionPolicy::Decimate { every: 10 }),
    ];

    println!("policy,total_ms,points_per_body");

    for (name, policy) in policies {
        let mut sys = make_system(n, policy)?;

        let t0 = Instant::now();
        if let Err(e) = sys.advance(steps) {
            println!("{name},failed: {e}");
            continue;
        }
        let total_ms = t0.elapsed().as_secs_f64() * 1000.0;
        let points = sys.bodies().first().map_or(0, |b| b.trajectory().len());

        println!("{},{:.3},{}", name, total_ms, points);
    }
    Ok(())
}
