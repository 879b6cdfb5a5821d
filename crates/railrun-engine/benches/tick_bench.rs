//! Tick Benchmarks
//!
//! Criterion benchmarks for the per-tick pipeline and for render-frame
//! advisory recomputation.

use criterion::{Criterion, criterion_group, criterion_main};
use railrun_dynamics::VehicleControls;
use railrun_engine::{Level, LevelDefinition, Session, Simulation, SimulationConfig};

fn simulation() -> Option<Simulation> {
    let config = SimulationConfig::default();
    let level = Level::build(&LevelDefinition::default(), &config.terminal).ok()?;
    let mut sim = Simulation::new(config, level);
    sim.start();
    sim.set_controls(0.4, 0.0);
    Some(sim)
}

fn bench_tick(c: &mut Criterion) {
    let Some(mut sim) = simulation() else {
        return;
    };
    let h = 1.0 / 60.0;

    c.bench_function("simulation_tick", |b| {
        b.iter(|| {
            if sim.state().is_terminal() {
                sim.restart();
                sim.set_controls(0.4, 0.0);
            }
            std::hint::black_box(sim.tick(std::hint::black_box(h)));
        })
    });
}

fn bench_advisory_at(c: &mut Criterion) {
    let Some(sim) = simulation() else {
        return;
    };

    c.bench_function("advisory_at", |b| {
        b.iter(|| std::hint::black_box(sim.advisory_at(std::hint::black_box(640.0))))
    });
}

fn bench_session_frame(c: &mut Criterion) {
    let Some(sim) = simulation() else {
        return;
    };
    let mut session = Session::new(sim);
    session.start();
    let controls = VehicleControls::new(0.4, 0.0);
    let mut t = 0.0;

    c.bench_function("session_frame_144hz", |b| {
        b.iter(|| {
            t += 1.0 / 144.0;
            if session.snapshot().run_state.is_terminal() {
                session.restart();
            }
            std::hint::black_box(session.frame(t, controls));
        })
    });
}

criterion_group!(benches, bench_tick, bench_advisory_at, bench_session_frame);
criterion_main!(benches);
