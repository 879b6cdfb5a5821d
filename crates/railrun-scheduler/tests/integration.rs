//! Integration tests driving the scheduler with realistic frame timelines.

use railrun_scheduler::prelude::*;

/// Frame timeline with a steady frame rate and one long stall in the middle.
fn timeline_with_stall(fps: f64, frames: u32, stall_at: u32, stall_seconds: f64) -> Vec<f64> {
    let mut t = 0.0;
    let mut out = Vec::with_capacity(frames as usize);
    for i in 0..frames {
        if i == stall_at {
            t += stall_seconds;
        }
        t += 1.0 / fps;
        out.push(t);
    }
    out
}

#[test]
fn steps_match_wall_time_at_steady_rate() {
    let mut scheduler = FixedStepScheduler::new(SchedulerConfig::default());
    scheduler.start();

    let mut steps = 0u64;
    // 144 Hz display, 10 seconds.
    for i in 0..=1440 {
        let report = scheduler.frame(f64::from(i) / 144.0, |_| steps += 1);
        assert!(report.alpha >= 0.0 && report.alpha < 1.0);
    }

    // 10 seconds at 60 Hz is 600 steps, allow one step of rounding slack.
    assert!((599..=600).contains(&steps), "steps = {steps}");
    assert_eq!(scheduler.total_steps(), steps);
}

#[test]
fn slow_display_releases_multiple_steps_per_frame() {
    let mut scheduler = FixedStepScheduler::new(SchedulerConfig::default());
    scheduler.start();
    scheduler.frame(0.0, |_| {});

    // 20 Hz display against a 60 Hz simulation.
    let mut per_frame = Vec::new();
    for i in 1..=20 {
        let report = scheduler.frame(f64::from(i) / 20.0, |_| {});
        per_frame.push(report.steps);
    }
    assert!(per_frame.iter().all(|&s| (2..=4).contains(&s)));
    let total: u32 = per_frame.iter().sum();
    assert!((59..=60).contains(&total), "total = {total}");
}

#[test]
fn stall_contributes_at_most_the_clamp() {
    let mut scheduler = FixedStepScheduler::new(SchedulerConfig::default());
    scheduler.start();
    scheduler.frame(0.0, |_| {});

    let mut clamped_frames = 0;
    let mut steps = 0u64;
    for t in timeline_with_stall(60.0, 120, 60, 3.0) {
        let report = scheduler.frame(t, |_| steps += 1);
        if report.clamped {
            clamped_frames += 1;
            assert!(report.steps <= 16);
        }
    }

    assert_eq!(clamped_frames, 1);
    // 2 s of steady frames plus at most 0.25 s from the stall.
    assert!(steps <= 120 + 16, "steps = {steps}");
    assert!(steps >= 119, "steps = {steps}");
}

#[test]
fn restart_after_stop_does_not_replay() {
    let mut scheduler = FixedStepScheduler::new(SchedulerConfig::default());
    scheduler.start();
    scheduler.frame(0.0, |_| {});
    scheduler.frame(0.1, |_| {});
    let before = scheduler.total_steps();

    scheduler.stop();
    for t in [0.2, 0.3, 5.0] {
        let report = scheduler.frame(t, |_| {});
        assert_eq!(report.steps, 0);
    }
    assert_eq!(scheduler.total_steps(), before);

    scheduler.start();
    assert_eq!(scheduler.frame(100.0, |_| {}).steps, 0);
    assert_eq!(scheduler.frame(100.0 + 1.0 / 60.0, |_| {}).steps, 1);
}

#[test]
fn callbacks_never_overlap() {
    let mut scheduler = FixedStepScheduler::new(SchedulerConfig::default());
    scheduler.start();
    scheduler.frame(0.0, |_| {});

    let mut in_step = false;
    let mut order = Vec::new();
    scheduler.frame(0.2, |h| {
        assert!(!in_step);
        in_step = true;
        order.push(h);
        in_step = false;
    });
    assert_eq!(order.len(), 12);
}
