//! Control-point fixtures for common track shapes.

use glam::DVec3;

/// Straight, flat track along `+X`, with a control point every 50 m.
pub fn straight_points(length: f64) -> Vec<DVec3> {
    let segments = (length / 50.0).ceil().max(1.0) as u32;
    (0..=segments)
        .map(|i| DVec3::new(length * f64::from(i) / f64::from(segments), 0.0, 0.0))
        .collect()
}

/// Gentle S-curve: runs along `+X` with a sinusoidal sideways swing.
pub fn s_curve_points(length: f64, amplitude: f64) -> Vec<DVec3> {
    let count = 24u32;
    (0..=count)
        .map(|i| {
            let s = f64::from(i) / f64::from(count);
            let z = amplitude * (s * std::f64::consts::TAU).sin();
            DVec3::new(length * s, 0.0, z)
        })
        .collect()
}

/// Closed circle in the XZ plane.
pub fn circle_points(radius: f64, count: u32) -> Vec<DVec3> {
    let count = count.max(3);
    (0..count)
        .map(|i| {
            let a = f64::from(i) / f64::from(count) * std::f64::consts::TAU;
            DVec3::new(radius * a.cos(), 0.0, radius * a.sin())
        })
        .collect()
}
