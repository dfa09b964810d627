//! Decorative hero graphic: a node graph inside a slowly turning particle shell.
//!
//! The scene is pure state. Hosts feed it frame time and pointer input and
//! draw whatever `project` hands back; nothing flows out to the rest of the
//! site.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6, PI, TAU};
use std::time::Duration;

const INNER_RADIUS: f64 = 2.5;
const OUTER_RADIUS: f64 = 4.0;
const OUTER_Z: [f64; 6] = [1.5, -1.5, 1.0, -1.0, 1.5, -1.5];
pub const MAIN_NODES: [usize; 4] = [0, 1, 3, 5];

/// Hub spokes, inner ring, radial links, outer pairs, then cross links.
pub const EDGES: [(usize, usize); 24] = [
    (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
    (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1),
    (1, 7), (2, 8), (3, 9), (4, 10), (5, 11), (6, 12),
    (7, 8), (9, 10), (11, 12),
    (7, 10), (8, 11), (9, 12),
];

pub const SEGMENTS: usize = 20;
const WAVE_WIDTH: f64 = 0.3;
const BASE_OPACITY: f64 = 0.15;
const MAX_OPACITY: f64 = 0.9;
const ROTATION_LERP: f64 = 0.08;
const CAMERA_Z: f64 = 8.0;
const FOV_DEGREES: f64 = 75.0;
const NEAR: f64 = 0.1;
const FRAME_RATE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotate about Y, then X.
    pub fn rotated(self, rx: f64, ry: f64) -> Vec3 {
        let (sy, cy) = ry.sin_cos();
        let x = self.x * cy + self.z * sy;
        let z = -self.x * sy + self.z * cy;
        let (sx, cx) = rx.sin_cos();
        let y = self.y * cx - z * sx;
        let z = self.y * sx + z * cx;
        Vec3::new(x, y, z)
    }

    pub fn lerp(self, other: Vec3, t: f64) -> Vec3 {
        Vec3::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub position: Vec3,
    pub main: bool,
    float_speed: f64,
    float_amplitude: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    flow_offset: f64,
    flow_speed: f64,
}

/// Screen-space point in normalized device coordinates (both axes in -1..1
/// when on screen) plus distance from the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct HeroOptions {
    pub particles: usize,
    pub seed: u64,
}

impl Default for HeroOptions {
    fn default() -> Self {
        Self { particles: 100, seed: 0x5eed }
    }
}

fn node_layout() -> Vec<Vec3> {
    let mut positions = vec![Vec3::new(0.0, 0.0, 0.0)];
    for k in 0..6 {
        let angle = k as f64 * FRAC_PI_3;
        positions.push(Vec3::new(INNER_RADIUS * angle.cos(), INNER_RADIUS * angle.sin(), 0.0));
    }
    for (k, z) in OUTER_Z.iter().enumerate() {
        let angle = FRAC_PI_6 + k as f64 * FRAC_PI_3;
        positions.push(Vec3::new(OUTER_RADIUS * angle.cos(), OUTER_RADIUS * angle.sin(), *z));
    }
    positions
}

#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    particles: Vec<Vec3>,
    particle_rotation: (f64, f64),
    rotation: (f64, f64),
    target: (f64, f64),
    pressed: bool,
    time: f64,
}

impl Scene {
    pub fn new(options: &HeroOptions) -> Self {
        let mut rng = StdRng::seed_from_u64(options.seed);

        let nodes = node_layout()
            .into_iter()
            .enumerate()
            .map(|(i, position)| Node {
                position,
                main: MAIN_NODES.contains(&i),
                float_speed: (rng.gen::<f64>() - 0.5) * 0.005,
                float_amplitude: 0.05 + rng.gen::<f64>() * 0.1,
            })
            .collect();

        let edges = EDGES
            .iter()
            .map(|&(from, to)| Edge {
                from,
                to,
                flow_offset: rng.gen::<f64>() * TAU,
                flow_speed: 1.2 + rng.gen::<f64>() * 0.8,
            })
            .collect();

        let particles = (0..options.particles)
            .map(|_| {
                let radius = rng.gen_range(8.0..12.0);
                let theta = rng.gen::<f64>() * TAU;
                let phi = rng.gen::<f64>() * PI;
                Vec3::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                )
            })
            .collect();

        Self {
            nodes,
            edges,
            particles,
            particle_rotation: (0.0, 0.0),
            rotation: (0.0, 0.0),
            target: (0.0, 0.0),
            pressed: false,
            time: 0.0,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn rotation(&self) -> (f64, f64) {
        self.rotation
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn tick(&mut self, dt: Duration) {
        let seconds = dt.as_secs_f64();
        let frames = seconds * FRAME_RATE;
        self.time += seconds;

        self.particle_rotation.0 += 0.0005 * frames;
        self.particle_rotation.1 += 0.001 * frames;

        if self.pressed {
            // Per-frame lerp factor compounded over the elapsed frames.
            let t = 1.0 - (1.0 - ROTATION_LERP).powf(frames);
            self.rotation.0 += (self.target.0 - self.rotation.0) * t;
            self.rotation.1 += (self.target.1 - self.rotation.1) * t;
        }
    }

    /// Pointer down at normalized coordinates (-1..1, y up).
    pub fn press(&mut self, x: f64, y: f64) {
        self.pressed = true;
        self.aim(x, y);
    }

    pub fn drag(&mut self, x: f64, y: f64) {
        if self.pressed {
            self.aim(x, y);
        }
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    fn aim(&mut self, x: f64, y: f64) {
        let x = x.clamp(-1.0, 1.0);
        let y = y.clamp(-1.0, 1.0);
        self.target = (y * PI, x * TAU);
    }

    /// Node positions after floating and graph rotation.
    pub fn node_positions(&self) -> Vec<Vec3> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let mut p = node.position;
                if self.pressed {
                    p.y += (self.time * node.float_speed * 2.0 + i as f64).sin() * node.float_amplitude * 0.3;
                }
                p.rotated(self.rotation.0, self.rotation.1)
            })
            .collect()
    }

    pub fn node_scale(&self, index: usize) -> f64 {
        1.0 + (self.time * 0.8 + index as f64 * 0.3).sin() * 0.02
    }

    /// Opacity of one segment of an edge, following the travelling light wave.
    pub fn segment_opacity(&self, edge: usize, segment: usize) -> f64 {
        let Some(edge) = self.edges.get(edge) else {
            return BASE_OPACITY;
        };
        let wave = ((self.time * edge.flow_speed + edge.flow_offset).sin() + 1.0) * 0.5;
        let position = segment as f64 / SEGMENTS as f64;
        let distance = (position - wave).abs();
        if distance < WAVE_WIDTH {
            BASE_OPACITY + (MAX_OPACITY - BASE_OPACITY) * (1.0 - distance / WAVE_WIDTH)
        } else {
            BASE_OPACITY
        }
    }

    /// Rotated edge endpoints split into `SEGMENTS` pieces with their opacity.
    pub fn edge_segments(&self) -> Vec<(Vec3, Vec3, f64)> {
        let positions = self.node_positions();
        let mut out = Vec::with_capacity(self.edges.len() * SEGMENTS);
        for (e, edge) in self.edges.iter().enumerate() {
            let (a, b) = (positions[edge.from], positions[edge.to]);
            for s in 0..SEGMENTS {
                let t1 = s as f64 / SEGMENTS as f64;
                let t2 = (s + 1) as f64 / SEGMENTS as f64;
                out.push((a.lerp(b, t1), a.lerp(b, t2), self.segment_opacity(e, s)));
            }
        }
        out
    }

    pub fn particle_positions(&self) -> Vec<Vec3> {
        let (rx, ry) = self.particle_rotation;
        self.particles.iter().map(|p| p.rotated(rx, ry)).collect()
    }

    /// Perspective projection from a camera on +Z looking at the origin.
    /// Points behind the near plane give `None`.
    pub fn project(&self, p: Vec3, aspect: f64) -> Option<Projected> {
        let depth = CAMERA_Z - p.z;
        if depth <= NEAR || aspect <= 0.0 {
            return None;
        }
        let f = 1.0 / (FOV_DEGREES.to_radians() / 2.0).tan();
        Some(Projected {
            x: p.x * f / aspect / depth,
            y: p.y * f / depth,
            depth,
        })
    }
}

/// A scene bound to a mount area, released by `dispose` or on drop.
#[derive(Debug)]
pub struct Visualization {
    scene: Option<Scene>,
    width: f64,
    height: f64,
}

impl Visualization {
    /// Mount into a `width` x `height` area. A degenerate area yields `None`
    /// and the host shows an empty container instead.
    pub fn mount(width: f64, height: f64, options: &HeroOptions) -> Option<Visualization> {
        if !(width.is_finite() && height.is_finite()) || width < 1.0 || height < 1.0 {
            tracing::debug!(width, height, "hero mount area unusable, skipping visualization");
            return None;
        }
        tracing::debug!(width, height, particles = options.particles, "hero visualization mounted");
        Some(Self {
            scene: Some(Scene::new(options)),
            width,
            height,
        })
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn is_disposed(&self) -> bool {
        self.scene.is_none()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if width >= 1.0 && height >= 1.0 {
            self.width = width;
            self.height = height;
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Some(scene) = self.scene.as_mut() {
            scene.tick(dt);
        }
    }

    /// Pointer down at mount-local pixel coordinates.
    pub fn press(&mut self, px: f64, py: f64) {
        let (x, y) = self.normalize(px, py);
        if let Some(scene) = self.scene.as_mut() {
            scene.press(x, y);
        }
    }

    pub fn drag(&mut self, px: f64, py: f64) {
        let (x, y) = self.normalize(px, py);
        if let Some(scene) = self.scene.as_mut() {
            scene.drag(x, y);
        }
    }

    pub fn release(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.release();
            let (rx, ry) = scene.rotation();
            tracing::debug!(rx, ry, "hero drag released");
        }
    }

    fn normalize(&self, px: f64, py: f64) -> (f64, f64) {
        (px / self.width * 2.0 - 1.0, -(py / self.height * 2.0 - 1.0))
    }

    pub fn dispose(&mut self) {
        if self.scene.take().is_some() {
            tracing::debug!("hero visualization disposed");
        }
    }
}

impl Drop for Visualization {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn graph_shape() {
        let scene = Scene::new(&HeroOptions::default());
        assert_eq!(scene.nodes().len(), 13);
        assert_eq!(scene.edges().len(), EDGES.len());
        let main: Vec<usize> = scene
            .nodes()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.main)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(main, MAIN_NODES);
        assert!(EDGES.iter().all(|&(a, b)| a < 13 && b < 13 && a != b));

        let inner = scene.nodes()[2].position;
        assert!(close((inner.x * inner.x + inner.y * inner.y).sqrt(), INNER_RADIUS));
        let outer = scene.nodes()[8].position;
        assert!(close(outer.x, 0.0) && close(outer.y, OUTER_RADIUS) && close(outer.z, -1.5));
    }

    #[test]
    fn particles_sit_in_the_shell_and_are_reproducible() {
        let options = HeroOptions { particles: 64, seed: 7 };
        let a = Scene::new(&options);
        let b = Scene::new(&options);
        assert_eq!(a.particle_positions(), b.particle_positions());
        for p in a.particle_positions() {
            let r = (p.x * p.x + p.y * p.y + p.z * p.z).sqrt();
            assert!((8.0 - 1e-9..12.0 + 1e-9).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn shell_turns_on_both_axes_without_input() {
        let mut scene = Scene::new(&HeroOptions { particles: 4, seed: 3 });
        let before = scene.particle_positions();
        scene.tick(Duration::from_secs(1));

        let (rx, ry) = scene.particle_rotation;
        assert!(close(rx, 0.03) && close(ry, 0.06));
        assert_eq!(scene.rotation(), (0.0, 0.0));
        let expected: Vec<Vec3> = scene.particles.iter().map(|p| p.rotated(rx, ry)).collect();
        assert_eq!(scene.particle_positions(), expected);
        assert_ne!(scene.particle_positions(), before);
    }

    #[test]
    fn graph_only_rotates_while_pressed() {
        let mut scene = Scene::new(&HeroOptions::default());
        scene.tick(Duration::from_secs(1));
        assert_eq!(scene.rotation(), (0.0, 0.0));

        scene.press(0.5, 0.5);
        scene.tick(Duration::from_millis(16));
        let (rx, ry) = scene.rotation();
        assert!(rx > 0.0 && ry > 0.0);

        scene.tick(Duration::from_secs(10));
        let (rx, ry) = scene.rotation();
        assert!((rx - 0.5 * PI).abs() < 1e-3);
        assert!((ry - 0.5 * TAU).abs() < 1e-3);

        scene.release();
        let frozen = scene.rotation();
        scene.drag(-1.0, -1.0);
        scene.tick(Duration::from_secs(1));
        assert_eq!(scene.rotation(), frozen);
    }

    #[test]
    fn segment_opacity_stays_in_range() {
        let mut scene = Scene::new(&HeroOptions::default());
        for _ in 0..50 {
            scene.tick(Duration::from_millis(37));
            for e in 0..scene.edges().len() {
                for s in 0..SEGMENTS {
                    let o = scene.segment_opacity(e, s);
                    assert!((BASE_OPACITY..=MAX_OPACITY).contains(&o));
                }
            }
        }
        assert_eq!(scene.segment_opacity(999, 0), BASE_OPACITY);
        assert_eq!(scene.edge_segments().len(), EDGES.len() * SEGMENTS);
    }

    #[test]
    fn projection() {
        let scene = Scene::new(&HeroOptions::default());
        let center = scene.project(Vec3::new(0.0, 0.0, 0.0), 1.0).unwrap();
        assert!(close(center.x, 0.0) && close(center.y, 0.0) && close(center.depth, CAMERA_Z));
        assert!(scene.project(Vec3::new(0.0, 0.0, 9.0), 1.0).is_none());
        let right = scene.project(Vec3::new(1.0, 0.0, 0.0), 2.0).unwrap();
        let right_square = scene.project(Vec3::new(1.0, 0.0, 0.0), 1.0).unwrap();
        assert!(close(right.x * 2.0, right_square.x));
    }

    #[test]
    fn mount_and_dispose() {
        assert!(Visualization::mount(0.0, 10.0, &HeroOptions::default()).is_none());
        assert!(Visualization::mount(f64::NAN, 10.0, &HeroOptions::default()).is_none());

        let mut vis = Visualization::mount(200.0, 100.0, &HeroOptions::default()).unwrap();
        vis.press(200.0, 0.0);
        vis.tick(Duration::from_millis(100));
        assert!(vis.scene().unwrap().is_pressed());
        vis.release();

        vis.dispose();
        assert!(vis.is_disposed());
        vis.tick(Duration::from_secs(1));
        vis.press(1.0, 1.0);
        assert!(vis.scene().is_none());
    }
}
