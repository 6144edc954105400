//! Solar system demo application
//!
//! Builds a small sun → orbit pivot → planet → moon hierarchy and runs the
//! once-per-frame draw traversal a few times, rotating the orbit pivots
//! between frames. Draw calls are logged rather than submitted to a GPU;
//! the point is to exercise the matrix propagation end to end.

mod config;

use std::rc::Rc;

use scene_engine::foundation::logging;
use scene_engine::prelude::*;

use crate::config::SolarConfig;

/// Drawer that logs each draw call instead of touching a GPU
struct ConsoleDrawer {
    name: &'static str,
}

impl ConsoleDrawer {
    fn new(name: &'static str) -> Rc<Self> {
        Rc::new(Self { name })
    }
}

impl MeshDrawer for ConsoleDrawer {
    fn draw(&self, mvp: &Mat4, _model_view: &Mat4, _normal_matrix: &Mat3, model: &Mat4) {
        // World position is the translation column of the model matrix.
        let position = Vec3::new(model.m14, model.m24, model.m34);
        let clip = mvp * Vec4::new(0.0, 0.0, 0.0, 1.0);
        log::info!(
            "draw {:<8} world=({:+.2}, {:+.2}, {:+.2}) clip_w={:+.2}",
            self.name,
            position.x,
            position.y,
            position.z,
            clip.w,
        );
    }
}

/// The demo scene with handles to the nodes animated between frames
struct SolarScene {
    sun: NodeRef,
    orbit: NodeRef,
    moon_orbit: NodeRef,
}

impl SolarScene {
    fn build(config: &SolarConfig) -> Self {
        let sun = SceneNode::new(
            Some(ConsoleDrawer::new("sun")),
            Transform::identity().with_uniform_scale(2.0),
            None,
        );

        // Grouping node: no drawable, carries the planet's orbit rotation.
        let orbit = SceneNode::new(None, Transform::identity(), Some(&sun));

        let planet = SceneNode::new(
            Some(ConsoleDrawer::new("planet")),
            Transform::from_position(Vec3::new(config.orbit.planet_distance, 0.0, 0.0))
                .with_uniform_scale(0.5),
            Some(&orbit),
        );

        let moon_orbit = SceneNode::new(None, Transform::identity(), Some(&planet));

        let _moon = SceneNode::new(
            Some(ConsoleDrawer::new("moon")),
            Transform::from_position(Vec3::new(config.orbit.moon_distance, 0.0, 0.0))
                .with_uniform_scale(0.25),
            Some(&moon_orbit),
        );

        Self {
            sun,
            orbit,
            moon_orbit,
        }
    }

    /// Advance the orbit pivots by one frame step
    fn step(&self, orbit_step: f32) {
        let mut orbit = self.orbit.borrow_mut();
        let current = orbit.transform().rotation;
        orbit.transform_mut().rotation =
            Quat::from_axis_angle(&Vec3::y_axis(), orbit_step) * current;
        drop(orbit);

        // The moon orbits its planet twice as fast.
        let mut moon_orbit = self.moon_orbit.borrow_mut();
        let current = moon_orbit.transform().rotation;
        moon_orbit.transform_mut().rotation =
            Quat::from_axis_angle(&Vec3::y_axis(), orbit_step * 2.0) * current;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = SolarConfig::load_or_default("solar.toml");

    log::info!("Building solar system scene...");
    let scene = SolarScene::build(&config);

    let projection = Mat4::perspective(
        config.camera.fov_degrees.to_radians(),
        config.camera.aspect,
        config.camera.near,
        config.camera.far,
    );
    let view = Mat4::look_at(
        Vec3::from(config.camera.eye),
        Vec3::from(config.camera.target),
        Vec3::y(),
    );

    for frame in 0..config.orbit.frames {
        log::info!("--- frame {frame} ---");
        scene
            .sun
            .borrow()
            .draw(&projection, &view, &Mat3::identity(), None);
        scene.step(config.orbit.orbit_step);
    }

    log::info!("Done after {} frames", config.orbit.frames);
    Ok(())
}
