//! Demo configuration
//!
//! Camera and orbital layout settings for the solar demo, loaded from TOML
//! with sensible defaults when no file is present.

use scene_engine::config::Config;
use serde::{Deserialize, Serialize};

/// Camera parameters for the root projection and view matrices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Viewport aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane distance
    pub near: f32,
    /// Far clip plane distance
    pub far: f32,
    /// Camera position
    pub eye: [f32; 3],
    /// Point the camera looks at
    pub target: [f32; 3],
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
            eye: [0.0, 6.0, 18.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Orbital layout of the demo scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitSettings {
    /// Planet distance from the sun
    pub planet_distance: f32,
    /// Moon distance from the planet
    pub moon_distance: f32,
    /// Orbit pivot rotation per frame, radians
    pub orbit_step: f32,
    /// Number of frames to simulate
    pub frames: u32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            planet_distance: 6.0,
            moon_distance: 1.5,
            orbit_step: 0.1,
            frames: 4,
        }
    }
}

/// Top-level demo configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolarConfig {
    /// Camera parameters
    pub camera: CameraSettings,
    /// Orbital layout
    pub orbit: OrbitSettings,
}

impl Config for SolarConfig {}

impl SolarConfig {
    /// Load from the given path, falling back to defaults when the file is
    /// missing or malformed
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {path}");
                config
            }
            Err(err) => {
                log::warn!("Using default configuration ({err})");
                Self::default()
            }
        }
    }
}
