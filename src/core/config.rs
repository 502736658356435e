//! Demo configuration
//!
//! Every program starts from a preset and may overlay a JSON file passed with
//! `--config`. Fields missing from the file keep the preset's value.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::Error;
use crate::core::types::Result;

/// Largest accepted voxel grid extent
///
/// 64^3 cells plus the selection redraw keep the per-draw model buffer
/// well under wgpu's default 256 MiB `max_buffer_size`.
pub const MAX_GRID_EXTENT: usize = 64;

/// Window settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "voxcraft".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Initial camera state and controller tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// World position
    pub position: [f32; 3],
    /// Yaw in degrees (-90 looks down -Z)
    pub yaw: f32,
    /// Pitch in degrees
    pub pitch: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Movement speed in units per second
    pub speed: f32,
    /// Mouse-look degrees per pixel
    pub sensitivity: f32,
    /// Keyboard turn speed in degrees per second
    ///
    /// Positive values make the left arrow swing the view right. A negative
    /// value reverses the arrows so the left arrow turns left.
    pub turn_speed: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw: -90.0,
            pitch: 0.0,
            fov: 45.0,
            speed: 5.0,
            sensitivity: 0.05,
            turn_speed: 10.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Full configuration for one demo program
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    /// Background clear color (linear RGB)
    pub clear_color: [f32; 3],
    /// Cells per axis of the voxel grid
    pub grid_extent: usize,
    /// Render scale of each voxel cube
    pub voxel_scale: f32,
    /// Directory holding the block textures
    pub assets_dir: String,
    /// Model rotation rate about Y for the single-cube demo
    pub spin_deg_per_sec: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            camera: CameraSettings::default(),
            clear_color: [0.2, 0.3, 0.3],
            grid_extent: 10,
            voxel_scale: 0.98,
            assets_dir: "assets/block_tex".to_string(),
            spin_deg_per_sec: 0.0,
        }
    }
}

impl DemoConfig {
    /// Colored quad with the keyboard camera
    pub fn quad_camera() -> Self {
        Self {
            window: WindowSettings {
                title: "Camera + Projection".to_string(),
                ..Default::default()
            },
            camera: CameraSettings {
                position: [0.0, 0.0, 2.0],
                fov: 89.0,
                speed: 1.0,
                turn_speed: -10.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Face-colored cube with the keyboard camera
    pub fn cube_camera() -> Self {
        Self {
            window: WindowSettings {
                title: "Camera Cube".to_string(),
                ..Default::default()
            },
            camera: CameraSettings {
                position: [0.0, 0.0, 2.0],
                fov: 67.0,
                speed: 1.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// 3x3x3 cube block with the free-fly camera
    pub fn cube_grid() -> Self {
        Self {
            window: WindowSettings {
                title: "Camera Cube Grid".to_string(),
                ..Default::default()
            },
            camera: CameraSettings {
                position: [0.0, 0.0, -3.0],
                yaw: 90.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Voxel block editor
    pub fn block_editor() -> Self {
        Self {
            window: WindowSettings {
                title: "Block Editor".to_string(),
                ..Default::default()
            },
            camera: CameraSettings {
                position: [0.0, 0.0, 20.0],
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Load a config file on top of the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::default().overlay_file(path)
    }

    /// Overlay a JSON config file on top of `self`
    pub fn overlay_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = self.overlay_json(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Overlay JSON text on top of `self`
    pub fn overlay_json(self, text: &str) -> Result<Self> {
        let overlay: Value = serde_json::from_str(text)
            .map_err(|e| Error::Config(e.to_string()))?;
        let mut base = serde_json::to_value(&self)
            .map_err(|e| Error::Config(e.to_string()))?;
        merge_json(&mut base, overlay);
        let config: Self = serde_json::from_value(base)
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the programs cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_GRID_EXTENT).contains(&self.grid_extent) {
            return Err(Error::Config(format!(
                "grid_extent must be between 1 and {}, got {}",
                MAX_GRID_EXTENT, self.grid_extent
            )));
        }
        Ok(())
    }

    /// Apply the shared command line flags (`--config`)
    pub fn from_args(preset: Self, args: &[String]) -> Result<Self> {
        match arg_value(args, "--config") {
            Some(path) => preset.overlay_file(path),
            None => Ok(preset),
        }
    }
}

/// Value following `flag` on the command line, if any
pub fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

fn merge_json(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
