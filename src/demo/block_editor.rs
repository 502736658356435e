//! Voxel block editor

use std::path::PathBuf;

use crate::core::camera::Camera;
use crate::core::camera_controller::FpsCameraController;
use crate::core::config::DemoConfig;
use crate::core::input::InputState;
use crate::core::types::Result;
use crate::demo::surface_aspect;
use crate::render::buffer::{CameraBuffer, ModelBuffer};
use crate::render::context::GpuContext;
use crate::render::draw_list::{build_draw_list, model_matrices};
use crate::render::frame::{begin_scene_pass, clear_color, FrameTarget};
use crate::render::mesh::{textured_cube_vertices, Mesh};
use crate::render::pipeline::TexturedPipeline;
use crate::render::texture::TexturePalette;
use crate::render::Demo;
use crate::voxel::{EditorCommand, VoxelEditor};

/// Editor commands whose keys went down this frame, in binding order
pub fn pressed_commands(input: &InputState) -> Vec<EditorCommand> {
    EditorCommand::KEY_BINDINGS
        .iter()
        .filter(|(key, _)| input.is_key_just_pressed(*key))
        .map(|(_, command)| *command)
        .collect()
}

/// Apply this frame's commands to the editor
///
/// Returns how many commands changed the grid.
pub fn handle_input(editor: &mut VoxelEditor, input: &InputState) -> usize {
    let mut changed = 0;
    for command in pressed_commands(input) {
        match editor.apply(command) {
            Ok(true) => {
                changed += 1;
                log::debug!("{:?} -> cursor {:?}", command, editor.cursor().index());
            }
            Ok(false) => log::debug!("{:?} ignored at {:?}", command, editor.cursor().index()),
            Err(e) => log::error!("Editor command {:?} failed: {}", command, e),
        }
    }
    changed
}

pub struct BlockEditorDemo {
    editor: VoxelEditor,
    camera: Camera,
    controller: FpsCameraController,
    camera_buffer: CameraBuffer,
    models: ModelBuffer,
    pipeline: TexturedPipeline,
    palette: TexturePalette,
    mesh: Mesh,
    clear: wgpu::Color,
}

impl Demo for BlockEditorDemo {
    fn init(gpu: &GpuContext, config: &DemoConfig) -> Result<Self> {
        let editor = VoxelEditor::new(config.grid_extent, config.voxel_scale)?;
        log::info!(
            "Block editor: {0}x{0}x{0} grid, cursor at {1:?}",
            config.grid_extent,
            editor.cursor().index()
        );
        log::info!("Arrows/PageUp/PageDown move the cursor, Delete hides, V shows, Space/C cycle");

        let camera_buffer = CameraBuffer::new(&gpu.device);
        // Every cell plus the selection redraw
        let models = ModelBuffer::new(&gpu.device, editor.grid().len() + 1);
        let pipeline = TexturedPipeline::new(&gpu.device, gpu.format(), &camera_buffer, &models)?;

        let assets_dir = PathBuf::from(&config.assets_dir);
        let palette = TexturePalette::load(
            &gpu.device,
            &gpu.queue,
            pipeline.texture_bind_group_layout(),
            &assets_dir,
        );

        Ok(Self {
            editor,
            camera: Camera::from_settings(&config.camera, surface_aspect(gpu)),
            controller: FpsCameraController::from_settings(&config.camera),
            camera_buffer,
            models,
            pipeline,
            palette,
            mesh: Mesh::new(&gpu.device, "block_cube", &textured_cube_vertices()),
            clear: clear_color(config.clear_color),
        })
    }

    fn captures_mouse(&self) -> bool {
        true
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width as f32, height as f32);
    }

    fn update(&mut self, input: &InputState, dt: f32) {
        handle_input(&mut self.editor, input);
        self.controller.update(&mut self.camera, input, dt);
    }

    fn render(&mut self, gpu: &GpuContext, encoder: &mut wgpu::CommandEncoder, target: &FrameTarget<'_>) {
        let draws = build_draw_list(self.editor.grid(), &self.editor.cursor());
        self.camera_buffer.update(&gpu.queue, &self.camera);
        self.models.write(&gpu.device, &gpu.queue, &model_matrices(&draws));

        let mut pass = begin_scene_pass(encoder, target, self.clear);
        self.pipeline.draw(
            &mut pass,
            &self.camera_buffer,
            &self.models,
            &self.palette,
            &self.mesh,
            &draws,
        );
    }
}
