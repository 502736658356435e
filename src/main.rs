//! Block editor: edit a grid of textured voxels
//!
//! Usage: voxcraft [--config <file.json>] [--assets <texture dir>]

use voxcraft::core::config::{arg_value, DemoConfig};
use voxcraft::core::logging;
use voxcraft::core::types::Result;
use voxcraft::demo::BlockEditorDemo;
use voxcraft::render;

fn config_from_args(args: &[String]) -> Result<DemoConfig> {
    let mut config = DemoConfig::from_args(DemoConfig::block_editor(), args)?;
    if let Some(dir) = arg_value(args, "--assets") {
        config.assets_dir = dir.to_string();
    }
    Ok(config)
}

fn main() {
    logging::init();
    log::info!("Block editor starting...");

    let args: Vec<String> = std::env::args().collect();
    let result = config_from_args(&args).and_then(|config| {
        log::info!("Textures from {}", config.assets_dir);
        render::run::<BlockEditorDemo>(config)
    });

    if let Err(e) = result {
        log::error!("Block editor failed: {}", e);
        std::process::exit(1);
    }
}
