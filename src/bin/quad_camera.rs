//! Colored quad viewed through the keyboard camera
//!
//! Usage: quad_camera [--config <file.json>]

use voxcraft::core::config::DemoConfig;
use voxcraft::core::logging;
use voxcraft::demo::QuadDemo;
use voxcraft::render;

fn main() {
    logging::init();
    log::info!("Starting quad_camera");

    let args: Vec<String> = std::env::args().collect();
    let result = DemoConfig::from_args(DemoConfig::quad_camera(), &args)
        .and_then(render::run::<QuadDemo>);

    if let Err(e) = result {
        log::error!("quad_camera failed: {}", e);
        std::process::exit(1);
    }
}
