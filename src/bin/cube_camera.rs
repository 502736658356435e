//! Face-colored cube viewed through the keyboard camera
//!
//! Usage: cube_camera [--config <file.json>]

use voxcraft::core::config::DemoConfig;
use voxcraft::core::logging;
use voxcraft::demo::CubeDemo;
use voxcraft::render;

fn main() {
    logging::init();
    log::info!("Starting cube_camera");

    let args: Vec<String> = std::env::args().collect();
    let result = DemoConfig::from_args(DemoConfig::cube_camera(), &args)
        .and_then(render::run::<CubeDemo>);

    if let Err(e) = result {
        log::error!("cube_camera failed: {}", e);
        std::process::exit(1);
    }
}
