//! 3x3x3 cube block viewed through the free-fly camera
//!
//! Usage: cube_grid [--config <file.json>]

use voxcraft::core::config::DemoConfig;
use voxcraft::core::logging;
use voxcraft::demo::CubeGridDemo;
use voxcraft::render;

fn main() {
    logging::init();
    log::info!("Starting cube_grid");

    let args: Vec<String> = std::env::args().collect();
    let result = DemoConfig::from_args(DemoConfig::cube_grid(), &args)
        .and_then(render::run::<CubeGridDemo>);

    if let Err(e) = result {
        log::error!("cube_grid failed: {}", e);
        std::process::exit(1);
    }
}
