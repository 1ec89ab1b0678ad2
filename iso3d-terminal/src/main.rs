/// iso3d Terminal Demo - Isometric city block
///
/// Renders into a 144x168 in-memory framebuffer and shows it with
/// half-block characters.
/// Controls:
///   - WASD / Arrow Keys: Pan the projection offset
///   - P: Toggle projection (flat x/y view)
///   - F: Toggle fill mode (full outlines / front edges only)
///   - R: Reset the offset
///   - Q/ESC: Quit

use iso3d_terminal::{init_logging, LoggingConfig, Scene, TerminalApp};
use std::io;

fn main() -> io::Result<()> {
    let logging = LoggingConfig::default();
    if let Some(path) = &logging.log_file {
        println!("Logging to {}", path.display());
    }
    init_logging(logging)?;

    println!("iso3d Terminal Renderer - Loading...");
    let scene = Scene::new();

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(scene);
    app.run()?;

    log::info!("terminal renderer exited");
    Ok(())
}
