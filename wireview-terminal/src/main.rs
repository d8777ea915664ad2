/// Wireview terminal demo - rotating wireframe cube
///
/// Usage: wireview [renderer-config.toml]
///   Colors and overlays come from the config; width and height always
///   follow the terminal size.
/// Controls:
///   - W/S, A/D, E/R: Rotate around local X, Y, Z
///   - Arrow Keys: Move in world space
///   - +/-: World scale
///   - X / B: Toggle axis / bounding box overlays
///   - Q/ESC: Quit

use std::env;
use std::fs;
use std::io;
use wireview_core::{MeshModel, RendererConfig};
use wireview_terminal::TerminalApp;

fn load_config(path: &str) -> io::Result<RendererConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("Failed to read config {}: {}", path, e)))?;
    RendererConfig::from_toml_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => RendererConfig::default(),
    };

    println!("Wireview Terminal Viewer - Loading...");
    let cube = MeshModel::cube(2.0);

    // Run the terminal app
    let mut app = TerminalApp::new(cube, config)?;
    app.run()?;

    println!("Thank you for using Wireview!");
    Ok(())
}
