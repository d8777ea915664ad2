/// Terminal wireframe viewer built on wireview-core
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Stdout, Write};
use std::time::{Duration, Instant};
use wireview_core::{Camera, MeshModel, RendererConfig, RotationState, Scene, WireframeRenderer};

pub mod surface;

pub use surface::TerminalSurface;

/// Degrees added per rotation key press
const ROTATE_STEP: f32 = 5.0;
/// World units moved per translation key press
const TRANSLATE_STEP: f32 = 0.1;
const SCALE_STEP: f32 = 1.1;

/// User-driven transform inputs for the active model
///
/// Rotate calls on a model replace the angle for that axis, so the absolute
/// angles live here and are re-sent on every change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerControls {
    pub rotation: RotationState,
    pub offset: (f32, f32),
    pub scale: f32,
    pub spin: bool,
}

impl Default for ViewerControls {
    fn default() -> Self {
        Self {
            rotation: RotationState::new(20.0, 30.0, 0.0),
            offset: (0.0, 0.0),
            scale: 1.0,
            spin: true,
        }
    }
}

/// Outcome of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Transform,
    Toggle,
    Ignored,
}

impl ViewerControls {
    /// Update the controls and scene toggles for a key press
    pub fn handle_key(&mut self, code: KeyCode, scene: &mut Scene) -> KeyAction {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Char('w') => self.rotation = self.rotation.with_x(self.rotation.x + ROTATE_STEP),
            KeyCode::Char('s') => self.rotation = self.rotation.with_x(self.rotation.x - ROTATE_STEP),
            KeyCode::Char('a') => self.rotation = self.rotation.with_y(self.rotation.y - ROTATE_STEP),
            KeyCode::Char('d') => self.rotation = self.rotation.with_y(self.rotation.y + ROTATE_STEP),
            KeyCode::Char('e') => self.rotation = self.rotation.with_z(self.rotation.z + ROTATE_STEP),
            KeyCode::Char('r') => self.rotation = self.rotation.with_z(self.rotation.z - ROTATE_STEP),
            KeyCode::Left => self.offset.0 -= TRANSLATE_STEP,
            KeyCode::Right => self.offset.0 += TRANSLATE_STEP,
            KeyCode::Up => self.offset.1 += TRANSLATE_STEP,
            KeyCode::Down => self.offset.1 -= TRANSLATE_STEP,
            KeyCode::Char('+') | KeyCode::Char('=') => self.scale *= SCALE_STEP,
            KeyCode::Char('-') => self.scale /= SCALE_STEP,
            KeyCode::Char(' ') => {
                self.spin = !self.spin;
                return KeyAction::Toggle;
            }
            KeyCode::Char('x') => {
                scene.show_axis = !scene.show_axis;
                return KeyAction::Toggle;
            }
            KeyCode::Char('b') => {
                scene.show_bounding_box = !scene.show_bounding_box;
                return KeyAction::Toggle;
            }
            _ => return KeyAction::Ignored,
        }
        KeyAction::Transform
    }

    /// Push the current controls into a model
    pub fn apply(&self, model: &mut MeshModel) {
        model.rotate_local_x(self.rotation.x);
        model.rotate_local_y(self.rotation.y);
        model.rotate_local_z(self.rotation.z);
        model.translate_world(self.offset.0, self.offset.1, 0.0);
        model.scale_world(self.scale);
    }
}

/// The frame always matches the terminal; a configured resolution only
/// applies to library users rendering off-screen.
pub fn fit_to_terminal(config: RendererConfig, width: usize, height: usize) -> RendererConfig {
    if (config.width, config.height) != (width, height) {
        log::info!(
            "Configured size {}x{} replaced by terminal size {}x{}",
            config.width,
            config.height,
            width,
            height
        );
    }
    RendererConfig {
        width,
        height,
        ..config
    }
}

/// Main application struct for terminal wireframe viewing
pub struct TerminalApp {
    scene: Scene,
    renderer: WireframeRenderer,
    surface: TerminalSurface<Stdout>,
    controls: ViewerControls,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: MeshModel, config: RendererConfig) -> io::Result<Self> {
        let surface = TerminalSurface::stdout()?;
        let (width, height) = surface.pixel_size();

        let renderer = WireframeRenderer::new(fit_to_terminal(config, width, height));

        let mut scene = Scene::new(Camera::new(width as u32, height as u32));
        scene.add_model(mesh);

        let controls = ViewerControls::default();
        if let Some(model) = scene.active_model_mut() {
            controls.apply(model);
        }

        log::info!("Viewer started at {}x{} pixels", width, height);

        Ok(Self {
            scene,
            renderer,
            surface,
            controls,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => {
                if self.controls.handle_key(code, &mut self.scene) == KeyAction::Quit {
                    self.running = false;
                }
            }
            Event::Resize(_, _) => self.resize()?,
            _ => {}
        }
        Ok(())
    }

    fn resize(&mut self) -> io::Result<()> {
        self.surface = TerminalSurface::stdout()?;
        let (width, height) = self.surface.pixel_size();
        self.renderer.resize(width, height);
        self.scene.active_camera_mut().set_viewport(width as u32, height as u32);
        log::debug!("Resized to {}x{} pixels", width, height);
        Ok(())
    }

    fn update(&mut self) {
        // Continuous slow rotation for demo effect
        if self.controls.spin {
            let y = self.controls.rotation.y + 1.5;
            self.controls.rotation = self.controls.rotation.with_y(y % 360.0);
        }
        if let Some(model) = self.scene.active_model_mut() {
            self.controls.apply(model);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        self.renderer.render(&self.scene);
        self.renderer.present(&mut self.surface)?;

        // Draw UI overlay
        let stats = self.renderer.last_frame();
        let status_row = self.surface.rows();
        let out = self.surface.writer();
        queue!(
            out,
            cursor::MoveTo(0, status_row),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Wireview | FPS: {:.1} | faces {} skipped {} | WASD/E/R=Rotate Arrows=Move +/-=Scale X=Axis B=Box Space=Spin Q=Quit",
                self.fps, stats.faces_drawn, stats.skipped_primitives
            )),
            ResetColor
        )?;

        out.flush()?;
        Ok(())
    }
}
