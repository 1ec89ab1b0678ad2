/// Terminal host for the isometric renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use iso3d_core::{
    render_pass, ClipStats, DisplayConfig, FillMode, MemoryDisplay, ProjectorConfig, ScreenPoint,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod logging;
pub mod renderer;
pub mod scene;

pub use logging::{init_logging, LoggingConfig};
pub use renderer::HalfBlockRenderer;
pub use scene::Scene;

/// Screen-space step for one key press
const PAN_STEP: i32 = 2;

const KEY_HELP: &str = "WASD/Arrows=Pan P=Projection F=Fill R=Reset Q=Quit";

/// Projection offset that centers the demo scene on a 144x168 display
pub fn default_offset() -> ScreenPoint {
    ScreenPoint::new(72, 50)
}

/// Main application struct for the terminal preview
pub struct TerminalApp {
    display: MemoryDisplay,
    bounds: DisplayConfig,
    projector: ProjectorConfig,
    scene: Scene,
    renderer: HalfBlockRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
    last_stats: ClipStats,
}

impl TerminalApp {
    pub fn new(scene: Scene) -> Self {
        Self {
            display: MemoryDisplay::pebble(),
            bounds: DisplayConfig::PEBBLE,
            projector: ProjectorConfig {
                enabled: true,
                offset: default_offset(),
            },
            scene,
            renderer: HalfBlockRenderer::new(0, 1),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            last_stats: ClipStats::default(),
        }
    }

    pub fn projector(&self) -> ProjectorConfig {
        self.projector
    }

    pub fn display(&self) -> &MemoryDisplay {
        &self.display
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide
        )?;

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

            while event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            self.scene.tick();
            self.render_frame()?;
            self.present()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    /// Apply one key press to the app state
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let offset = &mut self.projector.offset;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('w') | KeyCode::Up => offset.y -= PAN_STEP,
            KeyCode::Char('s') | KeyCode::Down => offset.y += PAN_STEP,
            KeyCode::Char('a') | KeyCode::Left => offset.x -= PAN_STEP,
            KeyCode::Char('d') | KeyCode::Right => offset.x += PAN_STEP,
            KeyCode::Char('r') => *offset = default_offset(),
            KeyCode::Char('p') => self.projector.enabled = !self.projector.enabled,
            KeyCode::Char('f') => {
                self.scene.toggle_fill_mode();
                log::info!("fill mode: {:?}", self.scene.fill_mode());
            }
            _ => {}
        }
    }

    /// Draw the scene into the in-memory framebuffer
    pub fn render_frame(&mut self) -> io::Result<()> {
        self.display.clear(iso3d_core::Color::BLACK);

        let scene = &self.scene;
        self.last_stats = render_pass(&mut self.display, self.projector, self.bounds, |r| {
            scene.draw(r);
            r.stats()
        })
        .map_err(io::Error::other)?;
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        self.renderer.draw(&self.display, &mut stdout)?;

        let mode = match self.scene.fill_mode() {
            FillMode::Full => "full",
            FillMode::FastSidesOnly => "fast",
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "iso3d | FPS: {:.1} | px: {} clipped: {} | fill: {} | {}",
                self.fps, self.last_stats.written, self.last_stats.clipped, mode, KEY_HELP
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
