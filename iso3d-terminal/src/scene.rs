/// Demo scene: a small isometric city block
use iso3d_core::{Color, FillMode, GraphicsContext, Renderer, Size, Vec3};

/// Edge length of the ground plate in world units
const GROUND: i32 = 60;
const TILE: i32 = 10;

/// A solid block with a highlighted outline
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub origin: Vec3,
    pub size: Size,
    pub height: i32,
    pub fill: Color,
    pub outline: Color,
}

impl Block {
    /// Sort key for back-to-front drawing; larger x + y is closer to the viewer
    fn depth(&self) -> i32 {
        self.origin.x + self.origin.y
    }
}

/// Animated scene state
pub struct Scene {
    blocks: Vec<Block>,
    fill_mode: FillMode,
    phase: u32,
}

impl Scene {
    pub fn new() -> Self {
        let mut blocks = vec![
            Block {
                origin: Vec3::new(35, 5, 0),
                size: Size::new(15, 15),
                height: 30,
                fill: Color::DARK_GRAY,
                outline: Color::WHITE,
            },
            Block {
                origin: Vec3::new(5, 30, 0),
                size: Size::new(20, 10),
                height: 12,
                fill: Color::from_rgb(2, 1, 0),
                outline: Color::YELLOW,
            },
            Block {
                origin: Vec3::new(5, 5, 0),
                size: Size::new(20, 15),
                height: 20,
                fill: Color::BLUE,
                outline: Color::CYAN,
            },
        ];
        blocks.sort_by_key(Block::depth);

        Self {
            blocks,
            fill_mode: FillMode::Full,
            phase: 0,
        }
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub fn toggle_fill_mode(&mut self) {
        self.fill_mode = self.fill_mode.toggled();
    }

    pub fn tick(&mut self) {
        self.phase = self.phase.wrapping_add(1);
    }

    /// Height of the animated wireframe tower, bouncing between 0 and 24
    pub fn tower_height(&self) -> i32 {
        let step = (self.phase / 2 % 48) as i32;
        if step < 24 {
            step
        } else {
            48 - step
        }
    }

    pub fn draw<C: GraphicsContext>(&self, renderer: &mut Renderer<'_, C>) {
        // Ground plate and tile grid
        renderer.fill_rect(Vec3::new(0, 0, 0), Size::new(GROUND, GROUND), Color::GREEN);
        let grid = Color::from_rgb(0, 1, 0);
        for x in (0..GROUND).step_by(TILE as usize) {
            for y in (0..GROUND).step_by(TILE as usize) {
                renderer.draw_rect(Vec3::new(x, y, 0), Size::new(TILE, TILE), grid);
            }
        }

        for block in &self.blocks {
            renderer.fill_box(block.origin, block.size, block.height, self.fill_mode, block.fill);
            renderer.draw_box(block.origin, block.size, block.height, block.outline);
        }

        renderer.draw_box(
            Vec3::new(40, 40, 0),
            Size::new(10, 10),
            self.tower_height(),
            Color::RED,
        );

        // Beacon on top of the tallest block
        let top = self.blocks.iter().max_by_key(|b| b.height);
        if let Some(block) = top {
            let beacon = Vec3::new(
                block.origin.x + block.size.w / 2,
                block.origin.y + block.size.h / 2,
                block.height + 4 + (self.phase / 8 % 2) as i32,
            );
            let _ = renderer.draw_pixel(beacon, Color::YELLOW);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
