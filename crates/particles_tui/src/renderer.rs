use crate::Tui;
use particles_core::Renderer;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};

const PARTICLE_SYMBOL: &str = "●";

/// Parses a display attribute (`"#rrggbb"`, `"red"`, ...) into a terminal color.
///
/// Anything unrecognised is drawn white.
pub fn parse_color(display_attribute: &str) -> Color {
    display_attribute.parse().unwrap_or(Color::White)
}

/// A filled square in world pixels, waiting to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub color: Color,
    pub x: i32,
    pub y: i32,
    pub size: u32,
}

/// Everything drawn since the last clear.
#[derive(Debug, Clone)]
pub struct Scene {
    pub world_width: f64,
    pub world_height: f64,
    pub background: Color,
    pub squares: Vec<Square>,
}

impl Scene {
    pub fn new(world_width: f64, world_height: f64) -> Self {
        Self {
            world_width,
            world_height,
            background: Color::Reset,
            squares: Vec::new(),
        }
    }

    /// Maps a world pixel span `[start, start + len)` onto `cells` terminal cells.
    fn cell_span(start: i32, len: u32, world: f64, cells: u16) -> (u16, u16) {
        if cells == 0 {
            return (0, 0);
        }
        let scale = f64::from(cells) / world;
        let max = f64::from(cells - 1);
        let first = (f64::from(start) * scale).floor().clamp(0.0, max) as u16;
        let last = ((f64::from(start) + f64::from(len.max(1)) - 1.0) * scale)
            .floor()
            .clamp(0.0, max) as u16;
        (first, last.max(first))
    }
}

impl Widget for &Scene {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" particles (q to quit) ")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        for y in inner.top()..inner.bottom() {
            for x in inner.left()..inner.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(self.background);
                }
            }
        }

        for square in &self.squares {
            let (x0, x1) = Scene::cell_span(square.x, square.size, self.world_width, inner.width);
            let (y0, y1) = Scene::cell_span(square.y, square.size, self.world_height, inner.height);
            for cy in y0..=y1 {
                for cx in x0..=x1 {
                    if let Some(cell) = buf.cell_mut((inner.x + cx, inner.y + cy)) {
                        cell.set_symbol(PARTICLE_SYMBOL);
                        cell.set_fg(square.color);
                    }
                }
            }
        }
    }
}

/// Draws the world onto the terminal, scaling world pixels to cells.
pub struct TerminalRenderer {
    tui: Tui,
    scene: Scene,
}

impl TerminalRenderer {
    pub fn new(tui: Tui, world_width: f64, world_height: f64) -> Self {
        Self {
            tui,
            scene: Scene::new(world_width, world_height),
        }
    }

    /// Restores the terminal.
    pub fn exit(mut self) -> anyhow::Result<()> {
        self.tui.exit()
    }
}

impl Renderer for TerminalRenderer {
    fn clear(&mut self, background: &str) {
        self.scene.background = parse_color(background);
        self.scene.squares.clear();
    }

    fn draw_square(&mut self, color: &str, x: i32, y: i32, size: u32) {
        self.scene.squares.push(Square {
            color: parse_color(color),
            x,
            y,
            size,
        });
    }

    fn present(&mut self) -> anyhow::Result<()> {
        let scene = &self.scene;
        self.tui.terminal.draw(|f| {
            f.render_widget(scene, f.area());
        })?;
        Ok(())
    }
}
