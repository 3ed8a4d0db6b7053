//! Game of Life viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state (the
//! cell grid, its scratch double buffer, timing) and implements
//! [`eframe::App`] to poll input, draw live cells, and advance
//! generations on a fixed delay.

use eframe::App;
use egui::Color32;
use life_core::grid::Grid;
use life_core::patterns::{self, GLIDER};
use life_core::rules;
use life_core::types::Coord;
use log::{debug, info};

/// Window width in pixels.
pub const WINDOW_WIDTH: u32 = 1820;
/// Window height in pixels.
pub const WINDOW_HEIGHT: u32 = 980;

/// Side length of one cell square, in pixels.
const CELL_SIZE: u32 = 5;

/// Accumulated frame time between generations, in seconds.
const STEP_DELAY: f32 = 0.05;

/// Grid dimensions, derived from the window resolution.
const GRID_WIDTH: usize = (WINDOW_WIDTH / CELL_SIZE) as usize;
const GRID_HEIGHT: usize = (WINDOW_HEIGHT / CELL_SIZE) as usize;

const LIVE_COLOR: Color32 = Color32::from_rgb(0, 121, 241);
const BACKGROUND: Color32 = Color32::BLACK;

/// Main application state for the Game of Life window.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`Grid`] plus a same-size scratch buffer the
///   next generation is computed into before the two are swapped.
/// - Frame timing (accumulated frame time against a fixed step delay).
/// - eframe/egui callbacks for drawing and keyboard input.
///
/// The typical per-frame update is:
/// 1. Poll input: held Space reseeds randomly, held J re-stamps the
///    glider, P toggles pause, N advances one generation while paused.
/// 2. Paint live cells as filled squares, grid centered in the panel.
/// 3. If running, add the frame time to the accumulator and advance a
///    generation once it exceeds [`STEP_DELAY`].
pub struct Viewer {
    grid: Grid,
    scratch: Grid,

    rng: rand::rngs::ThreadRng,

    running: bool,
    elapsed: f32,
    generation: u64,
}

impl Viewer {
    /// Creates a viewer with the glider stamped on a fresh grid.
    ///
    /// Grid dimensions come from the fixed window resolution divided by
    /// the cell size and stay constant for the life of the app.
    pub fn new() -> Self {
        let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
        let scratch = Grid::new(GRID_WIDTH, GRID_HEIGHT);
        patterns::stamp_centered(&mut grid, &GLIDER);

        info!(
            "grid {}x{} cells at {} px per cell",
            GRID_WIDTH, GRID_HEIGHT, CELL_SIZE
        );

        Self {
            grid,
            scratch,
            rng: rand::rng(),
            running: true,
            elapsed: 0.0,
            generation: 0,
        }
    }

    /// Re-stamps the fixed glider pattern and restarts the generation count.
    fn reset(&mut self) {
        patterns::stamp_centered(&mut self.grid, &GLIDER);
        self.generation = 0;
    }

    /// Reseeds every cell randomly and restarts the generation count.
    fn reseed(&mut self) {
        patterns::randomize(&mut self.grid, &mut self.rng);
        self.generation = 0;
    }

    /// Advances the simulation by exactly one generation.
    ///
    /// The next generation is computed into the scratch buffer from the
    /// current snapshot, then the buffers are swapped.
    fn step_once(&mut self) {
        rules::step_into(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
    }

    /// Feeds one frame's duration into the step timer.
    ///
    /// Steps a single generation and resets the accumulator once the
    /// accumulated time exceeds [`STEP_DELAY`]; otherwise just
    /// accumulates.
    fn advance_timer(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed > STEP_DELAY {
            self.step_once();
            self.elapsed = 0.0;
        }
    }

    /// Polls the keyboard and applies grid mutations.
    ///
    /// Space and J act every frame while held; pause and single-step
    /// react to key presses only.
    fn handle_input(&mut self, ctx: &egui::Context) {
        let (reseed, reset, toggle_pause, step_one) = ctx.input(|i| {
            (
                i.key_down(egui::Key::Space),
                i.key_down(egui::Key::J),
                i.key_pressed(egui::Key::P),
                i.key_pressed(egui::Key::N),
            )
        });

        if reseed {
            self.reseed();
        }
        if reset {
            self.reset();
        }
        if toggle_pause {
            self.running = !self.running;
            debug!(
                "simulation {}",
                if self.running { "resumed" } else { "paused" }
            );
        }
        if step_one && !self.running {
            self.step_once();
        }
    }

    /// Top-left corner of the cell lattice, centering the grid in `rect`.
    fn grid_origin(rect: egui::Rect) -> egui::Pos2 {
        let grid_w = (GRID_WIDTH as u32 * CELL_SIZE) as f32;
        let grid_h = (GRID_HEIGHT as u32 * CELL_SIZE) as f32;
        egui::pos2(
            rect.center().x - grid_w / 2.0,
            rect.center().y - grid_h / 2.0,
        )
    }

    /// Screen rectangle covered by the cell at `(x, y)`.
    fn cell_rect(origin: egui::Pos2, x: Coord, y: Coord) -> egui::Rect {
        let size = CELL_SIZE as f32;
        egui::Rect::from_min_size(
            egui::pos2(origin.x + x as f32 * size, origin.y + y as f32 * size),
            egui::vec2(size, size),
        )
    }

    /// Builds the central panel: paints the grid and drives the timer.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter_at(rect);

                // Draw live cells only; the frame fill is the background.
                let origin = Self::grid_origin(rect);
                for y in 0..self.grid.height() as Coord {
                    for x in 0..self.grid.width() as Coord {
                        if self.grid.get(x, y) {
                            painter.rect_filled(
                                Self::cell_rect(origin, x, y),
                                egui::CornerRadius::ZERO,
                                LIVE_COLOR,
                            );
                        }
                    }
                }

                if self.running {
                    let dt = ctx.input(|i| i.stable_dt);
                    self.advance_timer(dt);
                }
            });
    }

    /// Builds the small status overlay (generation, live cells, pause).
    fn ui_status_overlay(&self, ctx: &egui::Context) {
        egui::Area::new("status".into())
            .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(10.0, -10.0))
            .movable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(Color32::from_rgba_unmultiplied(0, 0, 0, 128))
                    .inner_margin(egui::Margin::same(6))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(format!("generation = {}", self.generation));
                            ui.separator();
                            ui.label(format!("alive = {}", self.grid.alive_count()));
                            if !self.running {
                                ui.separator();
                                ui.label("paused");
                            }
                        });
                    });
            });
    }
}

impl App for Viewer {
    /// eframe callback that runs the frame loop.
    ///
    /// Polls input, paints the current generation, and requests another
    /// repaint so the simulation keeps animating at display rate.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.ui_central_panel(ctx);
        self.ui_status_overlay(ctx);

        // Repaint continuously; held keys and the step timer both need
        // frames even when no input event arrives.
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_rect() -> egui::Rect {
        egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
        )
    }

    #[test]
    fn new_viewer_derives_grid_from_window_resolution() {
        let viewer = Viewer::new();

        assert_eq!(viewer.grid.width(), (WINDOW_WIDTH / CELL_SIZE) as usize);
        assert_eq!(viewer.grid.height(), (WINDOW_HEIGHT / CELL_SIZE) as usize);

        // Starts with the 5-cell glider, running, at generation zero.
        assert_eq!(viewer.grid.alive_count(), GLIDER.cells.len());
        assert_eq!(viewer.generation, 0);
        assert!(viewer.running);
    }

    #[test]
    fn reset_restamps_the_glider_and_zeroes_the_generation() {
        let mut viewer = Viewer::new();
        viewer.reseed();
        viewer.step_once();
        assert_eq!(viewer.generation, 1);

        viewer.reset();

        assert_eq!(viewer.grid.alive_count(), GLIDER.cells.len());
        assert_eq!(viewer.generation, 0);
    }

    #[test]
    fn reseed_fills_about_half_the_grid() {
        let mut viewer = Viewer::new();

        viewer.reseed();

        // Each of the ~71k cells is an independent coin flip; straying
        // outside these loose bounds is vanishingly unlikely.
        let n = viewer.grid.width() * viewer.grid.height();
        let alive = viewer.grid.alive_count();
        assert!(alive > n * 3 / 10, "alive = {alive} of {n}");
        assert!(alive < n * 7 / 10, "alive = {alive} of {n}");
        assert_eq!(viewer.generation, 0);
    }

    #[test]
    fn step_once_advances_exactly_one_generation() {
        let mut viewer = Viewer::new();
        // A lone cell far from the glider dies in one step and must not
        // leak into the next generation through the scratch buffer.
        viewer.grid.set(2, 2, true);

        viewer.step_once();

        assert_eq!(viewer.generation, 1);
        assert!(!viewer.grid.get(2, 2));
    }

    #[test]
    fn advance_timer_steps_only_after_the_delay_is_exceeded() {
        let mut viewer = Viewer::new();

        // Below the threshold: nothing happens yet.
        viewer.advance_timer(STEP_DELAY / 2.0);
        assert_eq!(viewer.generation, 0);

        // Crossing it: exactly one step, accumulator reset.
        viewer.advance_timer(STEP_DELAY);
        assert_eq!(viewer.generation, 1);
        assert_eq!(viewer.elapsed, 0.0);

        // A fresh accumulation starts from zero again.
        viewer.advance_timer(STEP_DELAY / 2.0);
        assert_eq!(viewer.generation, 1);
    }

    #[test]
    fn grid_is_centered_on_the_pixel_lattice() {
        // The grid covers the window exactly, so the origin is the
        // window corner and cells sit on multiples of the cell size.
        let origin = Viewer::grid_origin(window_rect());
        assert_eq!(origin, egui::Pos2::ZERO);

        let first = Viewer::cell_rect(origin, 0, 0);
        assert_eq!(first.min, egui::pos2(0.0, 0.0));
        assert_eq!(first.size(), egui::vec2(CELL_SIZE as f32, CELL_SIZE as f32));

        let other = Viewer::cell_rect(origin, 3, 2);
        assert_eq!(
            other.min,
            egui::pos2(3.0 * CELL_SIZE as f32, 2.0 * CELL_SIZE as f32)
        );
    }

    #[test]
    fn grid_origin_centers_inside_a_larger_rect() {
        // 10 extra pixels on each axis leave a 5 px margin on every side.
        let rect = egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(WINDOW_WIDTH as f32 + 10.0, WINDOW_HEIGHT as f32 + 10.0),
        );

        let origin = Viewer::grid_origin(rect);

        assert_eq!(origin, egui::pos2(5.0, 5.0));
    }
}
