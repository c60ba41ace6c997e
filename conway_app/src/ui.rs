// ui.rs - egui front end: controls, board texture and click-to-toggle

use std::time::{Duration, Instant};

use conway::{
    Color, ConfigError, Palette, Rule, Simulator, SimulatorConfig, TickOutcome, CELL_SIZE, PATTERNS,
};
use eframe::egui;
use egui::{Color32, Rect, TextureOptions};

use crate::canvas::PixelCanvas;

const LIVE_COLOR: Color = Color::rgb(0, 200, 0);
const DEAD_COLOR: Color = Color::rgb(40, 40, 40);

pub struct LifeApp {
    simulator: Simulator<PixelCanvas>,
    size: usize,
    update_interval: Duration,
    rule: Rule,
    random_colors: bool,
    selected_pattern: usize,
    texture: Option<egui::TextureHandle>,
}

impl LifeApp {
    /// Builds the simulator and starts it right away.
    pub fn new(size: usize, update_interval: Duration, now: Instant) -> Result<Self, ConfigError> {
        let mut simulator = Self::build(size, update_interval, Rule::Standard, false)?;
        simulator.start(now);
        Ok(Self {
            simulator,
            size,
            update_interval,
            rule: Rule::Standard,
            random_colors: false,
            selected_pattern: 0,
            texture: None,
        })
    }

    fn build(
        size: usize,
        update_interval: Duration,
        rule: Rule,
        random_colors: bool,
    ) -> Result<Simulator<PixelCanvas>, ConfigError> {
        let pixels = size * CELL_SIZE as usize;
        let palette = if random_colors {
            Palette::random_alive(DEAD_COLOR)
        } else {
            Palette::fixed(LIVE_COLOR, DEAD_COLOR)
        };
        let config = SimulatorConfig::new(size, update_interval)
            .with_rule(rule)
            .with_palette(palette);
        Simulator::new(PixelCanvas::new(pixels, pixels), config)
    }

    // Rule and palette are fixed per simulator, so changing them means a new one.
    fn rebuild(&mut self, now: Instant) {
        match Self::build(self.size, self.update_interval, self.rule, self.random_colors) {
            Ok(mut simulator) => {
                simulator.start(now);
                self.simulator = simulator;
                self.texture = None;
            }
            Err(err) => log::error!("could not rebuild simulator: {err}"),
        }
    }

    fn upload_board(&mut self, ctx: &egui::Context) {
        let canvas = self.simulator.surface_mut();
        if !canvas.take_dirty() && self.texture.is_some() {
            return;
        }
        let image = canvas.image().clone();
        if let Some(texture) = self.texture.as_mut() {
            texture.set(image, TextureOptions::NEAREST);
        } else {
            self.texture = Some(ctx.load_texture("board", image, TextureOptions::NEAREST));
        }
    }

    fn show_board(&mut self, ui: &mut egui::Ui) {
        self.upload_board(ui.ctx());
        let Some(texture_id) = self.texture.as_ref().map(|t| t.id()) else {
            return;
        };

        let side = self.size as f32 * CELL_SIZE;
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::click());
        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture_id, response.rect, uv, Color32::WHITE);

        // Cells can only be toggled while paused
        if !self.simulator.is_running() && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - response.rect.min;
                let (row, col) = ((local.y / CELL_SIZE) as usize, (local.x / CELL_SIZE) as usize);
                if row < self.size && col < self.size {
                    self.simulator.toggle_cell(row, col);
                }
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if let Some(TickOutcome::Reseeded) = self.simulator.poll(now) {
            log::debug!("board died out, reseeded");
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Toroidal Game of Life");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("🎲 Start").clicked() {
                    self.simulator.start(now);
                }

                let running = self.simulator.is_running();
                let button_text = if running { "⏸ Pause" } else { "▶ Resume" };
                if ui.button(button_text).clicked() {
                    if running {
                        self.simulator.stop();
                    } else {
                        self.simulator.resume(now);
                    }
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.simulator.stop();
                    self.simulator.load_pattern(&PATTERNS[self.selected_pattern]);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.simulator.generation()));
            });

            ui.separator();

            // Rule and colors
            ui.horizontal(|ui| {
                let mut rule = self.rule;
                ui.label("Rule:");
                egui::ComboBox::from_id_source("rule_selector")
                    .selected_text(rule.name())
                    .show_ui(ui, |ui| {
                        for candidate in Rule::ALL {
                            ui.selectable_value(&mut rule, candidate, candidate.name());
                        }
                    });

                let mut random_colors = self.random_colors;
                ui.checkbox(&mut random_colors, "Random live color");

                if rule != self.rule || random_colors != self.random_colors {
                    self.rule = rule;
                    self.random_colors = random_colors;
                    self.rebuild(now);
                }
            });

            ui.separator();

            ui.label("The board wraps at every edge. Pause to toggle cells by clicking.");

            ui.separator();

            self.show_board(ui);

            ui.separator();

            let total = self.size * self.size;
            let live_cells = self.simulator.alive_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Wake up again in time for the next generation
        if let Some(wait) = self.simulator.time_until_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
