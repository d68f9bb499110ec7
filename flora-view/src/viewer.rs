//! Interactive flora garden built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a [`SceneState`] and
//! implements [`eframe::App`] to grow, color and draw the plants, and to
//! route clicks, keys and the season slider into the scene.

use eframe::App;
use flora_core::{
    config::SceneConfig,
    scene::SceneState,
    season::{Palette, Rgb},
    seed::ClockSeed,
    turtle::DrawCommand,
};
use glam::Vec2;
use rand::{Rng, rng};

/// Random ground speckles drawn per frame.
const SPECKLES: usize = 50;

/// Keys the viewer reacts to.
const KEYS: [egui::Key; 6] = [
    egui::Key::C,
    egui::Key::R,
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
];

/// Main application state for the flora garden.
///
/// The per-frame update is:
/// 1. Handle the season slider, buttons, keys and clicks.
/// 2. Grow every plant by one tick.
/// 3. Paint sky, ground, plants and the help overlay.
///
/// ### Fields
/// - `scene` - Live plants and season fraction.
/// - `seeds` - Wall-clock seed source for new plants.
/// - `rng` - Random generator for the ground speckles.
/// - `canvas` - Size of the drawing area seen in the last frame.
/// - `populated` - Whether the initial population has been planted; it
///   needs a known canvas size, so it happens on the first frame.
pub struct Viewer {
    scene: SceneState,
    seeds: ClockSeed,
    rng: rand::rngs::ThreadRng,
    canvas: Vec2,
    populated: bool,
}

impl Viewer {
    /// Creates a viewer with an empty scene using `config`.
    pub fn new(config: SceneConfig) -> Self {
        Self {
            scene: SceneState::new(config),
            seeds: ClockSeed,
            rng: rng(),
            canvas: Vec2::new(800.0, 600.0),
            populated: false,
        }
    }

    /// Replaces all plants with a fresh initial population.
    fn reset(&mut self) {
        self.scene.reset(self.canvas, &mut self.seeds);
        self.populated = true;
    }

    fn clear(&mut self) {
        self.scene.clear();
    }

    /// Applies a key press to the scene.
    ///
    /// `C` clears, `R` resets and `1`-`4` jump to the season presets.
    ///
    /// ### Returns
    /// `true` if the key was handled.
    fn handle_key(&mut self, key: egui::Key) -> bool {
        match key {
            egui::Key::C => self.clear(),
            egui::Key::R => self.reset(),
            egui::Key::Num1 => return self.scene.apply_preset(0),
            egui::Key::Num2 => return self.scene.apply_preset(1),
            egui::Key::Num3 => return self.scene.apply_preset(2),
            egui::Key::Num4 => return self.scene.apply_preset(3),
            _ => return false,
        }
        true
    }

    /// Plants at a canvas-space click position if it lies in the planting band.
    fn handle_click(&mut self, pos: Vec2) -> bool {
        self.scene.plant_at_click(pos, self.canvas, &mut self.seeds)
    }

    /// Converts a canvas-space position to screen-space.
    fn to_screen(p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
    }

    /// Converts a screen-space position to canvas-space.
    fn to_canvas(p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        Vec2::new(p.x - rect.min.x, p.y - rect.min.y)
    }

    fn color(c: Rgb) -> egui::Color32 {
        egui::Color32::from_rgb(c.r, c.g, c.b)
    }

    /// Sky gradient from the palette background to its darkened tone.
    fn paint_sky(&self, painter: &egui::Painter, rect: egui::Rect, palette: &Palette) {
        let top = palette.background;
        let bottom = top.darken_gradient();
        let sky = self.scene.ground_level(self.canvas).max(0.0);

        let rows = sky as usize;
        for row in 0..rows {
            let y = row as f32;
            let c = Rgb::lerp(top, bottom, y / sky);
            painter.line_segment(
                [
                    Self::to_screen(Vec2::new(0.0, y), rect),
                    Self::to_screen(Vec2::new(self.canvas.x, y), rect),
                ],
                egui::Stroke::new(1.0, Self::color(c)),
            );
        }
    }

    fn paint_ground(&mut self, painter: &egui::Painter, rect: egui::Rect, palette: &Palette) {
        let ground_top = self.scene.ground_level(self.canvas);
        let height = self.scene.config().ground_height;

        let ground = egui::Rect::from_min_size(
            Self::to_screen(Vec2::new(0.0, ground_top), rect),
            egui::vec2(self.canvas.x, height),
        );
        painter.rect_filled(ground, 0.0, Self::color(palette.ground));

        if self.canvas.x <= 0.0 || height <= 0.0 {
            return;
        }
        let speckle = palette.ground.scale(0.9);
        let fill = egui::Color32::from_rgba_unmultiplied(speckle.r, speckle.g, speckle.b, 100);
        for _ in 0..SPECKLES {
            let x = self.rng.random_range(0.0..self.canvas.x);
            let y = ground_top + self.rng.random_range(0.0..height);
            let size = self.rng.random_range(2.0..5.0_f32);
            painter.add(egui::Shape::ellipse_filled(
                Self::to_screen(Vec2::new(x, y), rect),
                Self::speckle_radii(size),
                fill,
            ));
        }
    }

    /// Ellipse radii of a speckle `size` wide and half as tall.
    fn speckle_radii(size: f32) -> egui::Vec2 {
        egui::vec2(size * 0.5, size * 0.25)
    }

    fn paint_plants(painter: &egui::Painter, rect: egui::Rect, commands: &[DrawCommand]) {
        for cmd in commands {
            painter.line_segment(
                [Self::to_screen(cmd.from, rect), Self::to_screen(cmd.to, rect)],
                egui::Stroke::new(cmd.thickness, Self::color(cmd.color)),
            );
        }
    }

    fn paint_help(painter: &egui::Painter, rect: egui::Rect) {
        let panel = egui::Rect::from_min_size(
            rect.min + egui::vec2(10.0, 10.0),
            egui::vec2(320.0, 50.0),
        );
        painter.rect_filled(panel, 8.0, egui::Color32::from_rgba_unmultiplied(255, 255, 255, 150));

        let font = egui::FontId::proportional(14.0);
        let ink = egui::Color32::from_rgb(60, 60, 60);
        painter.text(
            rect.min + egui::vec2(20.0, 20.0),
            egui::Align2::LEFT_TOP,
            "🌱 Click anywhere to plant new flora",
            font.clone(),
            ink,
        );
        painter.text(
            rect.min + egui::vec2(20.0, 40.0),
            egui::Align2::LEFT_TOP,
            "🎨 Use the slider below to adjust seasons",
            font,
            ink,
        );
    }

    /// Builds the top panel (season slider, clear and reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut season = self.scene.season();
                if ui
                    .add(egui::Slider::new(&mut season, 0.0..=1.0).text("Season"))
                    .changed()
                {
                    self.scene.set_season(season);
                }
                ui.label(self.scene.season_name());

                ui.separator();
                if ui.button("Clear").clicked() {
                    self.clear();
                }
                if ui.button("Reset").clicked() {
                    self.reset();
                }
            });
        });
    }

    /// Builds the bottom status bar (plant counts, season fraction).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("season = {:.2}", self.scene.season()));
                ui.separator();
                ui.label(format!(
                    "plants = {} / {}",
                    self.scene.len(),
                    self.scene.config().max_plants
                ));
                ui.label(format!("grown = {}", self.scene.fully_grown()));
            });
        });
    }

    /// Builds the central canvas where the garden is grown and drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::click());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                self.canvas = Vec2::new(rect.width(), rect.height());
                if !self.populated {
                    self.reset();
                }

                if response.clicked()
                    && let Some(pos) = response.interact_pointer_pos()
                {
                    self.handle_click(Self::to_canvas(pos, rect));
                }

                let commands = self.scene.frame();
                let palette = self.scene.palette();

                self.paint_sky(&painter, rect, &palette);
                self.paint_ground(&painter, rect, &palette);
                Self::paint_plants(&painter, rect, &commands);
                Self::paint_help(&painter, rect);

                ctx.request_repaint();
            });
    }
}

impl App for Viewer {
    /// eframe callback that handles input and builds all panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let pressed: Vec<egui::Key> =
            ctx.input(|i| KEYS.into_iter().filter(|&k| i.key_pressed(k)).collect());
        for key in pressed {
            self.handle_key(key);
        }

        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(40.0, 30.0), egui::vec2(800.0, 600.0))
    }

    fn viewer() -> Viewer {
        let mut viewer = Viewer::new(SceneConfig::default());
        viewer.canvas = Vec2::new(800.0, 600.0);
        viewer
    }

    #[test]
    fn canvas_to_screen_and_back_is_roundtrip() {
        let rect = test_rect();
        for p in [Vec2::ZERO, Vec2::new(10.0, 500.0), Vec2::new(799.5, 0.25)] {
            let back = Viewer::to_canvas(Viewer::to_screen(p, rect), rect);
            assert!((back - p).length() < 1e-4, "p={p:?}, back={back:?}");
        }
    }

    #[test]
    fn speckles_are_twice_as_wide_as_tall() {
        let radii = Viewer::speckle_radii(4.0);
        assert_eq!(radii, egui::vec2(2.0, 1.0));
    }

    #[test]
    fn reset_populates_initial_plants() {
        let mut viewer = viewer();
        assert!(viewer.scene.is_empty());

        viewer.reset();

        assert!(viewer.populated);
        assert_eq!(viewer.scene.len(), 5);
        for p in viewer.scene.plants() {
            assert_eq!(p.pos().y, 520.0);
        }
    }

    #[test]
    fn keys_clear_reset_and_pick_seasons() {
        let mut viewer = viewer();

        assert!(viewer.handle_key(egui::Key::R));
        assert_eq!(viewer.scene.len(), 5);

        assert!(viewer.handle_key(egui::Key::C));
        assert!(viewer.scene.is_empty());

        assert!(viewer.handle_key(egui::Key::Num1));
        assert_eq!(viewer.scene.season(), 0.0);
        assert!(viewer.handle_key(egui::Key::Num4));
        assert_eq!(viewer.scene.season(), 1.0);

        assert!(!viewer.handle_key(egui::Key::Q));
    }

    #[test]
    fn clicks_plant_only_inside_band() {
        let mut viewer = viewer();

        assert!(!viewer.handle_click(Vec2::new(100.0, 20.0)));
        assert!(!viewer.handle_click(Vec2::new(100.0, 590.0)));
        assert!(viewer.handle_click(Vec2::new(100.0, 300.0)));

        assert_eq!(viewer.scene.len(), 1);
        assert_eq!(viewer.scene.plants()[0].pos(), Vec2::new(100.0, 520.0));
    }

    #[test]
    fn clicks_respect_plant_cap() {
        let mut viewer = viewer();
        for i in 0..40 {
            viewer.handle_click(Vec2::new(i as f32 * 10.0, 300.0));
        }
        assert_eq!(viewer.scene.len(), viewer.scene.config().max_plants);
        assert_eq!(viewer.scene.plants()[0].pos().x, 100.0);
    }
}
