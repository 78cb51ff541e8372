use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{ColorImage, TextureHandle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use terrain_core::{PixelBuffer, render, render_from_entropy};

// Viewer settings; the core itself only ever sees width, height and an rng
struct ViewerSettings {
    width: i64,
    height: i64,
    // reuse `seed` for every render instead of fresh entropy
    fixed_seed: bool,
    seed: u64,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 2000,
            fixed_seed: false,
            seed: 2025,
        }
    }
}

struct TerrainApp {
    settings: ViewerSettings,

    // generated texture
    terrain_texture: Option<TextureHandle>,
    // size of the texture currently shown
    shown_size: [usize; 2],

    status_message: String,

    // the first frame triggers one render, later ones wait for the button
    rendered_once: bool,
}

impl Default for TerrainApp {
    fn default() -> Self {
        Self {
            settings: ViewerSettings::default(),
            terrain_texture: None,
            shown_size: [0, 0],
            status_message: String::new(),
            rendered_once: false,
        }
    }
}

impl TerrainApp {
    fn render_terrain(&mut self, ctx: &egui::Context) {
        let start = std::time::Instant::now();
        let result = if self.settings.fixed_seed {
            let mut rng = StdRng::seed_from_u64(self.settings.seed);
            render(self.settings.width, self.settings.height, &mut rng)
        } else {
            render_from_entropy(self.settings.width, self.settings.height)
        };

        match result {
            Ok(buf) => {
                self.show(ctx, &buf);
                let ms = start.elapsed().as_secs_f32() * 1000.0;
                self.status_message = if self.settings.fixed_seed {
                    format!("Rendered in {:.2} ms (seed {})", ms, self.settings.seed)
                } else {
                    format!("Rendered in {:.2} ms", ms)
                };
            }
            Err(e) => {
                log::warn!("render rejected: {}", e);
                self.status_message = format!("Cannot render: {}", e);
            }
        }
        ctx.request_repaint();
    }

    fn show(&mut self, ctx: &egui::Context, buf: &PixelBuffer) {
        let size = [buf.width(), buf.height()];
        let color_image = ColorImage::from_rgb(size, buf.as_raw());
        self.terrain_texture =
            Some(ctx.load_texture("terrain", color_image, egui::TextureOptions::NEAREST));
        self.shown_size = size;
    }
}

impl App for TerrainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if !self.rendered_once {
            self.rendered_once = true;
            self.render_terrain(ctx);
        }

        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Terrain Canvas");
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Width");
                ui.add(egui::DragValue::new(&mut self.settings.width).range(0..=8192));
            });
            ui.horizontal(|ui| {
                ui.label("Height");
                ui.add(egui::DragValue::new(&mut self.settings.height).range(0..=8192));
            });

            ui.checkbox(&mut self.settings.fixed_seed, "Fixed seed");
            ui.add_enabled(
                self.settings.fixed_seed,
                egui::DragValue::new(&mut self.settings.seed).speed(1.0),
            );

            ui.separator();

            if ui.button("Render").clicked() {
                self.render_terrain(ctx);
            }

            ui.separator();
            ui.label(&self.status_message);
        });

        // central display
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.terrain_texture {
                let [w, h] = self.shown_size;
                let available = ui.available_size();
                // keep the aspect ratio of the rendered buffer
                let scale = (available.x / w as f32).min(available.y / h as f32);
                ui.image((tex.id(), egui::vec2(w as f32 * scale, h as f32 * scale)));
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Press “Render” to generate terrain");
                });
            }
        });
    }
}

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    run_native(
        "Terrain Canvas",
        opts,
        Box::new(|_cc| Ok(Box::new(TerrainApp::default()))),
    )
}
