use std::collections::{HashMap, VecDeque};

use eframe::egui::{self, Color32, Pos2, Sense, Shape, Stroke};
use egui_plot::{Line, Plot, PlotPoints};

use orbit_sandbox::error::RenderError;
use orbit_sandbox::math::{Position, Viewport};
use orbit_sandbox::scenario::presets;
use orbit_sandbox::sim::{EventSender, FrameLoop, Renderer, Simulation, Snapshot};
use orbit_sandbox::types::{RenderHandle, SpriteId};

const HISTORY_LEN: usize = 600;

fn main() -> eframe::Result {
    let _ = dotenvy::dotenv();
    orbit_sandbox::telemetry::init_tracing();

    let mut scenario = presets::earth_moon();
    // Body sprites start out loading; the palette below resolves them.
    for b in &mut scenario.bodies {
        b.handle = RenderHandle::Loading(b.handle.sprite());
    }
    let sim = match scenario.build() {
        Ok(sim) => sim,
        Err(e) => {
            tracing::error!(error = %e, "failed to build scenario");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 860.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Orbit Sandbox",
        options,
        Box::new(|_| Ok(Box::new(SandboxViz::new(sim)))),
    )
}

// ---------------------------------------------------------------------------
// Sprites: flat-coloured discs keyed by sprite id
// ---------------------------------------------------------------------------

struct Palette {
    colours: HashMap<SpriteId, Color32>,
}

impl Palette {
    fn load(sender: &EventSender) -> Self {
        let colours = HashMap::from([
            (presets::SATELLITE_SPRITE, Color32::WHITE),
            (presets::EARTH_SPRITE, Color32::from_rgb(0x3a, 0x7b, 0xd5)),
            (presets::MOON_SPRITE, Color32::from_rgb(0xc8, 0xc8, 0xc0)),
        ]);
        for id in colours.keys() {
            if *id != presets::SATELLITE_SPRITE {
                if let Err(e) = sender.asset_loaded(*id) {
                    tracing::warn!(error = %e, sprite = %id, "asset signal dropped");
                }
            }
        }
        Self { colours }
    }

    fn colour(&self, id: SpriteId) -> Option<Color32> {
        self.colours.get(&id).copied()
    }
}

struct PainterRenderer<'a> {
    painter: &'a egui::Painter,
    viewport: Viewport,
    origin: Pos2,
    palette: &'a Palette,
}

impl PainterRenderer<'_> {
    fn to_screen(&self, p: &Position) -> Pos2 {
        let s = self.viewport.to_screen(p);
        Pos2::new(self.origin.x + s.x as f32, self.origin.y + s.y as f32)
    }
}

impl Renderer for PainterRenderer<'_> {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), RenderError> {
        for guide in &snapshot.orbits {
            let c = self.to_screen(&guide.centre);
            let r = guide.radius as f32;
            let points: Vec<Pos2> = (0..=180)
                .map(|i| {
                    let a = i as f32 / 180.0 * std::f32::consts::TAU;
                    Pos2::new(c.x + r * a.cos(), c.y + r * a.sin())
                })
                .collect();
            self.painter.extend(Shape::dashed_line(
                &points,
                Stroke::new(1.0, Color32::from_gray(0x60)),
                5.0,
                15.0,
            ));
        }

        for b in &snapshot.bodies {
            let colour = self
                .palette
                .colour(b.sprite)
                .ok_or_else(|| RenderError(format!("no colour for {}", b.sprite)))?;
            self.painter.circle_filled(self.to_screen(&b.pos), b.radius as f32, colour);
        }

        for s in &snapshot.satellites {
            let colour = self.palette.colour(s.sprite).unwrap_or(Color32::WHITE);
            self.painter.circle_filled(self.to_screen(&s.pos), 2.0, colour);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App: one eframe update = one simulation frame
// ---------------------------------------------------------------------------

struct SandboxViz {
    sim: Simulation,
    sender: EventSender,
    frame_loop: FrameLoop,
    palette: Palette,
    press: Option<Position>,
    history: VecDeque<[f64; 2]>,
    paused: bool,
}

impl SandboxViz {
    fn new(sim: Simulation) -> Self {
        let sender = sim.sender();
        let palette = Palette::load(&sender);
        Self {
            sim,
            sender,
            frame_loop: FrameLoop::new(),
            palette,
            press: None,
            history: VecDeque::with_capacity(HISTORY_LEN),
            paused: false,
        }
    }
}

impl eframe::App for SandboxViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Orbit Sandbox");
                ui.separator();
                ui.label(format!("Satellites: {}", self.sim.satellite_count()));
                ui.label(format!("Tick: {}", self.sim.tick_count()));
                ui.separator();
                ui.checkbox(&mut self.paused, "Paused");
            });
            ui.label("Drag to launch a satellite: press at the start point, release in the direction of travel.");
        });

        egui::TopBottomPanel::bottom("count").show(ctx, |ui| {
            Plot::new("satellite_count")
                .height(140.0)
                .x_axis_label("Tick")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Live satellites", PlotPoints::from_iter(self.history.iter().copied())));
                });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::BLACK))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
                let rect = response.rect;
                let viewport = Viewport::new(rect.width() as f64, rect.height() as f64);
                let local = |p: Pos2| {
                    viewport.from_screen(&Position::new((p.x - rect.min.x) as f64, (p.y - rect.min.y) as f64))
                };

                if response.drag_started() {
                    self.press = response.interact_pointer_pos().map(local);
                }
                if response.drag_stopped() {
                    if let (Some(press), Some(release)) =
                        (self.press.take(), response.interact_pointer_pos().map(local))
                    {
                        if let Err(e) = self.sender.gesture(press, release) {
                            tracing::warn!(error = %e, "spawn request dropped");
                        }
                    }
                }

                let mut renderer = PainterRenderer {
                    painter: &painter,
                    viewport,
                    origin: rect.min,
                    palette: &self.palette,
                };
                if self.paused {
                    if let Err(e) = renderer.render(self.sim.snapshot()) {
                        tracing::warn!(error = %e, tick = self.sim.tick_count(), "frame dropped");
                    }
                } else {
                    self.frame_loop.frame(&mut self.sim, &mut renderer);
                }
            });

        if !self.paused {
            let tick = self.sim.tick_count();
            if self.history.back().map_or(true, |p| p[0] < tick as f64) {
                if self.history.len() == HISTORY_LEN {
                    self.history.pop_front();
                }
                self.history.push_back([tick as f64, self.sim.satellite_count() as f64]);
            }
            // Re-register for the next frame.
            ctx.request_repaint();
        }
    }
}
