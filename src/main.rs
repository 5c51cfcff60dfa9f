//! Bézier Spline Editor.
//!
//! Nodes per Klick setzen, Handles werden automatisch gespiegelt erzeugt;
//! Nodes und Handles lassen sich ziehen. Rendering mit egui.

use bezier_spline_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions, LaunchArgs};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bezier Spline Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let launch = LaunchArgs::parse(std::env::args().skip(1))?;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(launch.inner_size())
                .with_title("Bezier Spline Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier Spline Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
        .map_err(|e| anyhow::anyhow!("Fenster konnte nicht gestartet werden: {e}"))
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(editor_options);
        state.options_path = config_path;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        if has_meaningful_events || self.state.grab.is_active() {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(ui, &response));

                let scene = self.controller.build_render_scene(&self.state);
                render::paint_scene(ui.painter(), rect, &scene);

                if scene.is_empty() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Klicken, um Nodes zu setzen",
                        egui::FontId::proportional(20.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
