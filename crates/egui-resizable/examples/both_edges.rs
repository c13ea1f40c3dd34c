use egui::{Align2, Color32};
use egui_resizable::{ControlEdge, PanelOptions, ResizablePanel};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const SIDEBAR: &str = "sidebar";
const INSPECTOR: &str = "inspector";

fn init_log() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,egui_resizable=debug"));
    Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

struct App {
    sidebar_width: f32,
    inspector_width: f32,
    show_inspector: bool,
}

impl App {
    fn new() -> Self {
        Self {
            sidebar_width: 180.0,
            inspector_width: 160.0,
            show_inspector: true,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.show_inspector, "inspector");
                ui.label(format!(
                    "sidebar {:.0}px, inspector {:.0}px",
                    self.sidebar_width, self.inspector_width
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let options = PanelOptions::default().content_fill(ui.visuals().faint_bg_color);

            ui.columns(2, |columns| {
                let sidebar =
                    ResizablePanel::new(&mut self.sidebar_width, 400.0, ControlEdge::Right);
                match sidebar {
                    Ok(panel) => {
                        let response = panel
                            .id_salt(SIDEBAR)
                            .content_alignment(Align2::LEFT_TOP)
                            .options(options.clone())
                            .show(&mut columns[0], |ui| {
                                ui.heading("Sessions");
                                ui.separator();
                                ui.label("local");
                                ui.label("staging");
                            });
                        if response.response.changed() {
                            info!("sidebar resized to {}", self.sidebar_width);
                        }
                    }
                    Err(err) => error!("sidebar: {err}"),
                }

                let inspector_id = columns[1].make_persistent_id(egui::Id::new(INSPECTOR));
                if !self.show_inspector {
                    ResizablePanel::unmount(columns[1].ctx(), inspector_id);
                    return;
                }
                let inspector =
                    ResizablePanel::new(&mut self.inspector_width, 400.0, ControlEdge::Left);
                match inspector {
                    Ok(panel) => {
                        panel
                            .id_salt(INSPECTOR)
                            .options(options.handle_color(Color32::LIGHT_BLUE))
                            .show(&mut columns[1], |ui| ui.label("Inspector"));
                    }
                    Err(err) => error!("inspector: {err}"),
                }
            });
        });
    }
}

fn main() -> eframe::Result {
    init_log();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "both_edges",
        native_options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )
}
