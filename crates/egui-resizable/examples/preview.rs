use egui::{Align2, Color32, RichText};
use egui_resizable::{ControlEdge, ResizablePanel};
use std::io::stdout;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn init_log() {
    let env_filter = EnvFilter::new("egui_resizable=debug");
    let formatting_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(true)
        .with_line_number(true)
        .with_writer(stdout.with_max_level(Level::TRACE));

    Registry::default()
        .with(env_filter)
        .with(formatting_layer)
        .init();
}

struct App {
    control_width: f32,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let panel = ResizablePanel::new(&mut self.control_width, 550.0, ControlEdge::Left);
            let panel = match panel {
                Ok(panel) => panel.content_alignment(Align2::LEFT_TOP),
                Err(err) => {
                    ui.colored_label(Color32::RED, err.to_string());
                    return;
                }
            };

            panel.show(ui, |ui| {
                ui.add_space(8.0);
                for value in 0..15 {
                    ui.horizontal(|ui| {
                        ui.label("Value:");
                        ui.label(RichText::new(value.to_string()).color(Color32::DARK_GREEN));
                    });
                }
            });
        });
    }
}

fn main() -> eframe::Result {
    init_log();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([700.0, 420.0])
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "preview",
        native_options,
        Box::new(|_cc| {
            Ok(Box::new(App {
                control_width: 150.0,
            }))
        }),
    )
}
