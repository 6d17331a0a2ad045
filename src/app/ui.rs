use super::ResumeUploader;
use crate::upload::{StatusKind, RESUME_EXTENSIONS};
use crate::utils::file_size::format_size;
use egui::{Color32, RichText};
use rfd::FileDialog;

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);

impl ResumeUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.heading("Resume Parser");
                ui.add_space(5.0);
                ui.label(
                    RichText::new("Upload a resume (PDF, DOCX or image) to extract its details")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });

            ui.add_space(20.0);
            self.render_file_picker(ui);
            ui.add_space(20.0);

            ui.vertical_centered(|ui| {
                ui.add_enabled_ui(self.state.can_submit(), |ui| {
                    let label = if self.state.is_uploading {
                        "⏳ Parsing..."
                    } else {
                        "📤 Parse Resume"
                    };
                    let button = egui::Button::new(label).min_size(egui::vec2(200.0, 40.0));
                    if ui.add(button).clicked() {
                        self.start_upload();
                    }
                });
            });

            ui.add_space(10.0);
            self.render_status(ui);
            ui.add_space(10.0);
            self.render_output(ui);
        });
    }

    fn render_file_picker(&mut self, ui: &mut egui::Ui) {
        let mut picked = None;

        ui.group(|ui| {
            ui.horizontal(|ui| {
                if ui.button("📄 Select File").clicked() {
                    picked = FileDialog::new()
                        .add_filter("Resumes", &RESUME_EXTENSIONS)
                        .add_filter("All files", &["*"])
                        .pick_file();
                }

                match &self.state.selection {
                    Some(selection) => {
                        let size = selection
                            .size
                            .map(|bytes| format!(" ({})", format_size(bytes)))
                            .unwrap_or_default();
                        ui.label(format!("Selected: {}{}", selection.display_name(), size))
                            .on_hover_text(selection.path.display().to_string());
                    }
                    None => {
                        ui.label(
                            RichText::new("No file chosen")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    }
                }
            });
        });

        if let Some(path) = picked {
            self.select_file(path);
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let status = &self.state.status;
        let color = match status.kind {
            StatusKind::Info => ui.visuals().text_color(),
            StatusKind::Success => Color32::from_rgb(0, 180, 0),
            StatusKind::Error => Color32::from_rgb(220, 50, 50),
        };

        ui.horizontal(|ui| {
            if self.state.is_uploading {
                ui.spinner();
            }
            ui.colored_label(color, &status.text);
        });
    }

    fn render_output(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(ui.style().visuals.extreme_bg_color)
            .stroke(egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.4)))
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        // read-only: a &str buffer can't be edited
                        let mut text = self.state.output.as_str();
                        ui.add(
                            egui::TextEdit::multiline(&mut text)
                                .font(egui::TextStyle::Monospace)
                                .desired_width(f32::INFINITY),
                        );
                    });
            });
    }
}
