use eframe::{App, Frame, egui};
use egui::{Color32, RichText};
use log::debug;

use crate::charset::CharClass;
use crate::form::GeneratorForm;
use crate::settings::AppSettings;

/// Widget id of the length text field.
pub const LENGTH_FIELD_ID: &str = "length_input";

/// The main eframe app struct
pub struct FormPassApp {
    pub form: GeneratorForm,
    pub settings: AppSettings,
}

impl Default for FormPassApp {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}

impl FormPassApp {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            form: GeneratorForm::with_bounds(settings.length_bounds()),
            settings,
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Ctrl+G: Generate, Escape: Reset
        let (generate, reset) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::G),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if generate {
            let _ = self.form.generate();
        }
        if reset {
            self.form.reset();
        }
    }

    fn show_form_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Password Generator").size(24.0).strong());
        });
        ui.add_space(10.0);

        // Length field with inline validation
        ui.label("Password Length");
        let response = ui.add(
            egui::TextEdit::singleline(self.form.length_input_mut())
                .id(egui::Id::new(LENGTH_FIELD_ID))
                .hint_text("Eg. 8"),
        );
        if response.lost_focus() {
            self.form.blur_length();
        }
        if let Some(err) = self.form.length_error() {
            ui.colored_label(Color32::RED, err);
        }

        ui.add_space(10.0);
        for class in CharClass::ALL {
            let mut checked = self.form.is_enabled(class);
            if ui.checkbox(&mut checked, class.label()).changed() {
                debug!("{:?} set to {}", class, checked);
                self.form.set_class(class, checked);
            }
        }

        ui.add_space(20.0);
        ui.horizontal(|ui| {
            if ui.button("Generate").clicked() {
                let _ = self.form.generate();
            }
            if ui.button("Reset").clicked() {
                self.form.reset();
            }
        });

        if let Some(notice) = self.form.notice() {
            ui.colored_label(Color32::RED, notice);
        }

        if let Some(password) = self.form.displayed_password() {
            ui.add_space(20.0);
            ui.separator();
            ui.label("Your Generated Password:");
            ui.label(RichText::new(password).monospace().size(18.0).strong());
        }
    }

    /// Renders one frame. Shortcuts must run after the panel: Escape also
    /// blurs the length field, and the reset has to land last.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_form_ui(ui);
            });
        });

        self.handle_shortcuts(ctx);
    }
}

impl App for FormPassApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.show(ctx);
    }
}

// ------------------ UNIT TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_default_state() {
        let app = FormPassApp::default();
        assert!(app.form.length_input().is_empty());
        assert!(app.form.displayed_password().is_none());
        assert!(!app.form.flags().any());
        assert_eq!(app.settings, AppSettings::default());
    }

    #[test]
    fn test_app_uses_settings_bounds() {
        let settings = AppSettings {
            min_length: 12,
            max_length: 20,
        };
        let app = FormPassApp::new(settings.clone());
        assert_eq!(app.form.bounds(), settings.length_bounds());
    }

    fn screen_input(events: Vec<egui::Event>, modifiers: egui::Modifiers) -> egui::RawInput {
        egui::RawInput {
            modifiers,
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(420.0, 520.0),
            )),
            events,
            ..Default::default()
        }
    }

    fn key_press(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    fn run_frame(ctx: &egui::Context, app: &mut FormPassApp, events: Vec<egui::Event>) {
        run_frame_with(ctx, app, events, egui::Modifiers::NONE);
    }

    fn run_frame_with(
        ctx: &egui::Context,
        app: &mut FormPassApp,
        events: Vec<egui::Event>,
        modifiers: egui::Modifiers,
    ) {
        let _ = ctx.run(screen_input(events, modifiers), |ctx| app.show(ctx));
    }

    fn focus_length_field(ctx: &egui::Context, app: &mut FormPassApp) {
        run_frame(ctx, app, vec![]);
        ctx.memory_mut(|mem| mem.request_focus(egui::Id::new(LENGTH_FIELD_ID)));
        run_frame(ctx, app, vec![]);
    }

    #[test]
    fn test_escape_in_focused_field_resets_untouched() {
        let ctx = egui::Context::default();
        let mut app = FormPassApp::default();
        focus_length_field(&ctx, &mut app);

        run_frame(&ctx, &mut app, vec![egui::Event::Text("9".into())]);
        assert_eq!(app.form.length_input(), "9");

        run_frame(&ctx, &mut app, vec![key_press(egui::Key::Escape, egui::Modifiers::NONE)]);
        run_frame(&ctx, &mut app, vec![]);

        assert!(app.form.length_input().is_empty());
        assert!(!app.form.is_touched());
        assert!(app.form.length_error().is_none());
        assert!(app.form.displayed_password().is_none());
    }

    #[test]
    fn test_ctrl_g_generates() {
        let ctx = egui::Context::default();
        let mut app = FormPassApp::default();
        app.form.set_length_input("10");
        app.form.set_class(CharClass::Digits, true);

        run_frame_with(
            &ctx,
            &mut app,
            vec![key_press(egui::Key::G, egui::Modifiers::CTRL)],
            egui::Modifiers::CTRL,
        );

        let pwd = app.form.displayed_password().unwrap();
        assert_eq!(pwd.len(), 10);
        assert!(pwd.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_checkbox_labels_match_form() {
        let labels: Vec<&str> = CharClass::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Include Lowercase",
                "Include Uppercase",
                "Include Numbers",
                "Include Special Characters",
            ]
        );
    }
}
