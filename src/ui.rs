use egui::{Color32, RichText, Ui};

use crate::assets::Textures;
use crate::quiz::{Answer, QuizSession};
use crate::shell::{Phase, Shell};

pub mod colors {
    use egui::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(0xF8, 0xF8, 0xF8);
    pub const PRIMARY: Color32 = Color32::from_rgb(0x2C, 0x3E, 0x50);
    pub const SECONDARY: Color32 = Color32::from_rgb(0xD9, 0xD9, 0xD9);
    pub const ACCENT: Color32 = Color32::from_rgb(0x34, 0x98, 0xDB);
    pub const SUCCESS: Color32 = Color32::from_rgb(0x2E, 0xCC, 0x71);
    pub const ERROR: Color32 = Color32::from_rgb(0xE7, 0x4C, 0x3C);
    pub const TEXT: Color32 = Color32::from_rgb(0x2C, 0x3E, 0x50);
    pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xEC, 0xF0, 0xF1);
}

const QUESTION_WRAP: f32 = 500.0;
const QUESTION_HEIGHT: f32 = 160.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    None,
    Answer(Answer),
    Restart,
}

pub struct QuizUI {
    textures: Textures,
}

impl QuizUI {
    pub fn new(textures: Textures) -> Self {
        Self { textures }
    }

    pub fn show_quiz<S: QuizSession>(&self, ui: &mut Ui, shell: &Shell<S>) -> QuizAction {
        paint_background(ui, &self.textures.background);

        let mut action = QuizAction::None;
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.12);
            ui.label(
                RichText::new(shell.score_text())
                    .size(16.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            let (fill, text_color) = match shell.phase() {
                Phase::Feedback { correct: true, .. } => (colors::SUCCESS, colors::TEXT_LIGHT),
                Phase::Feedback { correct: false, .. } => (colors::ERROR, colors::TEXT_LIGHT),
                _ => (colors::SECONDARY, colors::TEXT),
            };
            egui::Frame::none()
                .fill(fill)
                .stroke(egui::Stroke::new(2.0, colors::BACKGROUND))
                .inner_margin(egui::Margin::same(20.0))
                .show(ui, |ui| {
                    ui.set_width(QUESTION_WRAP);
                    ui.set_min_height(QUESTION_HEIGHT);
                    ui.vertical_centered(|ui| {
                        ui.add(
                            egui::Label::new(
                                RichText::new(shell.question_text())
                                    .size(18.0)
                                    .color(text_color),
                            )
                            .wrap(true),
                        );
                    });
                });

            ui.add_space(40.0);
            action = self.answer_buttons(ui, shell.accepts_answers());
        });
        action
    }

    fn answer_buttons(&self, ui: &mut Ui, enabled: bool) -> QuizAction {
        let mut action = QuizAction::None;
        let icons = [
            (Answer::False, &self.textures.false_icon),
            (Answer::True, &self.textures.true_icon),
        ];
        let width: f32 = icons.iter().map(|(_, t)| t.size_vec2().x).sum::<f32>() + 40.0;

        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
            for (answer, texture) in icons {
                let button = egui::ImageButton::new(texture.id(), texture.size_vec2()).frame(false);
                let mut response = ui.add_enabled(enabled, button);
                if enabled {
                    response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
                }
                if response.clicked() {
                    action = QuizAction::Answer(answer);
                }
                ui.add_space(40.0);
            }
        });
        action
    }

    pub fn show_summary<S: QuizSession>(&self, ctx: &egui::Context, shell: &Shell<S>) -> QuizAction {
        let mut action = QuizAction::None;
        let size = self.textures.popup_background.size_vec2();

        egui::Window::new("Quiz Complete!")
            .collapsible(false)
            .resizable(false)
            .fixed_size(size)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .frame(egui::Frame::window(&ctx.style()).fill(colors::PRIMARY))
            .show(ctx, |ui| {
                ui.set_min_size(size);
                paint_background(ui, &self.textures.popup_background);
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(
                        RichText::new("Congratulations!")
                            .size(24.0)
                            .strong()
                            .color(colors::TEXT_LIGHT),
                    );
                    ui.add_space(20.0);
                    ui.label(
                        RichText::new(shell.final_score_text())
                            .size(20.0)
                            .color(colors::TEXT_LIGHT),
                    );
                    ui.add_space(30.0);

                    let play_again = egui::Button::new(
                        RichText::new("Play Again")
                            .size(14.0)
                            .strong()
                            .color(colors::TEXT_LIGHT),
                    )
                    .fill(colors::ACCENT)
                    .min_size(egui::vec2(140.0, 40.0));
                    if ui
                        .add(play_again)
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .clicked()
                    {
                        action = QuizAction::Restart;
                    }
                });
            });
        action
    }
}

fn paint_background(ui: &Ui, texture: &egui::TextureHandle) {
    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    ui.painter()
        .image(texture.id(), ui.max_rect(), uv, Color32::WHITE);
}
