use std::time::{Duration, Instant};

use eframe::egui;

use crate::assets::Assets;
use crate::quiz::QuizBrain;
use crate::shell::{Phase, Shell};
use crate::ui::{colors, QuizAction, QuizUI};

pub struct QuizApp {
    ui: QuizUI,
    shell: Shell<QuizBrain>,
}

impl QuizApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        assets: Assets,
        quiz: QuizBrain,
        feedback_delay: Duration,
    ) -> Self {
        Self {
            ui: QuizUI::new(assets.into_textures(&cc.egui_ctx)),
            shell: Shell::start(quiz, feedback_delay),
        }
    }

    fn apply(&mut self, action: QuizAction) {
        match action {
            QuizAction::Answer(answer) => {
                self.shell.answer(answer, Instant::now());
            }
            QuizAction::Restart => self.shell.restart(),
            QuizAction::None => {}
        }
    }
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(remaining) = self.shell.tick(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }

        let panel = egui::Frame::none().fill(colors::PRIMARY);
        let action = egui::CentralPanel::default()
            .frame(panel)
            .show(ctx, |ui| self.ui.show_quiz(ui, &self.shell))
            .inner;
        self.apply(action);

        if *self.shell.phase() == Phase::Finished {
            let action = self.ui.show_summary(ctx, &self.shell);
            self.apply(action);
        }

        if matches!(self.shell.phase(), Phase::Feedback { .. }) {
            // The deadline may have been set by this frame's click.
            if let Some(remaining) = self.shell.tick(Instant::now()) {
                ctx.request_repaint_after(remaining);
            }
        }
    }
}
