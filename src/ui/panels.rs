use crate::atom::{Preset, concepts};
use crate::constants::{ELECTRON_COLOR, NEUTRON_COLOR, PROTON_COLOR, WINDOW_TITLE};
use crate::physics::electron::ShellDistribution;
use crate::physics::particle::ParticleKind;
use crate::simulation::atom::Atom;
use crate::simulation::quiz::QuizState;
use crate::ui::{Tab, UiState};
use egui::{Align, Align2, Color32, FontId, Layout, RichText};
use std::ops::RangeInclusive;

const CORRECT_FILL: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
const WRONG_FILL: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
const PANEL_MARGIN: f32 = 16.0;

pub fn build_ui(ctx: &egui::Context, state: &mut UiState, atom: &Atom) {
    if ctx.style().visuals.dark_mode != state.theme.is_dark() {
        ctx.set_visuals(if state.theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    header(ctx, state);

    match state.active_tab {
        Tab::Visualizer => visualizer(ctx, state, atom),
        Tab::Concepts => {
            state.scene_focus = None;
            concepts_page(ctx);
        }
        Tab::Quiz => {
            state.scene_focus = None;
            quiz_page(ctx, &mut state.quiz);
        }
    }
}

fn header(ctx: &egui::Context, state: &mut UiState) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(WINDOW_TITLE);
                ui.label(RichText::new("Interactive Learning for Class 10").weak());
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let icon = if state.theme.is_dark() { "☀" } else { "🌙" };
                if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                    state.toggle_theme();
                }
            });
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                ui.selectable_value(&mut state.active_tab, tab, tab.label());
            }
        });
        ui.add_space(6.0);
    });
}

fn visualizer(ctx: &egui::Context, state: &mut UiState, atom: &Atom) {
    egui::SidePanel::right("controls")
        .resizable(false)
        .default_width(300.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                control_panel(ui, state);
                ui.add_space(12.0);
                fun_fact(ui);
            });
        });

    // Transparent so the atom drawn underneath stays visible.
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            let center = rect.center();
            state.scene_focus = Some([center.x, center.y]);

            ui.painter().text(
                center,
                Align2::CENTER_CENTER,
                atom.element().symbol(),
                FontId::proportional(14.0),
                color32(state.theme.palette().text),
            );

            element_info(ui.ctx(), rect.right_top() + egui::vec2(-PANEL_MARGIN, PANEL_MARGIN), atom);
            legend(ui.ctx(), rect.left_bottom() + egui::vec2(PANEL_MARGIN, -PANEL_MARGIN));
        });
}

fn element_info(ctx: &egui::Context, anchor: egui::Pos2, atom: &Atom) {
    egui::Area::new(egui::Id::new("element_info"))
        .fixed_pos(anchor)
        .pivot(Align2::RIGHT_TOP)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(atom.element().name()).strong().size(18.0));
                ui.label(format!("Atomic Number: {}", atom.atomic_number()));
                ui.label(format!("Mass Number: {}", atom.mass_number()));

                let config = atom.config();
                if config.is_ion() {
                    ui.label(format!(
                        "Charge: {:+} ({})",
                        config.net_charge(),
                        config.ion_kind().label()
                    ));
                }
                if let Some(summary) = shell_summary(atom.shells()) {
                    ui.label(format!("Shells: {summary}"));
                }
            });
        });
}

fn legend(ctx: &egui::Context, anchor: egui::Pos2) {
    egui::Area::new(egui::Id::new("legend"))
        .fixed_pos(anchor)
        .pivot(Align2::LEFT_BOTTOM)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                for kind in [ParticleKind::Proton, ParticleKind::Neutron, ParticleKind::Electron] {
                    ui.horizontal(|ui| {
                        let (dot, _) =
                            ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter().circle_filled(dot.center(), 6.0, hex_color(kind.color()));
                        ui.label(RichText::new(kind.label()).small());
                    });
                }
            });
        });
}

fn control_panel(ui: &mut egui::Ui, state: &mut UiState) {
    ui.heading("Atomic Controls");
    ui.add_space(8.0);

    let ranges = state.ranges().clone();
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        count_slider(ui, "Protons", &mut state.config.protons, ranges.protons, PROTON_COLOR);
        count_slider(ui, "Neutrons", &mut state.config.neutrons, ranges.neutrons, NEUTRON_COLOR);
        count_slider(ui, "Electrons", &mut state.config.electrons, ranges.electrons, ELECTRON_COLOR);
    });

    ui.add_space(8.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Common Elements").strong());
        egui::Grid::new("presets")
            .num_columns(2)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for (i, preset) in Preset::all().iter().enumerate() {
                    if ui
                        .add_sized([120.0, 24.0], egui::Button::new(preset.name))
                        .clicked()
                    {
                        state.apply_preset(preset);
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    });

    ui.add_space(8.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Quick Actions").strong());
        ui.label(RichText::new("Reset or neutralize the atom").small().weak());
        ui.horizontal(|ui| {
            if ui.button("Neutralize").clicked() {
                state.neutralize();
            }
            if ui.button("Reset").clicked() {
                state.reset();
            }
        });
    });
}

fn count_slider(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut u32,
    range: RangeInclusive<u32>,
    color: u32,
) {
    ui.label(RichText::new(label).strong().color(hex_color(color)));
    ui.scope(|ui| {
        ui.visuals_mut().selection.bg_fill = hex_color(color);
        ui.add(egui::Slider::new(value, range).trailing_fill(true));
    });
}

fn fun_fact(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("💡 Did you know?").strong());
        ui.label(concepts::FUN_FACT);
    });
}

fn concepts_page(ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Understanding Atomic Structure");
            ui.label("Master the fundamental concepts of atoms and their components");
            ui.add_space(12.0);
            for concept in concepts::all() {
                egui::Frame::group(ui.style())
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(concept.title).strong().size(16.0));
                        ui.add_space(4.0);
                        ui.label(concept.body);
                    });
                ui.add_space(8.0);
            }
        });
    });
}

fn quiz_page(ctx: &egui::Context, quiz: &mut QuizState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Test Your Knowledge");
        ui.label("Answer questions based on the current atom configuration");
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Atomic Structure Quiz").strong().size(18.0));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("↺").on_hover_text("Restart quiz").clicked() {
                    quiz.reset();
                }
                ui.label(format!(
                    "Question {} of {}",
                    quiz.current_index() + 1,
                    quiz.len()
                ));
            });
        });
        ui.add(egui::ProgressBar::new(quiz.progress()));
        ui.add_space(12.0);

        let question = quiz.current().clone();
        let answered = quiz.is_current_answered();
        let selected = quiz.selected();

        ui.label(RichText::new(question.prompt).size(16.0));
        ui.add_space(8.0);
        for (index, option) in question.options.iter().enumerate() {
            let mut button = egui::Button::new(option.as_str())
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if answered && question.is_correct(index) {
                button = button.fill(CORRECT_FILL);
            } else if answered && selected == Some(index) {
                button = button.fill(WRONG_FILL);
            }
            if ui.add_enabled(!answered, button).clicked() {
                quiz.select(index);
            }
        }

        if answered {
            ui.add_space(8.0);
            let correct = selected.is_some_and(|s| question.is_correct(s));
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                let (verdict, color) = if correct {
                    ("Correct!", CORRECT_FILL)
                } else {
                    ("Incorrect!", WRONG_FILL)
                };
                ui.label(RichText::new(verdict).strong().color(color));
                ui.label(question.explanation);
            });
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(format!("Score: {} / {}", quiz.score(), quiz.len()));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if quiz.is_complete() {
                    let verdict = if quiz.passed() {
                        "🏆 Quiz Complete! Great job!"
                    } else {
                        "Quiz Complete! Keep practicing!"
                    };
                    ui.label(RichText::new(verdict).strong());
                } else if answered && ui.button("Next Question").clicked() {
                    quiz.next();
                }
            });
        });
    });
}

/// Occupancy per shell, e.g. `K2 L8 M1`.
fn shell_summary(shells: &ShellDistribution) -> Option<String> {
    if shells.is_empty() {
        return None;
    }
    let parts: Vec<String> = shells
        .shells()
        .iter()
        .map(|shell| format!("{}{}", shell.label(), shell.occupancy()))
        .collect();
    Some(parts.join(" "))
}

fn hex_color(hex: u32) -> Color32 {
    Color32::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

fn color32([r, g, b, a]: [f32; 4]) -> Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(channel(r), channel(g), channel(b), channel(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::rgba;

    #[test]
    fn hex_colors_round_trip_through_palette_floats() {
        assert_eq!(hex_color(PROTON_COLOR), Color32::from_rgb(0xef, 0x44, 0x44));
        assert_eq!(color32(rgba(NEUTRON_COLOR, 1.0)), hex_color(NEUTRON_COLOR));
    }

    #[test]
    fn shell_summary_lists_occupied_shells() {
        use crate::physics::electron::distribute_shells;

        assert_eq!(shell_summary(&distribute_shells(0)), None);
        assert_eq!(shell_summary(&distribute_shells(11)).as_deref(), Some("K2 L8 M1"));
        assert_eq!(shell_summary(&distribute_shells(20)).as_deref(), Some("K2 L8 M8"));
    }
}
