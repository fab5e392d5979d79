use crate::atom::{AtomConfiguration, ControlRanges, Preset};
use crate::renderer::scene::Theme;
use crate::simulation::quiz::QuizState;

#[cfg(not(target_arch = "wasm32"))]
pub mod panels;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Visualizer,
    Concepts,
    Quiz,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Visualizer, Tab::Concepts, Tab::Quiz];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Visualizer => "Atom Visualizer",
            Tab::Concepts => "Learn Concepts",
            Tab::Quiz => "Test Knowledge",
        }
    }
}

/// Everything the control surface edits between frames.
#[derive(Clone, Debug)]
pub struct UiState {
    pub config: AtomConfiguration,
    pub active_tab: Tab,
    pub theme: Theme,
    pub quiz: QuizState,
    /// Centre of the free area next to the panels, in logical points.
    pub scene_focus: Option<[f32; 2]>,
    ranges: ControlRanges,
}

impl UiState {
    pub fn new(config: AtomConfiguration, theme: Theme) -> Self {
        Self {
            config,
            active_tab: Tab::Visualizer,
            theme,
            quiz: QuizState::new(&config),
            scene_focus: None,
            ranges: ControlRanges::default(),
        }
    }

    pub fn ranges(&self) -> &ControlRanges {
        &self.ranges
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        self.config = preset.configuration();
    }

    pub fn neutralize(&mut self) {
        self.config = self.config.neutralized();
    }

    pub fn reset(&mut self) {
        self.config = AtomConfiguration::hydrogen();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn shows_scene(&self) -> bool {
        self.active_tab == Tab::Visualizer
    }

    /// Keeps the counts inside the slider ranges.
    pub fn sync_configuration(&mut self) {
        self.config = self.config.clamped(&self.ranges);
    }

    /// A new atom gets a fresh quiz.
    pub fn on_configuration_changed(&mut self) {
        self.quiz = QuizState::new(&self.config);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(AtomConfiguration::default(), Theme::default())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod desktop {
    use egui::{ClippedPrimitive, TexturesDelta};
    use egui_wgpu::{Renderer, ScreenDescriptor};
    use egui_winit::{State as EguiWinitState, pixels_per_point};
    use std::mem;
    use wgpu::{CommandEncoder, Device, Queue, TextureFormat, TextureView};
    use winit::{event::WindowEvent, window::Window};

    /// Texture changes egui has emitted but the GPU has not received yet.
    ///
    /// egui sends the font atlas exactly once, so a frame that never reaches
    /// the surface must hand its uploads on to the next one.
    #[derive(Default)]
    pub struct TextureBacklog {
        pending: TexturesDelta,
    }

    impl TextureBacklog {
        /// Queues changes from a newer frame behind whatever is still pending.
        pub fn push(&mut self, newer: TexturesDelta) {
            self.pending.append(newer);
        }

        /// Puts back changes from a frame that was never painted. They are
        /// older than anything pushed since.
        pub fn restore(&mut self, older: TexturesDelta) {
            let newer = mem::replace(&mut self.pending, older);
            self.pending.append(newer);
        }

        pub fn take(&mut self) -> TexturesDelta {
            mem::take(&mut self.pending)
        }

        pub fn is_empty(&self) -> bool {
            self.pending.set.is_empty() && self.pending.free.is_empty()
        }
    }

    /// Tessellated egui output for one frame.
    pub struct UiFrame {
        pub shapes: Vec<ClippedPrimitive>,
        pub textures: TexturesDelta,
    }

    /// egui overlay painted on top of the atom.
    pub struct UiLayer {
        ctx: egui::Context,
        input: EguiWinitState,
        painter: Renderer,
        screen: ScreenDescriptor,
        backlog: TextureBacklog,
    }

    impl UiLayer {
        pub fn new(window: &Window, device: &Device, surface_format: TextureFormat) -> Self {
            let ctx = egui::Context::default();
            let input = EguiWinitState::new(
                ctx.clone(),
                egui::ViewportId::ROOT,
                window,
                Some(window.scale_factor() as f32),
                None,
            );
            let screen = screen_descriptor(&ctx, window);

            Self {
                ctx,
                input,
                painter: Renderer::new(device, surface_format, None, 1),
                screen,
                backlog: TextureBacklog::default(),
            }
        }

        /// Feeds a window event to egui. Returns `true` when egui used it.
        pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
            let response = self.input.on_window_event(window, event);
            if response.repaint {
                window.request_redraw();
            }
            response.consumed
        }

        /// Runs the UI closure and tessellates its output.
        pub fn prepare(
            &mut self,
            window: &Window,
            build_ui: impl FnMut(&egui::Context),
        ) -> UiFrame {
            self.screen = screen_descriptor(&self.ctx, window);
            let raw_input = self.input.take_egui_input(window);
            let output = self.ctx.run(raw_input, build_ui);
            self.input
                .handle_platform_output(window, output.platform_output);

            self.screen.pixels_per_point = output.pixels_per_point;
            self.backlog.push(output.textures_delta);

            UiFrame {
                shapes: self.ctx.tessellate(output.shapes, output.pixels_per_point),
                textures: self.backlog.take(),
            }
        }

        /// Keeps the texture uploads of a frame that could not be presented.
        pub fn defer(&mut self, frame: UiFrame) {
            self.backlog.restore(frame.textures);
            if !self.backlog.is_empty() {
                log::debug!("Frame not presented; egui texture changes carried over");
            }
        }

        pub fn paint(
            &mut self,
            device: &Device,
            queue: &Queue,
            encoder: &mut CommandEncoder,
            view: &TextureView,
            frame: UiFrame,
        ) {
            let UiFrame { shapes, textures } = frame;

            for (id, delta) in &textures.set {
                self.painter.update_texture(device, queue, *id, delta);
            }

            let callback_commands =
                self.painter
                    .update_buffers(device, queue, encoder, &shapes, &self.screen);
            if !callback_commands.is_empty() {
                queue.submit(callback_commands);
            }

            {
                // Load, not clear: the atom is already on the target.
                let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("UI Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
                self.painter.render(&mut pass, &shapes, &self.screen);
            }

            for id in &textures.free {
                self.painter.free_texture(id);
            }
        }

        pub fn pixels_per_point(&self) -> f32 {
            self.screen.pixels_per_point
        }
    }

    fn screen_descriptor(ctx: &egui::Context, window: &Window) -> ScreenDescriptor {
        let size = window.inner_size();
        ScreenDescriptor {
            size_in_pixels: [size.width.max(1), size.height.max(1)],
            pixels_per_point: pixels_per_point(ctx, window),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use egui::epaint::ImageDelta;
        use egui::{Color32, ColorImage, TextureId, TextureOptions};

        fn upload(id: u64) -> TexturesDelta {
            let image = ColorImage::new([1, 1], Color32::WHITE);
            TexturesDelta {
                set: vec![(TextureId::Managed(id), ImageDelta::full(image, TextureOptions::LINEAR))],
                free: Vec::new(),
            }
        }

        fn uploaded_ids(delta: &TexturesDelta) -> Vec<TextureId> {
            delta.set.iter().map(|(id, _)| *id).collect()
        }

        #[test]
        fn unpainted_font_atlas_reaches_the_next_frame() {
            let mut backlog = TextureBacklog::default();

            // First frame carries the font atlas but the surface is lost.
            backlog.push(upload(0));
            let lost = backlog.take();
            assert!(backlog.is_empty());
            backlog.restore(lost);

            // Second frame has nothing new of its own.
            backlog.push(TexturesDelta::default());
            let delivered = backlog.take();
            assert_eq!(uploaded_ids(&delivered), [TextureId::Managed(0)]);
            assert!(backlog.is_empty());
        }

        #[test]
        fn restored_uploads_stay_ahead_of_newer_ones() {
            let mut backlog = TextureBacklog::default();
            backlog.push(upload(2));
            backlog.restore(upload(1));
            backlog.push(TexturesDelta {
                set: Vec::new(),
                free: vec![TextureId::Managed(1)],
            });

            let delivered = backlog.take();
            assert_eq!(
                uploaded_ids(&delivered),
                [TextureId::Managed(1), TextureId::Managed(2)]
            );
            assert_eq!(delivered.free, [TextureId::Managed(1)]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_actions() {
        let mut state = UiState::default();
        state.config = AtomConfiguration::new(8, 8, 3);
        state.neutralize();
        assert_eq!(state.config, AtomConfiguration::new(8, 8, 8));

        state.reset();
        assert_eq!(state.config, AtomConfiguration::hydrogen());

        let sodium = &Preset::all()[5];
        assert_eq!(sodium.name, "Sodium");
        state.apply_preset(sodium);
        assert_eq!(state.config, AtomConfiguration::new(11, 12, 11));
    }

    #[test]
    fn sync_clamps_to_slider_ranges() {
        let mut state = UiState::default();
        state.config = AtomConfiguration::new(30, 30, 30);
        state.sync_configuration();
        assert_eq!(state.config, AtomConfiguration::new(20, 25, 20));
    }

    #[test]
    fn configuration_change_restarts_quiz() {
        let mut state = UiState::default();
        state.quiz.select(0);
        assert_eq!(state.quiz.score(), 1);

        state.config = AtomConfiguration::new(11, 12, 10);
        state.on_configuration_changed();
        assert_eq!(state.quiz.score(), 0);
        assert_eq!(state.quiz.questions()[2].options[0], "Positive (Cation)");
    }

    #[test]
    fn scene_only_on_visualizer_tab() {
        let mut state = UiState::default();
        assert!(state.shows_scene());
        state.active_tab = Tab::Quiz;
        assert!(!state.shows_scene());
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(Tab::ALL.len(), 3);
    }
}
