use crate::atom::AtomConfiguration;
use crate::constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::renderer::renderer::Renderer;
use crate::renderer::scene::{Scene, Theme};
use crate::simulation::atom::Atom;
use crate::ui::UiState;
use winit::dpi::PhysicalSize;

pub type AppError = Box<dyn std::error::Error + Send + Sync>;
pub type AppResult<T> = Result<T, AppError>;

#[cfg(not(target_arch = "wasm32"))]
use crate::ui::desktop::{UiFrame, UiLayer};
#[cfg(not(target_arch = "wasm32"))]
use glam::Vec2;
#[cfg(not(target_arch = "wasm32"))]
use std::{sync::Arc, time::Instant};
#[cfg(not(target_arch = "wasm32"))]
use winit::{event::WindowEvent, window::Window};

/// Startup settings for the window and the first atom shown.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub initial: AtomConfiguration,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            initial: AtomConfiguration::default(),
            theme: Theme::default(),
        }
    }
}

pub struct App {
    renderer: Renderer,
    atom: Atom,
    ui_state: UiState,
    #[cfg(not(target_arch = "wasm32"))]
    ui_layer: UiLayer,
    #[cfg(not(target_arch = "wasm32"))]
    animation_start: Instant,
}

impl App {
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn initialize(window: Arc<Window>, config: AppConfig) -> AppResult<Self> {
        let renderer = Renderer::new(&window).await?;
        let (atom, ui_state) = Self::initial_state(&config);

        let surface_format = renderer.surface_config().format;
        let ui_layer = UiLayer::new(&window, renderer.device(), surface_format);

        Ok(Self {
            renderer,
            atom,
            ui_state,
            ui_layer,
            animation_start: Instant::now(),
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub async fn initialize(
        canvas: &web_sys::HtmlCanvasElement,
        config: AppConfig,
    ) -> AppResult<Self> {
        let renderer = Renderer::new(canvas).await?;
        let (atom, ui_state) = Self::initial_state(&config);

        Ok(Self {
            renderer,
            atom,
            ui_state,
        })
    }

    fn initial_state(config: &AppConfig) -> (Atom, UiState) {
        let ui_state = UiState::new(config.initial.clamped(&Default::default()), config.theme);
        let atom = Atom::new(ui_state.config);
        log::info!(
            "Initial atom: {} ({} p, {} n, {} e)",
            atom.element().name(),
            ui_state.config.protons,
            ui_state.config.neutrons,
            ui_state.config.electrons
        );
        (atom, ui_state)
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.renderer.resize(new_size);
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.ui_layer.handle_event(window, event)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let ui_frame: UiFrame = {
            let (ui_layer, ui_state, atom) = (&mut self.ui_layer, &mut self.ui_state, &self.atom);
            ui_layer.prepare(window, |ctx| crate::ui::panels::build_ui(ctx, ui_state, atom))
        };

        self.apply_ui_changes();

        let elapsed = self.animation_start.elapsed().as_secs_f32();
        let scene = frame_scene(&self.atom, &self.ui_state, elapsed);
        self.renderer.update_scene(&scene);

        let pixels_per_point = self.ui_layer.pixels_per_point();
        let size = self.renderer.size();
        let focus = self
            .ui_state
            .scene_focus
            .map(|focus| Vec2::from(focus) * pixels_per_point)
            .unwrap_or_else(|| Vec2::new(size.width as f32, size.height as f32) * 0.5);
        self.renderer.set_view(focus, pixels_per_point);

        let mut pending_frame = Some(ui_frame);
        let (renderer, ui_layer) = (&mut self.renderer, &mut self.ui_layer);
        let result = renderer.render_with_ui(|device, queue, encoder, view| {
            if let Some(frame) = pending_frame.take() {
                ui_layer.paint(device, queue, encoder, view, frame);
            }
        });

        // No surface texture this time: keep egui's uploads for the retry.
        if let Some(frame) = pending_frame {
            ui_layer.defer(frame);
        }
        result
    }

    /// 애니메이션 없이 정지 화면 한 장
    #[cfg(target_arch = "wasm32")]
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let scene = frame_scene(&self.atom, &self.ui_state, 0.0);
        self.renderer.update_scene(&scene);
        self.renderer.render()
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.renderer.size()
    }

    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn apply_ui_changes(&mut self) {
        self.ui_state.sync_configuration();

        if self.atom.set_configuration(self.ui_state.config) {
            log::debug!(
                "Atom changed: {} (A = {}, charge {:+})",
                self.atom.element().name(),
                self.atom.mass_number(),
                self.ui_state.config.net_charge()
            );
            self.ui_state.on_configuration_changed();
            self.animation_start = Instant::now();
        }
    }
}

/// The atom for the visualizer tab, otherwise just the themed background.
fn frame_scene(atom: &Atom, ui_state: &UiState, elapsed: f32) -> Scene {
    let palette = ui_state.theme.palette();
    if ui_state.shows_scene() {
        Scene::build(atom, &palette, elapsed)
    } else {
        Scene::empty(&palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_opens_on_carbon() {
        let config = AppConfig::default();
        assert_eq!(config.title, "Atomic Structure Explorer");
        assert_eq!((config.width, config.height), (1280, 800));
        assert_eq!(config.initial, AtomConfiguration::new(6, 6, 6));
        assert!(config.theme.is_dark());
    }

    #[test]
    fn initial_state_clamps_out_of_range_counts() {
        let config = AppConfig {
            initial: AtomConfiguration::new(40, 3, 2),
            ..AppConfig::default()
        };
        let (atom, ui_state) = App::initial_state(&config);
        assert_eq!(ui_state.config, AtomConfiguration::new(20, 3, 2));
        assert_eq!(atom.element().name(), "Calcium");
    }

    #[test]
    fn frame_scene_follows_tab_and_theme() {
        let config = AppConfig {
            theme: Theme::Light,
            ..AppConfig::default()
        };
        let (atom, mut ui_state) = App::initial_state(&config);

        let visualizer = frame_scene(&atom, &ui_state, 0.0);
        assert_eq!(visualizer, Scene::build(&atom, &Theme::Light.palette(), 0.0));
        assert!(!visualizer.instances().is_empty());

        ui_state.active_tab = crate::ui::Tab::Concepts;
        let concepts = frame_scene(&atom, &ui_state, 1.0);
        assert!(concepts.instances().is_empty());
        assert_eq!(concepts.background(), Theme::Light.palette().background);
    }
}
