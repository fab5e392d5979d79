use crate::app::AppResult;
use wgpu::{Instance, Surface};
use winit::dpi::PhysicalSize;

/// 플랫폼별 Surface 생성을 추상화하는 트레이트
pub trait SurfaceProvider {
    fn create_surface(
        &self,
        instance: &Instance,
    ) -> AppResult<(Surface<'static>, PhysicalSize<u32>)>;
}

/// 네이티브 윈도우용 SurfaceProvider 구현
#[cfg(not(target_arch = "wasm32"))]
impl SurfaceProvider for std::sync::Arc<winit::window::Window> {
    fn create_surface(
        &self,
        instance: &Instance,
    ) -> AppResult<(Surface<'static>, PhysicalSize<u32>)> {
        // The Arc keeps the window alive for as long as the surface.
        let surface = instance
            .create_surface(self.clone())
            .map_err(|e| format!("Failed to create window surface: {e}"))?;
        Ok((surface, self.inner_size()))
    }
}

/// 네이티브 플랫폼 시작 함수
#[cfg(not(target_arch = "wasm32"))]
pub fn start() -> AppResult<()> {
    use crate::app::{App, AppConfig};
    use pollster::block_on;
    use std::sync::Arc;
    use winit::{dpi::LogicalSize, event::*, event_loop::EventLoop, window::WindowBuilder};

    env_logger::init();

    let config = AppConfig::default();
    let event_loop = EventLoop::new().map_err(|e| e.to_string())?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .build(&event_loop)
            .map_err(|e| e.to_string())?,
    );

    let mut app = block_on(App::initialize(window.clone(), config))?;
    log::info!("Window opened: {:?}", window.inner_size());

    event_loop
        .run(move |event, target| match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => {
                let consumed = app.handle_event(&window, &event);
                match event {
                    WindowEvent::CloseRequested => target.exit(),
                    WindowEvent::Resized(new_size) => app.resize(new_size),
                    WindowEvent::RedrawRequested => match app.render(&window) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            app.resize(app.size())
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Surface out of memory, exiting");
                            target.exit();
                        }
                        Err(e) => log::error!("Render error: {:?}", e),
                    },
                    _ if consumed => window.request_redraw(),
                    _ => {}
                }
            }
            Event::AboutToWait => {
                // 궤도 애니메이션을 위해 계속 redraw 요청
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| e.to_string())?;

    Ok(())
}

// wasm32 타겟에서 필요한 import들
#[cfg(target_arch = "wasm32")]
use {wasm_bindgen::JsCast, wasm_bindgen::prelude::*, wasm_bindgen_futures::spawn_local};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger was already initialized".into());
    }

    // DOM에서 캔버스를 찾음
    let Some(canvas) = find_canvas("canvas") else {
        log::error!("No <canvas id=\"canvas\"> element found");
        return;
    };

    // 캔버스 크기 설정 (HTML과 일치시킴)
    canvas.set_width(640);
    canvas.set_height(480);

    spawn_local(async move {
        match crate::app::App::initialize(&canvas, crate::app::AppConfig::default()).await {
            Ok(mut app) => {
                log::info!("Renderer created successfully!");
                // 첫 번째 렌더링 수행
                match app.render() {
                    Ok(_) => log::info!("Atom rendered: {}", app.atom().element().name()),
                    Err(e) => log::error!("Render failed: {:?}", e),
                }
            }
            Err(e) => {
                log::error!("Failed to create renderer: {:?}", e);
            }
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn find_canvas(id: &str) -> Option<web_sys::HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()
}

/// 웹 캔버스용 SurfaceProvider 구현
#[cfg(target_arch = "wasm32")]
impl SurfaceProvider for web_sys::HtmlCanvasElement {
    fn create_surface(
        &self,
        instance: &Instance,
    ) -> AppResult<(Surface<'static>, PhysicalSize<u32>)> {
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(self.clone()))
            .map_err(|e| format!("Failed to create canvas surface: {e}"))?;
        let size = PhysicalSize::new(self.width(), self.height());
        Ok((surface, size))
    }
}
