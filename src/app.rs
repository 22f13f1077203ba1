//! Application event loop.
//!
//! This module owns the winit event loop that drives both decoration layers.
//! Each displayed frame follows the same pattern:
//!
//! 1. Collect window events (cursor movement overwrites the pointer tracker,
//!    resize reconfigures the surface and projection synchronously)
//! 2. Render all layers' batches, grouped per pipeline
//! 3. Snapshot the pointer state and call every layer's `on_frame`
//! 4. Request the next redraw, which keeps the loop running for the lifetime
//!    of the page
//!
//! Initialization is asynchronous because the GPU device request is. On
//! native targets it is blocked on; on wasm32 it is spawned and the finished
//! state is handed back to the event loop through a proxy event, the same
//! two-phase pattern the surrounding ecosystem uses.

use std::{iter, sync::Arc};

use instant::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{
    context::Context,
    data_structures::{polyhedron::DrawPolyhedron, texture::Texture},
    layer::{FrameSnapshot, Layer, LayerConstructor},
    pointer::PointerTracker,
    render::Instanced,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Id of the host element the backdrop canvas is inserted into (wasm32).
#[cfg(target_arch = "wasm32")]
pub const CONTAINER_ID: &str = "canvas-container";

/// Maximum device pixel ratio the surface is backed at.
///
/// High-density displays above this ratio get a proportionally smaller
/// backing buffer; the visual difference on a blurred backdrop is nil and
/// the fill-rate saving is substantial.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Backing surface extent for a window size, with the pixel ratio capped.
pub fn surface_extent(size: PhysicalSize<u32>, scale_factor: f64) -> (u32, u32) {
    if scale_factor <= MAX_PIXEL_RATIO {
        return (size.width, size.height);
    }
    let scale = MAX_PIXEL_RATIO / scale_factor;
    (
        (size.width as f64 * scale).round() as u32,
        (size.height as f64 * scale).round() as u32,
    )
}

/// Application state bundle: GPU context and surface status.
#[derive(Debug)]
pub struct AppState {
    pub(crate) ctx: Context,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(window: Arc<Window>) -> Self {
        let ctx = Context::new(window).await;
        let ctx = match ctx {
            Ok(ctx) => ctx,
            Err(e) => panic!(
                "App initialization failed. Cannot create the main context: {}",
                e
            ),
        };
        Self {
            ctx,
            is_surface_configured: false,
        }
    }

    fn resize(&mut self, size: PhysicalSize<u32>, scale_factor: f64) {
        let (width, height) = surface_extent(size, scale_factor);
        if width > 0 && height > 0 {
            self.ctx.config.width = width;
            self.ctx.config.height = height;
            self.is_surface_configured = true;
            self.ctx.projection.resize(width, height);
            self.ctx
                .camera
                .write_to_buffer(&self.ctx.queue, &self.ctx.projection);
            self.ctx
                .surface
                .configure(&self.ctx.device, &self.ctx.config);
            self.ctx.depth_texture = Texture::create_depth_texture(
                &self.ctx.device,
                [self.ctx.config.width, self.ctx.config.height],
                "depth_texture",
            );
        }
    }

    fn get_surface_texture(&self) -> wgpu::CurrentSurfaceTexture {
        self.ctx.surface.get_current_texture()
    }

    fn render(&mut self, layers: &Vec<Box<dyn Layer>>) -> Result<(), wgpu::CurrentSurfaceTexture> {
        // invoke main render loop
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let output = match self.get_surface_texture() {
            wgpu::CurrentSurfaceTexture::Success(texture)
            | wgpu::CurrentSurfaceTexture::Suboptimal(texture) => texture,
            other => return Err(other),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder: wgpu::CommandEncoder =
            self.ctx
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });
        {
            let mut render_pass: wgpu::RenderPass<'_> =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                        view: &self.ctx.depth_texture.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    }),
                    occlusion_query_set: None,
                    timestamp_writes: None,
                    multiview_mask: None,
                });

            // Actual rendering:
            let mut shaded: Vec<Instanced> = Vec::new();
            let mut wireframe: Vec<Instanced> = Vec::new();
            layers.iter().for_each(|layer| {
                let render = layer.on_render();
                render.set_pipelines(&mut shaded, &mut wireframe);
            });

            render_pass.set_pipeline(&self.ctx.pipelines.shaded);
            for instanced in shaded {
                if instanced.amount == 0 || instanced.instance.size() == 0 {
                    log::warn!("you attempted to render something with zero instances");
                    continue;
                }
                render_pass.set_vertex_buffer(1, instanced.instance.slice(..));
                render_pass.draw_polyhedron_instanced(
                    instanced.polyhedron,
                    0..instanced.amount as u32,
                    &self.ctx.camera.bind_group,
                    &self.ctx.light.bind_group,
                );
            }

            render_pass.set_pipeline(&self.ctx.pipelines.wireframe);
            for instanced in wireframe {
                if instanced.amount == 0 || instanced.instance.size() == 0 {
                    log::warn!("you attempted to render something with zero instances");
                    continue;
                }
                render_pass.set_vertex_buffer(1, instanced.instance.slice(..));
                render_pass.draw_polyhedron_edges_instanced(
                    instanced.polyhedron,
                    0..instanced.amount as u32,
                    &self.ctx.camera.bind_group,
                );
            }
        }

        self.ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

pub(crate) enum AppEvent {
    #[allow(dead_code)]
    Initialized {
        state: AppState,
        layers: Vec<Box<dyn Layer>>,
    },
}

pub struct App {
    #[cfg(not(target_arch = "wasm32"))]
    async_runtime: tokio::runtime::Runtime,
    // Only the wasm init hand-off sends through the proxy
    #[allow(dead_code)]
    proxy: winit::event_loop::EventLoopProxy<AppEvent>,
    state: Option<AppState>,
    // This will hold the fully initialized layers once they are ready.
    layers: Vec<Box<dyn Layer>>,
    // This holds the constructors at the start.
    // We use Option to `take()` it after use.
    constructors: Option<Vec<LayerConstructor>>,
    pointer: PointerTracker,
    last_time: Instant,
}

impl App {
    fn new(event_loop: &EventLoop<AppEvent>, constructors: Vec<LayerConstructor>) -> Self {
        let proxy = event_loop.create_proxy();
        #[cfg(not(target_arch = "wasm32"))]
        let async_runtime = tokio::runtime::Runtime::new().unwrap();
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            async_runtime,
            proxy,
            state: None,
            layers: Vec::new(),
            constructors: Some(constructors),
            pointer: PointerTracker::new(),
            last_time: Instant::now(),
        }
    }
}

impl ApplicationHandler<AppEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes();

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            // The canvas is created here and inserted into the host
            // container, so the page markup only has to provide the
            // container itself.
            let window = wgpu::web_sys::window().unwrap_throw();
            let document = window.document().unwrap_throw();
            let container = document.get_element_by_id(CONTAINER_ID).unwrap_throw();
            let canvas = document.create_element("canvas").unwrap_throw();
            container.append_child(&canvas).unwrap_throw();
            let html_canvas_element = canvas.unchecked_into();
            window_attributes = window_attributes.with_canvas(Some(html_canvas_element));
        }

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        let constructors = self.constructors.take().unwrap();

        let init_future = async move {
            let app_state = AppState::new(window).await;

            let layer_futures: Vec<_> = constructors
                .into_iter()
                // The clone in into() leverages the internal Arcs of Device and Queue and thus only clones the ref
                .map(|constructor| constructor((&app_state.ctx).into()))
                .collect();
            // Registration order is preserved: the backdrop initializes
            // before the entrance animations.
            let layers: Vec<_> = futures::future::join_all(layer_futures).await;
            (app_state, layers)
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            let (mut app_state, layers) = self.async_runtime.block_on(init_future);
            self.layers = layers;
            self.layers
                .iter_mut()
                .for_each(|layer| layer.on_init(&mut app_state.ctx));
            self.state = Some(app_state);
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let (app_state, layers) = init_future.await;
                assert!(
                    proxy
                        .send_event(AppEvent::Initialized {
                            state: app_state,
                            layers,
                        })
                        .is_ok()
                );
            });
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::Initialized { state, layers } => {
                // This is the message from our wasm `spawn_local`
                self.state = Some(state);
                self.layers = layers;

                // Important: Trigger a resize and redraw now that we are initialized
                let app_state = self.state.as_mut().unwrap();
                let size = app_state.ctx.window.inner_size();
                let scale_factor = app_state.ctx.window.scale_factor();
                app_state.resize(size, scale_factor);
                self.layers
                    .iter_mut()
                    .for_each(|layer| layer.on_init(&mut app_state.ctx));
                app_state.ctx.window.request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        if let WindowEvent::CursorMoved {
            device_id: _,
            position,
        } = event
        {
            let size = state.ctx.window.inner_size();
            self.pointer.track(position, size.width, size.height);
        };

        self.layers
            .iter_mut()
            .for_each(|layer| layer.on_window_events(&state.ctx, &event));

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                let scale_factor = state.ctx.window.scale_factor();
                state.resize(size, scale_factor);
            }
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();

                match state.render(&self.layers) {
                    Ok(_) => {
                        let frame = FrameSnapshot {
                            dt,
                            pointer: self.pointer.snapshot(),
                        };
                        self.layers
                            .iter_mut()
                            .for_each(|layer| layer.on_frame(&state.ctx, &frame));
                    }
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::CurrentSurfaceTexture::Lost | wgpu::CurrentSurfaceTexture::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        let scale_factor = state.ctx.window.scale_factor();
                        state.resize(size, scale_factor);
                    }
                    Err(e) => {
                        log::error!("Unable to render {:?}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Start the event loop with the given layers.
///
/// Layers are constructed and initialized in registration order, then driven
/// until the window closes (native) or for the lifetime of the page (wasm).
pub fn run(constructors: Vec<LayerConstructor>) -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }

    let event_loop: EventLoop<AppEvent> = EventLoop::with_user_event().build()?;

    let mut app = App::new(&event_loop, constructors);

    event_loop.run_app(&mut app)?;

    Ok(())
}
