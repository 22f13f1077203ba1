//! DOM binding for the entrance animations and the wasm entry point.
//!
//! This is the only module that touches the document. It binds elements by
//! role, feeds their viewport-relative geometry into the entrance core every
//! frame, writes the computed styles back, and keeps the navigation bar's
//! scrolled class in sync through an unthrottled scroll listener.
//!
//! The host page calls [`start_page`] once its structural content has
//! loaded (a `DOMContentLoaded` handler is the usual place). Initialization
//! is all-or-nothing: a missing host container or navigation bar aborts with
//! an error surfaced to the page's default error channel.

use anyhow::anyhow;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Document, HtmlElement};
use winit::event::WindowEvent;

use crate::{
    app,
    backdrop::BackdropLayer,
    context::{Context, InitContext},
    entrance::{
        Entrance, EntranceStyle, Role, StyleDelta, Viewport, nav_scrolled, plan::entrance_for,
        trigger::ElementMetrics,
    },
    layer::{FrameSnapshot, Layer, LayerConstructor},
    render::Render,
};

/// Id of the navigation bar element.
pub const NAVBAR_ID: &str = "navbar";
/// Class carried by the navigation bar while the page is scrolled down.
pub const NAV_SCROLLED_CLASS: &str = "scrolled";

/// One element together with its entrance animation.
struct BoundEntrance {
    element: HtmlElement,
    entrance: Entrance,
}

/// The layer driving all DOM entrance animations.
pub struct EntranceLayer {
    bindings: Vec<BoundEntrance>,
}

impl EntranceLayer {
    pub async fn new(_init: InitContext) -> Self {
        let window = web_sys::window().expect("no window to animate in");
        let document = window.document().expect("no document to animate in");
        let bindings = Self::bind(&document).expect("entrance registration failed");
        Self::register_nav_listener(&document).expect("navbar registration failed");
        Self { bindings }
    }

    /// Query every role's elements and pair them with their entrances.
    ///
    /// Empty role sets are fine (a page without a timeline simply has no
    /// timeline entrances); a selector matching a non-HTML element is not.
    fn bind(document: &Document) -> anyhow::Result<Vec<BoundEntrance>> {
        let mut bindings = Vec::new();
        for role in Role::ALL {
            let list = document
                .query_selector_all(role.selector())
                .map_err(|e| anyhow!("invalid selector {}: {:?}", role.selector(), e))?;
            for index in 0..list.length() {
                let Some(node) = list.item(index) else {
                    continue;
                };
                let element: HtmlElement = node
                    .dyn_into()
                    .map_err(|_| anyhow!("{} matched a non-HTML element", role.selector()))?;
                bindings.push(BoundEntrance {
                    element,
                    entrance: entrance_for(role, index as usize),
                });
            }
        }
        Ok(bindings)
    }

    /// Keep the navigation bar's scrolled class in sync with the scroll
    /// offset.
    ///
    /// Unthrottled on purpose: the threshold check is cheap and applying the
    /// class is idempotent. The listener lives for the lifetime of the page
    /// and is never unregistered.
    fn register_nav_listener(document: &Document) -> anyhow::Result<()> {
        let navbar = document
            .get_element_by_id(NAVBAR_ID)
            .ok_or_else(|| anyhow!("missing #{} element", NAVBAR_ID))?;
        let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;

        let listener_window = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            let scroll_y = listener_window.scroll_y().unwrap_or(0.0) as f32;
            let class_list = navbar.class_list();
            if nav_scrolled(scroll_y) {
                class_list.add_1(NAV_SCROLLED_CLASS).unwrap_throw();
            } else {
                class_list.remove_1(NAV_SCROLLED_CLASS).unwrap_throw();
            }
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("could not register scroll listener: {:?}", e))?;
        closure.forget();
        Ok(())
    }

    fn viewport() -> Viewport {
        let window = web_sys::window().unwrap_throw();
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
        Viewport { height, scroll_y }
    }

    fn apply(element: &HtmlElement, delta: &StyleDelta) {
        let style = element.style();
        style
            .set_property(
                "transform",
                &format!(
                    "translate({}px, {}px) scale({})",
                    delta.dx, delta.dy, delta.scale
                ),
            )
            .unwrap_throw();
        style
            .set_property("opacity", &delta.opacity.to_string())
            .unwrap_throw();
    }

    fn clear(element: &HtmlElement) {
        let style = element.style();
        style.remove_property("transform").unwrap_throw();
        style.remove_property("opacity").unwrap_throw();
    }
}

impl Layer for EntranceLayer {
    fn on_init(&mut self, _: &mut Context) {
        log::info!("registered {} entrance animations", self.bindings.len());
    }

    fn on_window_events(&mut self, _: &Context, _: &WindowEvent) {}

    fn on_frame(&mut self, _: &Context, frame: &FrameSnapshot) {
        let viewport = Self::viewport();
        let dt = frame.dt.as_secs_f32();
        for binding in &mut self.bindings {
            let metrics = ElementMetrics {
                top: binding.element.get_bounding_client_rect().top() as f32,
            };
            match binding.entrance.tick(dt, Some(&metrics), &viewport) {
                EntranceStyle::Apply(delta) => Self::apply(&binding.element, &delta),
                EntranceStyle::Clear => Self::clear(&binding.element),
                EntranceStyle::Idle => (),
            }
        }
    }

    fn on_render(&self) -> Render<'_> {
        Render::None
    }
}

/// Start the page decoration: the backdrop first, then the entrance
/// animations, in one shared event loop.
///
/// Call exactly once per page load, after the document structure is ready.
#[wasm_bindgen(js_name = startPage)]
pub fn start_page() -> Result<(), JsValue> {
    let backdrop: LayerConstructor = Box::new(|init| {
        Box::pin(async move { Box::new(BackdropLayer::new(init).await) as Box<dyn Layer> })
    });
    let entrance: LayerConstructor = Box::new(|init| {
        Box::pin(async move { Box::new(EntranceLayer::new(init).await) as Box<dyn Layer> })
    });
    app::run(vec![backdrop, entrance]).map_err(|e| JsValue::from_str(&e.to_string()))
}
