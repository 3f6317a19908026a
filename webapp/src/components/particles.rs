use std::f64::consts::TAU;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use common::particles::{PARTICLE_COUNT, ParticleField, Viewport};

use crate::common::dom;

const CANVAS_ID: &str = "particle-canvas";

// roughly one frame at 60Hz
const FRAME_MS: u32 = 16;

// additive blending of a translucent blue, so clusters brighten
const PARTICLE_COLOR: &str = "rgba(0, 136, 255, 0.6)";
const BLEND_MODE: &str = "lighter";

// smallest dot worth drawing, in pixels
const MIN_RADIUS: f64 = 0.6;

struct Painter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Painter {
    fn attach(id: &str) -> anyhow::Result<Self> {
        let canvas = dom::document()?
            .get_element_by_id(id)
            .ok_or_else(|| anyhow::Error::msg(format!("no element with id {id}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| anyhow::Error::msg(format!("{id} is not a canvas")))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(dom::js_err)?
            .ok_or_else(|| anyhow::Error::msg("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| anyhow::Error::msg("2d context has the wrong type"))?;

        Ok(Painter { canvas, ctx })
    }

    // resizing a canvas clears it and resets the context state, so the blend mode
    // is reapplied whenever the window size changes
    fn fit(&self, viewport: Viewport) -> anyhow::Result<()> {
        let width = viewport.width.max(0.0) as u32;
        let height = viewport.height.max(0.0) as u32;

        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }

        self.ctx
            .set_global_composite_operation(BLEND_MODE)
            .map_err(dom::js_err)
    }

    fn draw(&self, field: &ParticleField) -> anyhow::Result<()> {
        let viewport = dom::viewport()?;
        self.fit(viewport)?;

        self.ctx.clear_rect(
            0.0,
            0.0,
            viewport.width.into(),
            viewport.height.into(),
        );
        self.ctx.set_fill_style_str(PARTICLE_COLOR);

        for point in field.project(viewport) {
            self.ctx.begin_path();
            self.ctx
                .arc(
                    point.x.into(),
                    point.y.into(),
                    f64::from(point.radius).max(MIN_RADIUS),
                    0.0,
                    TAU,
                )
                .map_err(dom::js_err)?;
            self.ctx.fill();
        }

        Ok(())
    }
}

// ParticleBackground
//
// a full-window canvas behind the page with a slowly drifting point cloud.  the
// animation runs as a component future, so it stops as soon as the component
// unmounts and the canvas goes with it
#[component]
pub fn ParticleBackground() -> Element {
    use_future(|| async move {
        // the seed only needs to differ between page loads
        let seed = chrono::Utc::now().timestamp_millis() as u64;
        let mut field = ParticleField::new(PARTICLE_COUNT, &mut SmallRng::seed_from_u64(seed));

        // the canvas is created by the same render that spawns this task, so
        // it may not be in the document on the first poll
        let painter = loop {
            match Painter::attach(CANVAS_ID) {
                Ok(painter) => break painter,
                Err(err) => {
                    debug!("waiting for particle canvas: {err}");
                    TimeoutFuture::new(FRAME_MS).await;
                }
            }
        };

        debug!("animating {} particles", field.len());

        loop {
            field.step();

            if let Err(err) = painter.draw(&field) {
                error!("stopping particle animation: {err}");
                return;
            }

            TimeoutFuture::new(FRAME_MS).await;
        }
    });

    rsx! {
        canvas { id: CANVAS_ID, class: "particle-canvas", "aria-hidden": "true" }
    }
}
