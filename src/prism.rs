use crate::dom;
use card_core::{Stripe, StripeCanvas, SurfaceSize};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The prism overlay canvas and its 2D context.
pub struct CanvasPrism {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPrism {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Resize the backing store and scale the context so drawing happens in
    /// CSS pixels.
    pub fn resize(&self, size: SurfaceSize) {
        dom::sync_canvas_backing_size(&self.canvas, size);
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        _ = self.ctx.scale(size.dpr as f64, size.dpr as f64);
    }
}

impl StripeCanvas for CanvasPrism {
    fn clear(&mut self, size: SurfaceSize) {
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn fill_stripe(&mut self, stripe: &Stripe) {
        let half_len = stripe.length as f64 / 2.0;
        let half_wid = stripe.width as f64 / 2.0;
        self.ctx.save();
        _ = self
            .ctx
            .translate(stripe.center.x as f64, stripe.center.y as f64);
        _ = self.ctx.rotate(stripe.angle as f64);
        let grad = self.ctx.create_linear_gradient(0.0, -half_len, 0.0, half_len);
        for stop in stripe.stops() {
            _ = grad.add_color_stop(stop.offset, &stop.css());
        }
        #[allow(deprecated)]
        self.ctx.set_fill_style(&grad);
        self.ctx
            .fill_rect(-half_wid, -half_len, stripe.width as f64, stripe.length as f64);
        self.ctx.restore();
    }
}
