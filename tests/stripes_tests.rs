// Host-side tests for the prism stripe layout and renderer.

use card_core::constants::*;
use card_core::*;

#[derive(Default)]
struct RecordingCanvas {
    clears: Vec<SurfaceSize>,
    stripes: Vec<Stripe>,
}

impl StripeCanvas for RecordingCanvas {
    fn clear(&mut self, size: SurfaceSize) {
        self.clears.push(size);
        self.stripes.clear();
    }

    fn fill_stripe(&mut self, stripe: &Stripe) {
        self.stripes.push(*stripe);
    }
}

fn centered_params(density: f32) -> StripeParams {
    StripeParams {
        density,
        prism_strength: 0.45,
        light: Vec2::new(150.0, 210.0),
        light_strength: 1.0,
        hover: 1.0,
    }
}

#[test]
fn stripes_only_draw_near_the_light() {
    let params = centered_params(6.0);
    let stripes = layout(300.0, 420.0, &params);
    assert!(!stripes.is_empty());
    let half_diag = Vec2::new(300.0, 420.0).length() * 0.5;
    for s in &stripes {
        let normalized = 1.0 - (s.center.distance(params.light) / half_diag).min(1.0);
        assert!(normalized >= STRIPE_MIN_PROXIMITY);
        assert!(s.alpha > STRIPE_MIN_ALPHA);
        assert_eq!(s.angle, -std::f32::consts::FRAC_PI_4);
    }
}

#[test]
fn stripe_geometry_scales_with_density() {
    let s = layout(300.0, 420.0, &centered_params(6.0))[0];
    assert_eq!(s.length, 60.0);
    assert_eq!(s.width, 1.5);

    // Low densities hit the minimum sizes
    let s = layout(300.0, 420.0, &centered_params(2.0))[0];
    assert_eq!(s.length, STRIPE_MIN_LENGTH);
    assert_eq!(s.width, STRIPE_MIN_WIDTH);
}

#[test]
fn candidates_sit_on_the_offset_grid() {
    let density = 7.5;
    let step = density * STRIPE_STEP_PER_DENSITY;
    for s in layout(300.0, 420.0, &centered_params(density)) {
        let gx = (s.center.x - step * STRIPE_OFFSET_X) / step;
        let gy = (s.center.y - step * STRIPE_OFFSET_Y) / step;
        assert!((gx - gx.round()).abs() < 1e-4, "x {} off grid", s.center.x);
        assert!((gy - gy.round()).abs() < 1e-4, "y {} off grid", s.center.y);
    }
}

#[test]
fn alpha_follows_strength_and_hover() {
    let params = centered_params(6.0);
    let near = layout(300.0, 420.0, &params);
    let brightest = near.iter().map(|s| s.alpha).fold(0.0, f32::max);
    assert!(brightest <= 0.45 * (0.12 + 0.55) + 1e-6);

    let dim = StripeParams {
        hover: 0.0,
        ..params
    };
    let dim_max = layout(300.0, 420.0, &dim)
        .iter()
        .map(|s| s.alpha)
        .fold(0.0, f32::max);
    assert!((dim_max - brightest * 0.3).abs() < 1e-5);
}

#[test]
fn faint_stripes_are_skipped() {
    let params = StripeParams {
        density: 6.0,
        prism_strength: 0.1,
        light: Vec2::new(150.0, 210.0),
        light_strength: 0.0,
        hover: 0.0,
    };
    // 0.1 · 0.12 · 0.3 is well under the alpha floor
    assert!(layout(300.0, 420.0, &params).is_empty());
}

#[test]
fn empty_surface_lays_out_nothing() {
    assert!(layout(0.0, 420.0, &centered_params(6.0)).is_empty());
    assert!(layout(300.0, 420.0, &centered_params(0.0)).is_empty());
}

#[test]
fn gradient_stops_run_white_cyan_pink_white() {
    let stripe = Stripe {
        center: Vec2::ZERO,
        angle: STRIPE_ANGLE_RAD,
        length: 60.0,
        width: 1.5,
        alpha: 0.5,
    };
    let stops = stripe.stops();
    assert_eq!(stops[0].css(), "rgba(255,255,255,0.300)");
    assert_eq!(stops[1].css(), "rgba(120,220,255,0.450)");
    assert_eq!(stops[2].css(), "rgba(255,180,220,0.450)");
    assert_eq!(stops[3].css(), "rgba(255,255,255,0.300)");
    let offsets: Vec<f32> = stops.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![0.0, 0.35, 0.65, 1.0]);
}

#[test]
fn surface_size_backing_store() {
    let size = SurfaceSize::new(301.0, 421.0, 1.5);
    assert_eq!(size.backing(), (452, 632));
    let size = SurfaceSize::new(100.0, 50.0, 0.0);
    assert_eq!(size.dpr, 1.0);
    assert_eq!(size.backing(), (100, 50));
    assert!(SurfaceSize::new(-5.0, 10.0, 1.0).is_empty());
}

#[test]
fn renderer_needs_a_size_before_painting() {
    let renderer = StripeRenderer::default();
    let mut canvas = RecordingCanvas::default();
    let drawn = renderer.paint(&ChannelVector::NEUTRAL, &Settings::default(), &mut canvas);
    assert_eq!(drawn, 0);
    assert!(canvas.clears.is_empty());
}

#[test]
fn renderer_clears_every_frame_and_respects_look() {
    let mut renderer = StripeRenderer::default();
    renderer.resize(SurfaceSize::new(300.0, 420.0, 2.0));
    let mut canvas = RecordingCanvas::default();

    let mut state = ChannelVector::NEUTRAL;
    state.hover = 1.0;
    let mut settings = Settings::default();
    let drawn = renderer.paint(&state, &settings, &mut canvas);
    assert!(drawn > 0);
    assert_eq!(canvas.stripes.len(), drawn);
    assert_eq!(canvas.clears.len(), 1);

    settings.look = Look::Standard;
    let drawn = renderer.paint(&state, &settings, &mut canvas);
    assert_eq!(drawn, 0);
    assert!(canvas.stripes.is_empty());
    assert_eq!(canvas.clears.len(), 2);
}

#[test]
fn light_position_comes_from_state_percentages() {
    let mut state = ChannelVector::NEUTRAL;
    state.light_x = 25.0;
    state.light_y = 100.0;
    let size = SurfaceSize::new(200.0, 400.0, 1.0);
    let params = StripeParams::from_state(&state, &Settings::default(), size);
    assert_eq!(params.light, Vec2::new(50.0, 400.0));
    assert_eq!(params.density, 6.0);
    assert_eq!(params.prism_strength, 0.45);
}

#[test]
fn engine_paints_from_smoothed_state() {
    let mut engine = Engine::new(Settings::default(), PresetRegistry::builtin(), 3);
    engine
        .update(
            Message::Resized(SurfaceSize::new(300.0, 420.0, 1.0)),
            &mut NullSink,
        )
        .unwrap();
    let mut canvas = RecordingCanvas::default();
    engine.tick(0.0, &mut NullSink);
    let drawn = engine.paint_stripes(&mut canvas);
    assert_eq!(drawn, canvas.stripes.len());
    assert_eq!(canvas.clears.len(), 1);
}

#[test]
fn tiny_density_falls_back_to_the_minimum_step() {
    let params = centered_params(1e-6);
    let stripes = layout(300.0, 420.0, &params);
    let coarsest = layout(300.0, 420.0, &centered_params(6.0));
    assert_eq!(stripes.len(), coarsest.len());
    for s in &stripes {
        let gx = (s.center.x - STRIPE_MIN_STEP * STRIPE_OFFSET_X) / STRIPE_MIN_STEP;
        assert!((gx - gx.round()).abs() < 1e-4, "x {} off grid", s.center.x);
    }
}

#[test]
fn engine_clamps_density_before_painting() {
    let settings = Settings {
        prism_density: 0.02,
        ..Settings::default()
    };
    let mut engine = Engine::new(settings, PresetRegistry::builtin(), 3);
    assert_eq!(engine.settings().prism_density, 6.0);
    engine
        .update(
            Message::Resized(SurfaceSize::new(300.0, 420.0, 1.0)),
            &mut NullSink,
        )
        .unwrap();
    engine.tick(0.0, &mut NullSink);
    let mut canvas = RecordingCanvas::default();
    let drawn = engine.paint_stripes(&mut canvas);
    let grid = (300.0 / STRIPE_MIN_STEP + 2.0) * (420.0 / STRIPE_MIN_STEP + 2.0);
    assert!((drawn as f32) <= grid);
}
