use crate::error::UiError;
use crate::model::ChartSlice;
use crate::state::{PieGeometry, slice_arcs};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// The subset of a 2D context the pie renderer needs.
pub trait DrawingSurface {
    fn size(&self) -> (f64, f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), UiError>;
    fn close_path(&mut self);
    fn set_fill_style(&mut self, color: &str);
    fn fill(&mut self);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the id is unknown, not a canvas, or has no 2d context.
    pub fn resolve(document: &Document, id: &str) -> Option<Self> {
        let canvas = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl DrawingSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), UiError> {
        self.ctx.arc(x, y, radius, start, end).map_err(UiError::dom)
    }
    fn close_path(&mut self) {
        self.ctx.close_path();
    }
    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }
    fn fill(&mut self) {
        self.ctx.fill();
    }
}

/// Paints one filled wedge per slice, clockwise from 12 o'clock.
/// Returns how many wedges were drawn; zero for an all-zero input.
pub fn render_pie<S: DrawingSurface>(
    surface: &mut S,
    slices: &[ChartSlice],
    inset: f64,
) -> Result<usize, UiError> {
    let magnitudes: Vec<f64> = slices.iter().map(|s| s.magnitude).collect();
    let arcs = slice_arcs(&magnitudes)?;
    if arcs.is_empty() {
        log::debug!("pie chart skipped: total is zero");
        return Ok(0);
    }
    let (w, h) = surface.size();
    let g = PieGeometry::for_surface(w, h, inset);
    for (arc, slice) in arcs.iter().zip(slices) {
        surface.begin_path();
        surface.move_to(g.cx, g.cy);
        surface.arc(g.cx, g.cy, g.radius, arc.start, arc.end)?;
        surface.close_path();
        surface.set_fill_style(&slice.color);
        surface.fill();
    }
    Ok(arcs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScoreBreakdown;
    use std::f64::consts::PI;

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        Begin,
        MoveTo(f64, f64),
        Arc(f64, f64, f64, f64, f64),
        Close,
        Style(String),
        Fill,
    }

    struct Recorder {
        w: f64,
        h: f64,
        cmds: Vec<Cmd>,
    }

    impl Recorder {
        fn new(w: f64, h: f64) -> Self {
            Self { w, h, cmds: Vec::new() }
        }
        fn fills(&self) -> usize {
            self.cmds.iter().filter(|c| **c == Cmd::Fill).count()
        }
    }

    impl DrawingSurface for Recorder {
        fn size(&self) -> (f64, f64) {
            (self.w, self.h)
        }
        fn begin_path(&mut self) {
            self.cmds.push(Cmd::Begin);
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.cmds.push(Cmd::MoveTo(x, y));
        }
        fn arc(&mut self, x: f64, y: f64, r: f64, s: f64, e: f64) -> Result<(), UiError> {
            self.cmds.push(Cmd::Arc(x, y, r, s, e));
            Ok(())
        }
        fn close_path(&mut self) {
            self.cmds.push(Cmd::Close);
        }
        fn set_fill_style(&mut self, color: &str) {
            self.cmds.push(Cmd::Style(color.to_string()));
        }
        fn fill(&mut self) {
            self.cmds.push(Cmd::Fill);
        }
    }

    fn slices(mags: &[f64], colors: &[&str]) -> Vec<ChartSlice> {
        let colors: Vec<String> = colors.iter().map(|c| c.to_string()).collect();
        ChartSlice::zip(mags, &colors).unwrap()
    }

    #[test]
    fn draws_one_wedge_per_slice_in_order() {
        let mut r = Recorder::new(200.0, 200.0);
        let drawn = render_pie(&mut r, &slices(&[1.0, 1.0, 2.0], &["red", "green", "blue"]), 10.0)
            .unwrap();
        assert_eq!(drawn, 3);
        assert_eq!(r.fills(), 3);
        assert_eq!(
            &r.cmds[..6],
            &[
                Cmd::Begin,
                Cmd::MoveTo(100.0, 100.0),
                Cmd::Arc(100.0, 100.0, 90.0, -PI / 2.0, 0.0),
                Cmd::Close,
                Cmd::Style("red".into()),
                Cmd::Fill,
            ]
        );
        let styles: Vec<&Cmd> = r.cmds.iter().filter(|c| matches!(c, Cmd::Style(_))).collect();
        assert_eq!(styles[2], &Cmd::Style("blue".into()));
        match r.cmds[14] {
            Cmd::Arc(_, _, _, start, end) => {
                assert!((start - PI / 2.0).abs() < 1e-9);
                assert!((end - 3.0 * PI / 2.0).abs() < 1e-9);
            }
            ref other => panic!("expected arc, got {other:?}"),
        }
    }

    #[test]
    fn zero_total_draws_nothing() {
        let mut r = Recorder::new(100.0, 100.0);
        assert_eq!(render_pie(&mut r, &[], 10.0).unwrap(), 0);
        assert_eq!(render_pie(&mut r, &slices(&[0.0, 0.0], &["a", "b"]), 10.0).unwrap(), 0);
        assert!(r.cmds.is_empty());
    }

    #[test]
    fn invalid_magnitude_draws_nothing() {
        let mut r = Recorder::new(100.0, 100.0);
        let err = render_pie(&mut r, &slices(&[1.0, -1.0], &["a", "b"]), 10.0).unwrap_err();
        assert_eq!(err, UiError::InvalidMagnitude { index: 1, value: -1.0 });
        assert!(r.cmds.is_empty());
    }

    #[test]
    fn score_chart_with_no_correct_answers() {
        let mut r = Recorder::new(120.0, 80.0);
        let score = ScoreBreakdown::new(0, 5).unwrap();
        assert_eq!(render_pie(&mut r, &score.slices(), 10.0).unwrap(), 2);
        // first wedge is empty, second is the full turn
        assert_eq!(r.cmds[2], Cmd::Arc(60.0, 40.0, 30.0, -PI / 2.0, -PI / 2.0));
    }
}
