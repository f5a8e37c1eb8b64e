//! Screen-space view of a simulation for an external rasterizer.
//!
//! Nothing here draws pixels. [`render_frame`] turns the simulated bodies into
//! line segments and pivot markers in screen coordinates, and a [`Rasterizer`]
//! supplied by the caller does the drawing.

use crate::math::vec2::Vec2;
use crate::objects::{BodyId, SimulatedBody, LINE_WIDTH};
use crate::world::Simulation;

/// Camera over the world: `screen = world * zoom + view_position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub view_position: Vec2,
}

impl Viewport {
    pub fn new(zoom: f64, view_position: Vec2) -> Self {
        Self { zoom, view_position }
    }

    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world * self.zoom + self.view_position
    }

    /// Outline stroke width at this zoom, in whole pixels.
    pub fn line_width(&self) -> u32 {
        (LINE_WIDTH * self.zoom).round().max(0.0) as u32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, Vec2::ZERO)
    }
}

/// Pixel size of the pivot icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSize {
    pub width: u32,
    pub height: u32,
}

impl MarkerSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLine {
    pub start: Vec2,
    pub end: Vec2,
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotMarker {
    pub body: BodyId,
    pub slot: usize,
    /// Screen position of the pivot itself.
    pub center: Vec2,
    /// Where to place the icon's top-left corner so it is centred on the pivot.
    pub top_left: Vec2,
}

/// Everything to draw for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    pub lines: Vec<ScreenLine>,
    pub markers: Vec<PivotMarker>,
}

impl RenderFrame {
    /// Feeds the frame to a rasterizer: all lines first, then markers on top.
    pub fn draw<R: Rasterizer + ?Sized>(&self, rasterizer: &mut R) {
        for line in &self.lines {
            rasterizer.draw_line(line);
        }
        for marker in &self.markers {
            rasterizer.draw_marker(marker);
        }
    }
}

/// Drawing backend supplied by the host application.
pub trait Rasterizer {
    fn draw_line(&mut self, line: &ScreenLine);
    fn draw_marker(&mut self, marker: &PivotMarker);
}

/// Projects the visible bodies through their simulated transforms onto the screen.
pub fn render_frame(bodies: &[SimulatedBody], viewport: &Viewport, marker: MarkerSize) -> RenderFrame {
    let mut frame = RenderFrame::default();
    let width = viewport.line_width();
    let icon_offset = Vec2::new(f64::from(marker.width / 2), f64::from(marker.height / 2));

    for (id, simulated) in bodies.iter().enumerate() {
        if !simulated.body.visible {
            continue;
        }
        let to_screen = |local: Vec2| viewport.to_screen(simulated.state.to_world(local));

        frame.lines.extend(simulated.body.outline.iter().map(|segment| ScreenLine {
            start: to_screen(segment.a),
            end: to_screen(segment.b),
            width,
        }));

        frame.markers.extend(simulated.body.live_pivots().map(|(slot, pivot)| {
            let center = to_screen(pivot.point);
            PivotMarker {
                body: id,
                slot,
                center,
                top_left: center - icon_offset,
            }
        }));
    }

    frame
}

impl Simulation {
    /// Screen-space primitives for the current state. Does not modify the simulation.
    pub fn render_frame(&self, viewport: &Viewport, marker: MarkerSize) -> RenderFrame {
        render_frame(self.bodies(), viewport, marker)
    }
}
