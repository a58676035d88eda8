//! Arc geometry for drawing the knob: track, active arc and indicator dot.
//!
//! Everything here is renderer-agnostic. [`ArcSegment`] carries the same data
//! as an SVG elliptical-arc command and can format itself as a path `d`
//! string; other renderers can read the fields directly.

use crate::angle::SweepConfig;
use crate::constants::{
    ARC_INSET, INDICATOR_DOT_STROKE_FRACTION, INDICATOR_RADIUS_FRACTION, MIN_STROKE_WIDTH,
    STROKE_SIZE_FRACTION,
};
use crate::value::Range;
use glam::DVec2;
use std::fmt::Write as _;

/// Layout of a knob inside a square of side `size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeometry {
    pub size: f64,
    pub center: DVec2,
    pub stroke_width: f64,
    /// Radius of the track and active arcs.
    pub radius: f64,
}

/// One clockwise circular arc segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    pub start: DVec2,
    pub end: DVec2,
    pub radius: f64,
    pub large_arc: bool,
    /// Always true; arcs run clockwise in screen space.
    pub clockwise: bool,
    /// Set when the segment covers the whole circle and `start == end`.
    pub full_circle: bool,
    pub center: DVec2,
}

/// Everything a renderer needs to draw the knob for one value.
#[derive(Clone, Debug, PartialEq)]
pub struct KnobGeometry {
    pub track: ArcSegment,
    pub active: ArcSegment,
    pub indicator: DVec2,
    pub indicator_radius: f64,
    pub backdrop_radius: f64,
    pub stroke_width: f64,
    pub center: DVec2,
}

impl ArcGeometry {
    pub fn new(size: f64) -> Self {
        let stroke_width = MIN_STROKE_WIDTH.max(size * STROKE_SIZE_FRACTION);
        Self {
            size,
            center: DVec2::splat(size / 2.0),
            stroke_width,
            radius: (size - stroke_width) / 2.0 - ARC_INSET,
        }
    }

    /// Point at `radius` from the center, `angle_deg` clockwise from 12 o'clock.
    #[inline]
    pub fn polar_to_xy(&self, angle_deg: f64, radius: f64) -> DVec2 {
        let rad = (angle_deg - 90.0).to_radians();
        DVec2::new(
            self.center.x + radius * rad.cos(),
            self.center.y + radius * rad.sin(),
        )
    }

    /// Clockwise arc on the main radius between two absolute angles.
    pub fn build_arc(&self, from_angle: f64, to_angle: f64) -> ArcSegment {
        let angle_diff = (to_angle - from_angle + 360.0).rem_euclid(360.0);
        ArcSegment {
            start: self.polar_to_xy(from_angle, self.radius),
            end: self.polar_to_xy(to_angle, self.radius),
            radius: self.radius,
            large_arc: angle_diff > 180.0,
            clockwise: true,
            full_circle: false,
            center: self.center,
        }
    }

    /// Clockwise arc covering `sweep` degrees from `from_angle`.
    ///
    /// Unlike [`ArcGeometry::build_arc`] this keeps a full 360° sweep
    /// distinguishable from an empty one.
    pub fn build_sweep(&self, from_angle: f64, sweep: f64) -> ArcSegment {
        let mut arc = self.build_arc(from_angle, from_angle + sweep);
        if sweep >= 360.0 {
            arc.full_circle = true;
            arc.large_arc = true;
        }
        arc
    }

    /// Static track covering the whole configured sweep.
    pub fn track(&self, sweep: &SweepConfig) -> ArcSegment {
        self.build_sweep(sweep.start_angle, sweep.total_sweep())
    }

    /// Arc from the start of the sweep to `value`.
    pub fn active(&self, sweep: &SweepConfig, range: &Range, value: f64) -> ArcSegment {
        self.build_sweep(sweep.start_angle, sweep.sweep_for_value(range, value))
    }

    pub fn indicator_point(&self, sweep: &SweepConfig, range: &Range, value: f64) -> DVec2 {
        self.polar_to_xy(
            sweep.value_to_angle(range, value),
            self.radius * INDICATOR_RADIUS_FRACTION,
        )
    }

    /// Angle of a point (in box coordinates) around the center, clockwise
    /// from 12 o'clock, in `[0, 360)`.
    pub fn angle_at(&self, point: DVec2) -> f64 {
        let rel = point - self.center;
        let mut angle = rel.y.atan2(rel.x).to_degrees() + 90.0;
        if angle < 0.0 {
            angle += 360.0;
        }
        crate::angle::wrap_degrees(angle)
    }

    pub fn knob(&self, sweep: &SweepConfig, range: &Range, value: f64) -> KnobGeometry {
        KnobGeometry {
            track: self.track(sweep),
            active: self.active(sweep, range, value),
            indicator: self.indicator_point(sweep, range, value),
            indicator_radius: self.stroke_width * INDICATOR_DOT_STROKE_FRACTION,
            backdrop_radius: self.radius - self.stroke_width / 2.0,
            stroke_width: self.stroke_width,
            center: self.center,
        }
    }
}

impl ArcSegment {
    /// SVG path data for this segment.
    ///
    /// A full circle cannot be drawn by one arc command whose endpoints
    /// coincide, so it is split at the opposite point into two half arcs.
    pub fn to_svg_path(&self) -> String {
        let large = u8::from(self.large_arc);
        let sweep = u8::from(self.clockwise);
        let r = self.radius;
        let mut d = format!("M {} {}", self.start.x, self.start.y);
        if self.full_circle {
            let opposite = self.center * 2.0 - self.start;
            _ = write!(d, " A {r} {r} 0 0 {sweep} {} {}", opposite.x, opposite.y);
            _ = write!(d, " A {r} {r} 0 0 {sweep} {} {}", self.end.x, self.end.y);
        } else {
            _ = write!(d, " A {r} {r} 0 {large} {sweep} {} {}", self.end.x, self.end.y);
        }
        d
    }
}
