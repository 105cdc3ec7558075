//! Sky chart rendering.
//!
//! The chart is an azimuthal projection of the sky dome: the zenith is the
//! centre, the horizon the outer ring, north is up and east is right. Radius
//! grows linearly with zenith angle.
//!
//! Whole-hour path samples carry their hour as a small bitmap numeral. The
//! time, city, bearing and elevation labels are not drawn into the image;
//! [`Scene::caption`] returns them as text for the caller to print.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, TimeZone};
use image::{Rgb, RgbImage};
use log::info;

use crate::error::Result;
use crate::types::{SkySample, SunAngles};

pub const CHART_SIZE: u32 = 600;
/// Horizon radius in pixels.
pub const CHART_RADIUS: f64 = 260.0;
pub const SUN_RADIUS: f64 = 14.0;
/// Pixels per glyph cell.
pub const GLYPH_SCALE: u32 = 2;
/// Offset of an hour label's top-left corner from its marker.
pub const LABEL_OFFSET: (f64, f64) = (6.0, -5.0);
pub const DEFAULT_OUTPUT: &str = "out.png";

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const DOME: Rgb<u8> = Rgb([204, 224, 245]);
pub const INK: Rgb<u8> = Rgb([0, 0, 0]);
pub const NORTH: Rgb<u8> = Rgb([220, 20, 20]);
pub const GOLD: Rgb<u8> = Rgb([255, 215, 0]);

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLabels {
    pub time: String,
    pub city: String,
    pub bearing: i32,
    pub elevation: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub sun: SunAngles,
    pub path: Vec<SkySample>,
    pub labels: SceneLabels,
}

impl Scene {
    pub fn new<Tz: TimeZone>(
        sun: SunAngles,
        path: Vec<SkySample>,
        time: &DateTime<Tz>,
        city: &str,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            sun,
            path,
            labels: SceneLabels {
                time: time.format("%H:%M %m-%d-%Y").to_string(),
                city: city.to_string(),
                bearing: sun.bearing_degrees(),
                elevation: sun.elevation_degrees(),
            },
        }
    }

    pub fn caption(&self) -> String {
        format!(
            "Time: {}\nCity: {}\nBearing: {} deg\nElevation: {} deg",
            self.labels.time, self.labels.city, self.labels.bearing, self.labels.elevation
        )
    }
}

/// Pixel position of a sky direction on the chart.
pub fn chart_point(theta: f64, phi: f64) -> (f64, f64) {
    let center = CHART_SIZE as f64 / 2.0;
    let r = CHART_RADIUS * phi / std::f64::consts::FRAC_PI_2;
    (center + r * theta.cos(), center - r * theta.sin())
}

fn put(img: &mut RgbImage, x: f64, y: f64, color: Rgb<u8>) {
    let (x, y) = (x.round(), y.round());
    if x >= 0.0 && y >= 0.0 && x < img.width() as f64 && y < img.height() as f64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_line(img: &mut RgbImage, from: (f64, f64), to: (f64, f64), color: Rgb<u8>) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let f = i as f64 / steps as f64;
        put(
            img,
            from.0 + (to.0 - from.0) * f,
            from.1 + (to.1 - from.1) * f,
            color,
        );
    }
}

fn draw_dashed(img: &mut RgbImage, from: (f64, f64), to: (f64, f64), color: Rgb<u8>) {
    let len = ((to.0 - from.0).powi(2) + (to.1 - from.1).powi(2)).sqrt();
    let dashes = (len / 8.0).ceil().max(1.0) as u32;
    for d in (0..dashes).step_by(2) {
        let a = d as f64 / dashes as f64;
        let b = ((d + 1) as f64 / dashes as f64).min(1.0);
        draw_line(
            img,
            (from.0 + (to.0 - from.0) * a, from.1 + (to.1 - from.1) * a),
            (from.0 + (to.0 - from.0) * b, from.1 + (to.1 - from.1) * b),
            color,
        );
    }
}

fn fill_circle(img: &mut RgbImage, center: (f64, f64), radius: f64, color: Rgb<u8>) {
    let r = radius.ceil() as i64;
    for dy in -r..=r {
        for dx in -r..=r {
            let (fx, fy) = (dx as f64, dy as f64);
            if fx * fx + fy * fy <= radius * radius {
                put(img, center.0 + fx, center.1 + fy, color);
            }
        }
    }
}

/// 3x5 numerals, one byte per row, bit 2 is the leftmost column.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

pub fn label_origin(marker: (f64, f64)) -> (f64, f64) {
    (marker.0 + LABEL_OFFSET.0, marker.1 + LABEL_OFFSET.1)
}

fn draw_number(img: &mut RgbImage, origin: (f64, f64), value: u32, color: Rgb<u8>) {
    let scale = GLYPH_SCALE as f64;
    for (i, ch) in value.to_string().bytes().enumerate() {
        let glyph = DIGITS[(ch - b'0') as usize];
        let x0 = origin.0 + i as f64 * 4.0 * scale;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..3u32 {
                if bits & (0b100 >> col) == 0 {
                    continue;
                }
                for dy in 0..GLYPH_SCALE {
                    for dx in 0..GLYPH_SCALE {
                        put(
                            img,
                            x0 + (col * GLYPH_SCALE + dx) as f64,
                            origin.1 + (row as u32 * GLYPH_SCALE + dy) as f64,
                            color,
                        );
                    }
                }
            }
        }
    }
}

fn draw_ring(img: &mut RgbImage, center: (f64, f64), radius: f64, color: Rgb<u8>) {
    let steps = (std::f64::consts::TAU * radius).ceil() as u32 * 2;
    for i in 0..steps {
        let a = std::f64::consts::TAU * i as f64 / steps as f64;
        put(img, center.0 + radius * a.cos(), center.1 - radius * a.sin(), color);
    }
}

pub fn render(scene: &Scene) -> RgbImage {
    let mut img = RgbImage::from_pixel(CHART_SIZE, CHART_SIZE, BACKGROUND);
    let c = CHART_SIZE as f64 / 2.0;
    let center = (c, c);

    fill_circle(&mut img, center, CHART_RADIUS, DOME);
    draw_ring(&mut img, center, CHART_RADIUS, INK);
    draw_line(&mut img, (c - CHART_RADIUS, c), (c + CHART_RADIUS, c), INK);
    draw_line(&mut img, center, (c, c + CHART_RADIUS), INK);
    draw_line(&mut img, center, (c, c - CHART_RADIUS), NORTH);
    fill_circle(&mut img, (c, c - CHART_RADIUS - 14.0), 5.0, NORTH);

    let mut previous: Option<(f64, f64)> = None;
    for sample in &scene.path {
        if !sample.angles.is_above_horizon() {
            previous = None;
            continue;
        }
        let p = chart_point(sample.angles.theta, sample.angles.phi);
        if let Some(prev) = previous {
            draw_line(&mut img, prev, p, GOLD);
        }
        previous = Some(p);
    }
    for sample in scene.path.iter().filter(|s| s.minute == 0) {
        if sample.angles.is_above_horizon() {
            let p = chart_point(sample.angles.theta, sample.angles.phi);
            fill_circle(&mut img, p, 2.5, INK);
            draw_number(&mut img, label_origin(p), sample.hour, INK);
        }
    }

    if scene.sun.is_above_horizon() {
        let sun = chart_point(scene.sun.theta, scene.sun.phi);
        let ground = chart_point(scene.sun.theta, std::f64::consts::FRAC_PI_2);
        draw_dashed(&mut img, ground, sun, INK);
        draw_line(&mut img, center, sun, INK);
        fill_circle(&mut img, sun, SUN_RADIUS, GOLD);
    }
    img
}

pub fn save(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    render(scene).save(path)?;
    info!("sky chart written to {}", path.display());
    Ok(())
}

/// Text rendition of the above-horizon part of a path.
pub fn path_table(samples: &[SkySample]) -> String {
    let mut out = String::from(" time  bearing  elevation\n");
    for s in samples.iter().filter(|s| s.angles.is_above_horizon()) {
        let _ = writeln!(
            out,
            "{:02}:{:02}  {:>7.1}  {:>9.1}",
            s.hour, s.minute, s.angles.bearing, s.angles.elevation
        );
    }
    out
}
