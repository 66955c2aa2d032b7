// src/render/colormap.rs
//! Color maps used for index and mask panels, sampled from matplotlib.

/// RGB color with 0..=255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Position `t` in [0, 1] mapped to a color.
#[derive(Debug, Clone, Copy)]
struct ColorStop {
    t: f32,
    color: Rgb,
}

impl ColorStop {
    const fn new(t: f32, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            color: Rgb::new(r, g, b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMap {
    /// Red -> Yellow -> Green, for vegetation
    RdYlGn,
    /// White -> dark blue, for water
    Blues,
    /// White -> dark orange, for built-up
    Oranges,
    /// Black -> White
    Gray,
    /// Black -> Red -> Yellow -> White
    Hot,
}

impl ColorMap {
    pub const ALL: [ColorMap; 5] = [
        ColorMap::RdYlGn,
        ColorMap::Blues,
        ColorMap::Oranges,
        ColorMap::Gray,
        ColorMap::Hot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorMap::RdYlGn => "RdYlGn",
            ColorMap::Blues => "Blues",
            ColorMap::Oranges => "Oranges",
            ColorMap::Gray => "gray",
            ColorMap::Hot => "hot",
        }
    }

    /// Color at normalized position `t`; values outside [0, 1] are clamped.
    pub fn evaluate(&self, t: f32) -> Rgb {
        match self {
            ColorMap::RdYlGn => multi_stop(RDYLGN_STOPS, t),
            ColorMap::Blues => multi_stop(BLUES_STOPS, t),
            ColorMap::Oranges => multi_stop(ORANGES_STOPS, t),
            ColorMap::Gray => {
                let v = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
                Rgb::new(v, v, v)
            }
            ColorMap::Hot => multi_stop(HOT_STOPS, t),
        }
    }
}

const RDYLGN_STOPS: &[ColorStop] = &[
    ColorStop::new(0.0, 165, 0, 38),
    ColorStop::new(0.1, 215, 48, 39),
    ColorStop::new(0.2, 244, 109, 67),
    ColorStop::new(0.3, 253, 174, 97),
    ColorStop::new(0.4, 254, 224, 139),
    ColorStop::new(0.5, 255, 255, 191),
    ColorStop::new(0.6, 217, 239, 139),
    ColorStop::new(0.7, 166, 217, 106),
    ColorStop::new(0.8, 102, 189, 99),
    ColorStop::new(0.9, 26, 152, 80),
    ColorStop::new(1.0, 0, 104, 55),
];

const BLUES_STOPS: &[ColorStop] = &[
    ColorStop::new(0.000, 247, 251, 255),
    ColorStop::new(0.125, 222, 235, 247),
    ColorStop::new(0.250, 198, 219, 239),
    ColorStop::new(0.375, 158, 202, 225),
    ColorStop::new(0.500, 107, 174, 214),
    ColorStop::new(0.625, 66, 146, 198),
    ColorStop::new(0.750, 33, 113, 181),
    ColorStop::new(0.875, 8, 81, 156),
    ColorStop::new(1.000, 8, 48, 107),
];

const ORANGES_STOPS: &[ColorStop] = &[
    ColorStop::new(0.000, 255, 245, 235),
    ColorStop::new(0.125, 254, 230, 206),
    ColorStop::new(0.250, 253, 208, 162),
    ColorStop::new(0.375, 253, 174, 107),
    ColorStop::new(0.500, 253, 141, 60),
    ColorStop::new(0.625, 241, 105, 19),
    ColorStop::new(0.750, 217, 72, 1),
    ColorStop::new(0.875, 166, 54, 3),
    ColorStop::new(1.000, 127, 39, 4),
];

const HOT_STOPS: &[ColorStop] = &[
    ColorStop::new(0.000, 10, 0, 0),
    ColorStop::new(0.365, 255, 0, 0),
    ColorStop::new(0.746, 255, 255, 0),
    ColorStop::new(1.000, 255, 255, 255),
];

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp_color(c1: Rgb, c2: Rgb, t: f32) -> Rgb {
    Rgb::new(
        lerp(c1.r as f32, c2.r as f32, t).round() as u8,
        lerp(c1.g as f32, c2.g as f32, t).round() as u8,
        lerp(c1.b as f32, c2.b as f32, t).round() as u8,
    )
}

fn multi_stop(stops: &[ColorStop], t: f32) -> Rgb {
    if t <= 0.0 {
        return stops[0].color;
    }
    if t >= 1.0 {
        return stops[stops.len() - 1].color;
    }
    for i in 1..stops.len() {
        if t <= stops[i].t {
            let ratio = (t - stops[i - 1].t) / (stops[i].t - stops[i - 1].t);
            return lerp_color(stops[i - 1].color, stops[i].color, ratio);
        }
    }
    stops[stops.len() - 1].color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rdylgn_endpoints_and_center() {
        assert_eq!(ColorMap::RdYlGn.evaluate(0.0), Rgb::new(165, 0, 38));
        assert_eq!(ColorMap::RdYlGn.evaluate(0.5), Rgb::new(255, 255, 191));
        assert_eq!(ColorMap::RdYlGn.evaluate(1.0), Rgb::new(0, 104, 55));
    }

    #[test]
    fn gray_ramp() {
        assert_eq!(ColorMap::Gray.evaluate(0.0), Rgb::new(0, 0, 0));
        assert_eq!(ColorMap::Gray.evaluate(0.5), Rgb::new(128, 128, 128));
        assert_eq!(ColorMap::Gray.evaluate(1.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn out_of_range_is_clamped() {
        for map in ColorMap::ALL {
            assert_eq!(map.evaluate(-3.0), map.evaluate(0.0), "{}", map.name());
            assert_eq!(map.evaluate(7.0), map.evaluate(1.0), "{}", map.name());
        }
    }

    #[test]
    fn interpolates_between_stops() {
        // halfway between (255, 0, 0) at 0.365 and (255, 255, 0) at 0.746
        let c = ColorMap::Hot.evaluate(0.5555);
        assert_eq!(c.r, 255);
        assert!(c.g > 120 && c.g < 135, "got {:?}", c);
        assert_eq!(c.b, 0);
    }
}
