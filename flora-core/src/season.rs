//! Seasonal color palettes and their interpolation.
//!
//! The season fraction `t` runs from spring (`0.0`) through summer and
//! autumn to winter (`1.0`); [`colors`] blends the two neighbouring
//! palettes channel by channel.

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend from `a` to `b`, each channel rounded to the nearest integer.
    pub fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
        let t = f64::from(t.clamp(0.0, 1.0));
        let mix = |x: u8, y: u8| -> u8 {
            let v = f64::from(x) + (f64::from(y) - f64::from(x)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }

    /// Bottom color of the sky gradient whose top is `self`.
    pub fn darken_gradient(self) -> Rgb {
        Rgb::new(
            self.r.saturating_sub(30),
            self.g.saturating_sub(20),
            self.b.saturating_sub(10),
        )
    }

    /// Multiplies every channel by `factor`, truncating.
    pub fn scale(self, factor: f32) -> Rgb {
        let f = |c: u8| (f32::from(c) * factor).clamp(0.0, 255.0) as u8;
        Rgb::new(f(self.r), f(self.g), f(self.b))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub trunk: Rgb,
    pub branch: Rgb,
    pub leaves: Vec<Rgb>,
    pub background: Rgb,
    pub ground: Rgb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Season containing fraction `t`, split into equal quarters.
    pub fn at(t: f32) -> Season {
        if t < 0.25 {
            Season::Spring
        } else if t < 0.5 {
            Season::Summer
        } else if t < 0.75 {
            Season::Autumn
        } else {
            Season::Winter
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "🌸 Spring",
            Season::Summer => "🌿 Summer",
            Season::Autumn => "🍂 Autumn",
            Season::Winter => "❄️ Winter",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Season::Spring => Palette {
                trunk: Rgb::new(101, 67, 33),
                branch: Rgb::new(139, 90, 43),
                leaves: vec![
                    Rgb::new(144, 238, 144),
                    Rgb::new(152, 251, 152),
                    Rgb::new(255, 182, 193),
                    Rgb::new(255, 192, 203),
                    Rgb::new(221, 160, 221),
                ],
                background: Rgb::new(240, 248, 255),
                ground: Rgb::new(124, 252, 0),
            },
            Season::Summer => Palette {
                trunk: Rgb::new(92, 64, 51),
                branch: Rgb::new(119, 85, 51),
                leaves: vec![
                    Rgb::new(34, 139, 34),
                    Rgb::new(0, 128, 0),
                    Rgb::new(50, 205, 50),
                    Rgb::new(60, 179, 113),
                    Rgb::new(46, 139, 87),
                ],
                background: Rgb::new(135, 206, 235),
                ground: Rgb::new(34, 139, 34),
            },
            Season::Autumn => Palette {
                trunk: Rgb::new(85, 55, 35),
                branch: Rgb::new(110, 75, 45),
                leaves: vec![
                    Rgb::new(255, 140, 0),
                    Rgb::new(255, 165, 0),
                    Rgb::new(255, 69, 0),
                    Rgb::new(218, 165, 32),
                    Rgb::new(205, 92, 92),
                    Rgb::new(178, 34, 34),
                ],
                background: Rgb::new(255, 228, 196),
                ground: Rgb::new(210, 180, 140),
            },
            Season::Winter => Palette {
                trunk: Rgb::new(75, 60, 50),
                branch: Rgb::new(100, 80, 60),
                leaves: vec![
                    Rgb::new(169, 169, 169),
                    Rgb::new(192, 192, 192),
                    Rgb::new(139, 119, 101),
                    Rgb::new(160, 140, 120),
                ],
                background: Rgb::new(220, 230, 240),
                ground: Rgb::new(245, 245, 245),
            },
        }
    }
}

/// Season fractions bound to the number keys `1` to `4`.
pub const SEASON_PRESETS: [f32; 4] = [0.0, 0.33, 0.66, 1.0];

/// Blends two palettes; leaf lists are paired up to the shorter length.
pub fn lerp_palette(a: &Palette, b: &Palette, t: f32) -> Palette {
    Palette {
        trunk: Rgb::lerp(a.trunk, b.trunk, t),
        branch: Rgb::lerp(a.branch, b.branch, t),
        leaves: a
            .leaves
            .iter()
            .zip(&b.leaves)
            .map(|(&x, &y)| Rgb::lerp(x, y, t))
            .collect(),
        background: Rgb::lerp(a.background, b.background, t),
        ground: Rgb::lerp(a.ground, b.ground, t),
    }
}

/// Palette for season fraction `t`.
///
/// `t` is clamped to `[0, 1]` and scaled onto the four seasons; the result
/// blends season `floor(t * 3)` with its successor (winter blends with
/// itself).
///
/// ### Parameters
/// - `t` - Season fraction, `0` = spring, `1` = winter.
///
/// ### Returns
/// The interpolated [`Palette`].
pub fn colors(t: f32) -> Palette {
    let last = Season::ALL.len() - 1;
    let scaled = t.clamp(0.0, 1.0) * last as f32;
    let first = (scaled.floor() as usize).min(last);
    let second = (first + 1).min(last);
    let blend = scaled - first as f32;

    lerp_palette(
        &Season::ALL[first].palette(),
        &Season::ALL[second].palette(),
        blend,
    )
}

pub fn season_name(t: f32) -> &'static str {
    Season::at(t).name()
}
