//! Scalar shaping functions applied to raw fractal noise.
//!
//! Each modifier maps a height to a new height. They always run in the order
//! of [`Modifier::ALL`]; configuration decides membership only, so enabling
//! `sqrt` and `floor` applies `sqrt` first no matter which flag was set last.

use serde::{Deserialize, Serialize};

/// Identifies one stage of the modifier pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    EaseIn,
    EaseInOutQuad,
    EaseInOutCubic,
    Logarithmic,
    InverseSqrt,
    Sqrt,
    Floor,
    LongerBeaches,
    DampenUnderwaterHeight,
    MoreWater,
}

impl Modifier {
    /// Every modifier, in application order.
    pub const ALL: [Modifier; 10] = [
        Modifier::EaseIn,
        Modifier::EaseInOutQuad,
        Modifier::EaseInOutCubic,
        Modifier::Logarithmic,
        Modifier::InverseSqrt,
        Modifier::Sqrt,
        Modifier::Floor,
        Modifier::LongerBeaches,
        Modifier::DampenUnderwaterHeight,
        Modifier::MoreWater,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Modifier::EaseIn => "ease_in",
            Modifier::EaseInOutQuad => "ease_in_out_quad",
            Modifier::EaseInOutCubic => "ease_in_out_cubic",
            Modifier::Logarithmic => "logarithmic",
            Modifier::InverseSqrt => "inverse_sqrt",
            Modifier::Sqrt => "sqrt",
            Modifier::Floor => "floor",
            Modifier::LongerBeaches => "longer_beaches",
            Modifier::DampenUnderwaterHeight => "dampen_underwater_height",
            Modifier::MoreWater => "more_water",
        }
    }

    /// Looks a modifier up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Modifier> {
        Modifier::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Applies this single stage, ignoring whether it is enabled.
    pub fn apply(self, h: f32, config: &ModifierConfig) -> f32 {
        let (_, stage) = PIPELINE[self as usize];
        stage(h, config)
    }
}

/// One pipeline stage: shapes a height using the shared parameters.
pub type Stage = fn(f32, &ModifierConfig) -> f32;

/// The pipeline, in application order. Entry `i` belongs to the modifier
/// whose discriminant is `i`.
pub const PIPELINE: [(Modifier, Stage); 10] = [
    (Modifier::EaseIn, |h, _| ease_in(h)),
    (Modifier::EaseInOutQuad, |h, _| ease_in_out_quad(h)),
    (Modifier::EaseInOutCubic, |h, _| ease_in_out_cubic(h)),
    (Modifier::Logarithmic, |h, _| logarithmic(h)),
    (Modifier::InverseSqrt, |h, _| inverse_sqrt(h)),
    (Modifier::Sqrt, |h, _| sqrt(h)),
    (Modifier::Floor, |h, _| h.floor()),
    (Modifier::LongerBeaches, |h, c| {
        longer_beaches(h, c.beach_interval, c.beach_floor, c.beach_divisor)
    }),
    (Modifier::DampenUnderwaterHeight, |h, c| {
        dampen_underwater_height(h, c.dampen_factor)
    }),
    (Modifier::MoreWater, |h, c| more_water(h, c.water_threshold)),
];

/// Enabled flags and parameters for the modifier pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierConfig {
    pub ease_in: bool,
    pub ease_in_out_quad: bool,
    pub ease_in_out_cubic: bool,
    pub logarithmic: bool,
    pub inverse_sqrt: bool,
    pub sqrt: bool,
    pub floor: bool,
    pub longer_beaches: bool,
    pub dampen_underwater_height: bool,
    pub more_water: bool,

    /// Divisor applied to heights below zero by `dampen_underwater_height`.
    pub dampen_factor: f32,
    /// Width of the band below zero that `longer_beaches` flattens.
    pub beach_interval: f32,
    /// Height the flattened beach band is raised to.
    pub beach_floor: f32,
    /// Divisor for the second band, `(-2 * interval, -interval]`.
    pub beach_divisor: f32,
    /// Heights below this are lowered by the same amount in `more_water`.
    pub water_threshold: f32,
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            ease_in: false,
            ease_in_out_quad: false,
            ease_in_out_cubic: false,
            logarithmic: false,
            inverse_sqrt: false,
            sqrt: false,
            floor: false,
            longer_beaches: false,
            dampen_underwater_height: true,
            more_water: false,
            dampen_factor: 8.0,
            beach_interval: 0.1,
            beach_floor: 0.001,
            beach_divisor: 3.0,
            water_threshold: 0.05,
        }
    }
}

impl ModifierConfig {
    /// A configuration with every stage disabled; [`apply`] is then the identity.
    pub fn none() -> Self {
        Self {
            dampen_underwater_height: false,
            ..Self::default()
        }
    }

    pub fn enabled(&self, modifier: Modifier) -> bool {
        *self.flag(modifier)
    }

    pub fn set(&mut self, modifier: Modifier, enabled: bool) {
        *self.flag_mut(modifier) = enabled;
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, modifier: Modifier, enabled: bool) -> Self {
        self.set(modifier, enabled);
        self
    }

    fn flag(&self, modifier: Modifier) -> &bool {
        match modifier {
            Modifier::EaseIn => &self.ease_in,
            Modifier::EaseInOutQuad => &self.ease_in_out_quad,
            Modifier::EaseInOutCubic => &self.ease_in_out_cubic,
            Modifier::Logarithmic => &self.logarithmic,
            Modifier::InverseSqrt => &self.inverse_sqrt,
            Modifier::Sqrt => &self.sqrt,
            Modifier::Floor => &self.floor,
            Modifier::LongerBeaches => &self.longer_beaches,
            Modifier::DampenUnderwaterHeight => &self.dampen_underwater_height,
            Modifier::MoreWater => &self.more_water,
        }
    }

    fn flag_mut(&mut self, modifier: Modifier) -> &mut bool {
        match modifier {
            Modifier::EaseIn => &mut self.ease_in,
            Modifier::EaseInOutQuad => &mut self.ease_in_out_quad,
            Modifier::EaseInOutCubic => &mut self.ease_in_out_cubic,
            Modifier::Logarithmic => &mut self.logarithmic,
            Modifier::InverseSqrt => &mut self.inverse_sqrt,
            Modifier::Sqrt => &mut self.sqrt,
            Modifier::Floor => &mut self.floor,
            Modifier::LongerBeaches => &mut self.longer_beaches,
            Modifier::DampenUnderwaterHeight => &mut self.dampen_underwater_height,
            Modifier::MoreWater => &mut self.more_water,
        }
    }
}

/// Runs every enabled modifier over `h`, in [`PIPELINE`] order.
pub fn apply(h: f32, config: &ModifierConfig) -> f32 {
    PIPELINE
        .iter()
        .filter(|(m, _)| config.enabled(*m))
        .fold(h, |h, (_, stage)| stage(h, config))
}

pub fn ease_in(h: f32) -> f32 {
    if h < 0.5 {
        2.0 * h * h - 0.1
    } else {
        -1.0 + (4.0 - 2.0 * h) * h
    }
}

pub fn ease_in_out_quad(h: f32) -> f32 {
    if h < 0.5 {
        -2.0 * h * h
    } else {
        -1.0 + 2.0 * (2.0 - h) * h
    }
}

pub fn ease_in_out_cubic(h: f32) -> f32 {
    if h < 0.5 {
        4.0 * h * h * h
    } else {
        (h - 1.0) * (2.0 * h - 2.0) * (2.0 * h - 2.0) + 1.0
    }
}

/// Subtracts `log10(h)` above 1 and collapses everything else to zero.
///
/// The collapse for `h <= 1` is long-standing output behaviour that existing
/// terrains depend on; see DESIGN.md before changing it.
pub fn logarithmic(h: f32) -> f32 {
    if h > 1.0 { h - h.log10() } else { h - h }
}

pub fn inverse_sqrt(h: f32) -> f32 {
    if h > 0.0 { h - h.sqrt() } else { h }
}

pub fn sqrt(h: f32) -> f32 {
    if h > 0.0 { h + h.sqrt() } else { h }
}

pub fn longer_beaches(h: f32, interval: f32, floor: f32, divisor: f32) -> f32 {
    if -interval < h && h < floor {
        floor
    } else if -interval * 2.0 < h && h <= -interval {
        h / divisor
    } else {
        h
    }
}

pub fn dampen_underwater_height(h: f32, factor: f32) -> f32 {
    if h < 0.0 { h / factor } else { h }
}

pub fn more_water(h: f32, threshold: f32) -> f32 {
    if h < threshold { h - threshold } else { h }
}
