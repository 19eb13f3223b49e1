//! HCL color math for the goose pen
//!
//! Goose colors are the perceptual hue/chroma/lightness triple the widgets
//! render with (`oklch`): hue in degrees [0, 360), chroma [0, 0.4],
//! lightness [0, 1]. Out-of-range channels are clamped, never rejected.

use crate::wrap_hue;

/// Upper chroma bound the widgets render.
pub const MAX_CHROMA: f32 = 0.4;

/// A hue/chroma/lightness color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hcl {
    /// Degrees, [0, 360)
    pub hue: f32,
    /// [0, MAX_CHROMA]
    pub chroma: f32,
    /// [0, 1]
    pub lightness: f32,
}

impl Hcl {
    /// Build a color, wrapping hue and clamping chroma/lightness into range.
    pub fn new(hue: f32, chroma: f32, lightness: f32) -> Self {
        Self {
            hue: wrap_hue(hue),
            chroma: chroma.clamp(0.0, MAX_CHROMA),
            lightness: lightness.clamp(0.0, 1.0),
        }
    }

    /// Mix with another color: circular-mean hue along the shorter arc of
    /// the wheel, keeping this color's chroma and lightness.
    pub fn mix(self, other: Hcl) -> Hcl {
        let diff = (other.hue - self.hue).abs();
        let hue = if diff <= 180.0 {
            (self.hue + other.hue) / 2.0
        } else {
            // Average through the 0/360 wrap.
            wrap_hue((self.hue + other.hue + 360.0) / 2.0)
        };
        Hcl { hue, ..self }
    }

    /// Apply a food effect: a bounded channel nudge or a wrapped hue shift.
    pub fn apply_food(self, kind: FoodKind) -> Hcl {
        let e = kind.effect();
        match kind {
            FoodKind::IncreaseL => Hcl {
                lightness: (self.lightness + e).min(1.0),
                ..self
            },
            FoodKind::DecreaseL => Hcl {
                lightness: (self.lightness - e).max(0.0),
                ..self
            },
            FoodKind::IncreaseC => Hcl {
                chroma: (self.chroma + e).min(MAX_CHROMA),
                ..self
            },
            FoodKind::DecreaseC => Hcl {
                chroma: (self.chroma - e).max(0.0),
                ..self
            },
            FoodKind::ShiftHCw => Hcl {
                hue: wrap_hue(self.hue + e),
                ..self
            },
            FoodKind::ShiftHCcw => Hcl {
                hue: wrap_hue(self.hue - e),
                ..self
            },
        }
    }
}

/// The starting "egg" colors offered in the tray: red, green, blue.
pub fn starting_colors() -> [Hcl; 3] {
    [
        Hcl::new(29.23, 0.628, 0.2577),
        Hcl::new(142.4953, 0.294827, 0.8664),
        Hcl::new(264.052, 0.313214, 0.452),
    ]
}

/// The six food effect types. Fixed catalog; each has a tray display color
/// and an effect magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    IncreaseL,
    DecreaseL,
    IncreaseC,
    DecreaseC,
    ShiftHCw,
    ShiftHCcw,
}

impl FoodKind {
    pub const ALL: [FoodKind; 6] = [
        FoodKind::IncreaseL,
        FoodKind::DecreaseL,
        FoodKind::IncreaseC,
        FoodKind::DecreaseC,
        FoodKind::ShiftHCw,
        FoodKind::ShiftHCcw,
    ];

    /// Effect magnitude: lightness/chroma delta, or hue shift in degrees.
    pub fn effect(self) -> f32 {
        match self {
            FoodKind::IncreaseL | FoodKind::DecreaseL => 0.1,
            FoodKind::IncreaseC | FoodKind::DecreaseC => 0.05,
            FoodKind::ShiftHCw | FoodKind::ShiftHCcw => 30.0,
        }
    }

    /// Tray display color.
    pub fn display_color(self) -> Hcl {
        match self {
            FoodKind::IncreaseL => Hcl::new(60.0, 0.2, 0.9),
            FoodKind::DecreaseL => Hcl::new(270.0, 0.2, 0.2),
            FoodKind::IncreaseC => Hcl::new(0.0, 0.3, 0.6),
            FoodKind::DecreaseC => Hcl::new(0.0, 0.05, 0.5),
            FoodKind::ShiftHCw => Hcl::new(30.0, 0.25, 0.7),
            FoodKind::ShiftHCcw => Hcl::new(330.0, 0.25, 0.7),
        }
    }

    /// Drag-data name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            FoodKind::IncreaseL => "increase_l",
            FoodKind::DecreaseL => "decrease_l",
            FoodKind::IncreaseC => "increase_c",
            FoodKind::DecreaseC => "decrease_c",
            FoodKind::ShiftHCw => "shift_h_cw",
            FoodKind::ShiftHCcw => "shift_h_ccw",
        }
    }

    /// Inverse of [`FoodKind::name`]; unknown names are `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "increase_l" => Some(FoodKind::IncreaseL),
            "decrease_l" => Some(FoodKind::DecreaseL),
            "increase_c" => Some(FoodKind::IncreaseC),
            "decrease_c" => Some(FoodKind::DecreaseC),
            "shift_h_cw" => Some(FoodKind::ShiftHCw),
            "shift_h_ccw" => Some(FoodKind::ShiftHCcw),
            _ => None,
        }
    }
}
