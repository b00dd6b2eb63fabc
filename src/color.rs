use crate::activity::SubPhase;

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

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Shading for peak-activity days.
pub const ACTIVITY_RED: Rgb = Rgb::new(0xd9, 0x53, 0x4f);

/// Shading for moderate-activity days.
pub const ACTIVITY_GREEN: Rgb = Rgb::new(0x5c, 0xb8, 0x5c);

/// Channel-wise linear interpolation from `c1` to `c2`.
///
/// Each channel is `round(c1 + factor * (c2 - c1))`. A factor of 0
/// reproduces `c1` exactly and 1 reproduces `c2` exactly. The factor is not
/// clamped; [`color_for`] only ever derives factors inside [0, 1].
pub fn blend(c1: Rgb, c2: Rgb, factor: f32) -> Rgb {
    let channel = |a: u8, b: u8| (a as f32 + factor * (b as f32 - a as f32)).round() as u8;
    Rgb::new(
        channel(c1.r, c2.r),
        channel(c1.g, c2.g),
        channel(c1.b, c2.b),
    )
}

/// Map a classification to its day shading. `None` means the day keeps the
/// neutral default styling.
///
/// The two windows ramp differently: a waxing crescent opens red, cools to
/// green, then ramps back toward red over days 5 and 6; a waxing gibbous
/// opens green and ramps to red by day 5. The thresholds are folklore, not
/// derived from a model.
pub fn color_for(sub_phase: SubPhase, day_index: i32) -> Option<Rgb> {
    match sub_phase {
        SubPhase::WaxingCrescent => match day_index {
            i if i <= 0 => None,
            1 | 2 => Some(ACTIVITY_RED),
            3 | 4 => Some(ACTIVITY_GREEN),
            5 | 6 => Some(blend(
                ACTIVITY_GREEN,
                ACTIVITY_RED,
                (day_index - 4) as f32 / 2.0,
            )),
            _ => Some(ACTIVITY_RED),
        },
        SubPhase::WaxingGibbous => match day_index {
            i if i <= 0 => None,
            1 | 2 => Some(ACTIVITY_GREEN),
            3 | 4 => Some(blend(
                ACTIVITY_GREEN,
                ACTIVITY_RED,
                (day_index - 2) as f32 / 2.0,
            )),
            _ => Some(ACTIVITY_RED),
        },
        SubPhase::None => None,
    }
}
