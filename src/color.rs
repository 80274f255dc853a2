/// Linear RGB triple in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([1.0, 1.0, 1.0]);

    pub const fn hex(value: u32) -> Self {
        Rgb([
            ((value >> 16) & 0xff) as f32 / 255.0,
            ((value >> 8) & 0xff) as f32 / 255.0,
            (value & 0xff) as f32 / 255.0,
        ])
    }

    pub fn to_array(self) -> [f32; 3] {
        self.0
    }
}

/// The muted stone palette of the page background.
pub mod stone {
    use super::Rgb;

    pub const CREAM: Rgb = Rgb::hex(0xf2f1f0);
    pub const PEWTER: Rgb = Rgb::hex(0xc0c9cc);
    pub const SAGE: Rgb = Rgb::hex(0xa39d92);
    pub const GUNMETAL: Rgb = Rgb::hex(0x636059);
    pub const DARK_GUNMETAL: Rgb = Rgb::hex(0x3a3833);
}

/// Cyan/indigo palette used behind the about section.
pub mod neon {
    use super::Rgb;

    pub const CYAN: Rgb = Rgb::hex(0x00ffff);
    pub const SKY: Rgb = Rgb::hex(0x0099ff);
    pub const COBALT: Rgb = Rgb::hex(0x3366ff);
    pub const VIOLET: Rgb = Rgb::hex(0x6633ff);
    pub const TEAL: Rgb = Rgb::hex(0x4dd0e1);
}

/// Terminal greens used by the skills scene.
pub mod matrix {
    use super::Rgb;

    pub const MINT: Rgb = Rgb::hex(0xb0c9b8);
    pub const INDIGO: Rgb = Rgb::hex(0x2d1674);
    pub const SEAFOAM: Rgb = Rgb::hex(0xafc8c4);
    pub const LICHEN: Rgb = Rgb::hex(0xcfd6c2);
}

/// Pick from `palette` using a uniform sample `u` in `0..1`, weighted by the
/// cumulative thresholds in `cutoffs` (the last entry catches the rest).
pub fn weighted(palette: &[Rgb], cutoffs: &[f32], u: f32) -> Rgb {
    palette
        .iter()
        .zip(cutoffs)
        .find(|(_, cut)| u < **cut)
        .map(|(c, _)| *c)
        .or_else(|| palette.last().copied())
        .unwrap_or(Rgb::WHITE)
}
