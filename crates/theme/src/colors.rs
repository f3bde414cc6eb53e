/// 8-bit sRGB colour as it appears in a stylesheet literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0,   g: 0,   b: 0   };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    /// Parse a CSS hex colour (`#rgb` or `#rrggbb`, leading `#` optional).
    ///
    /// Any other digit count is rejected.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };
        // `#abc` is shorthand for `#aabbcc`.
        let nibble = |s: &str| -> Option<u8> { byte(s).map(|n| n * 17) };

        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            3 => Some(Self {
                r: nibble(&hex[0..1])?,
                g: nibble(&hex[1..2])?,
                b: nibble(&hex[2..3])?,
            }),
            6 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
            }),
            _ => None,
        }
    }

    /// Perceived brightness in `[0, 1]` using Rec. 601 luma weights.
    pub fn brightness(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)) / 255.0
    }
}

/// Arguments of an `rgb(...)` / `rgba(...)` literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaArgs {
    /// `None` when the first three arguments are not plain numbers in `0..=255`.
    pub rgb:   Option<Rgb>,
    /// Fourth argument. A three-argument literal is opaque (`1.0`); an
    /// unparseable fourth argument gives `None`.
    pub alpha: Option<f64>,
}

impl RgbaArgs {
    /// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)` (case-insensitive).
    pub fn parse(literal: &str) -> Option<Self> {
        let lower = literal.trim().to_ascii_lowercase();
        let rest = lower
            .strip_prefix("rgba")
            .or_else(|| lower.strip_prefix("rgb"))?;
        let inner = rest.trim_start().strip_prefix('(')?;
        let inner = inner.strip_suffix(')').unwrap_or(inner);

        let args: Vec<&str> = inner.split(',').map(str::trim).collect();

        let channel = |s: &str| -> Option<u8> {
            let v: f64 = s.parse().ok()?;
            (0.0..=255.0).contains(&v).then(|| v.round() as u8)
        };
        let rgb = match args[..] {
            [r, g, b, ..] => channel(r)
                .zip(channel(g))
                .zip(channel(b))
                .map(|((r, g), b)| Rgb { r, g, b }),
            _ => None,
        };

        let alpha = match args.len() {
            3 => Some(1.0),
            n if n >= 4 => args[3].parse::<f64>().ok(),
            _ => None,
        };

        Some(Self { rgb, alpha })
    }
}
