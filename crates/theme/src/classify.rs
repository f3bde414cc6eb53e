//! Context-based mapping of colour literals to palette variables.
//!
//! Each literal is checked against [`RULES`] in order. The first rule whose
//! guard matches decides the outcome, including "leave unchanged".

use crate::colors::{Rgb, RgbaArgs};
use std::fmt;

/// Palette variables a literal can be replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    BarBg,
    MainBg,
    MainFg,
    ActiveBg,
    ActiveFg,
    HoverBg,
    HoverFg,
    AccentDark,
    AccentMedium,
    AccentLight,
}

impl Variable {
    /// The variable as written in a GTK stylesheet.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BarBg        => "@bar-bg",
            Self::MainBg       => "@main-bg",
            Self::MainFg       => "@main-fg",
            Self::ActiveBg     => "@wb-act-bg",
            Self::ActiveFg     => "@wb-act-fg",
            Self::HoverBg      => "@wb-hvr-bg",
            Self::HoverFg      => "@wb-hvr-fg",
            Self::AccentDark   => "@wallbash_1xa3",
            Self::AccentMedium => "@wallbash_1xa5",
            Self::AccentLight  => "@wallbash_1xa7",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::BarBg        => "Transparent bar background",
            Self::MainBg       => "Primary background",
            Self::MainFg       => "Primary foreground/text",
            Self::ActiveBg     => "Active background",
            Self::ActiveFg     => "Active foreground",
            Self::HoverBg      => "Hover background",
            Self::HoverFg      => "Hover foreground",
            Self::AccentDark   => "Dark accent",
            Self::AccentMedium => "Medium accent",
            Self::AccentLight  => "Light accent",
        }
    }

    /// Accent tier for a brightness in `[0, 1]`.
    pub fn accent_for(brightness: f64) -> Self {
        if brightness < 0.3 {
            Self::AccentDark
        } else if brightness < 0.6 {
            Self::AccentMedium
        } else {
            Self::AccentLight
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A colour literal found in a stylesheet.
#[derive(Debug, Clone, Copy)]
pub enum Literal {
    /// `#rgb` / `#rrggbb`. `None` if the digits do not form a colour.
    Hex(Option<Rgb>),
    Rgba(RgbaArgs),
}

impl Literal {
    /// Recognise `text` as a hex or `rgb(a)` literal.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.starts_with('#') {
            Some(Self::Hex(Rgb::from_hex(text)))
        } else {
            RgbaArgs::parse(text).map(Self::Rgba)
        }
    }

    fn alpha(&self) -> Option<f64> {
        match self {
            Self::Rgba(args) => args.alpha,
            Self::Hex(_) => None,
        }
    }

    fn is_hex(&self, rgb: Rgb) -> bool {
        matches!(self, Self::Hex(Some(c)) if *c == rgb)
    }

    fn is_rgba(&self, rgb: Rgb) -> bool {
        matches!(self, Self::Rgba(RgbaArgs { rgb: Some(c), .. }) if *c == rgb)
    }

    fn is_black(&self) -> bool {
        self.is_hex(Rgb::BLACK) || self.is_rgba(Rgb::BLACK)
    }

    fn is_white(&self) -> bool {
        self.is_hex(Rgb::WHITE) || self.is_rgba(Rgb::WHITE)
    }

    /// Only hex literals take part in brightness bucketing.
    fn hex_brightness(&self) -> Option<f64> {
        match self {
            Self::Hex(Some(rgb)) => Some(rgb.brightness()),
            _ => None,
        }
    }

    fn accent(&self) -> Option<Variable> {
        self.hex_brightness().map(Variable::accent_for)
    }
}

/// Lower-cased text preceding a literal.
#[derive(Debug, Clone)]
pub struct Context {
    lower: String,
}

impl Context {
    pub fn new(text: &str) -> Self {
        Self { lower: text.to_lowercase() }
    }

    fn mentions(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.lower.contains(k))
    }

    fn is_background(&self) -> bool {
        self.mentions(&["background", "bg"])
    }

    fn pick(&self, background: Variable, foreground: Variable) -> Variable {
        if self.is_background() {
            background
        } else {
            foreground
        }
    }
}

/// A guard plus the decision taken when the guard matches.
pub struct Rule {
    pub name: &'static str,
    when:     fn(&Literal, &Context) -> bool,
    then:     fn(&Literal, &Context) -> Option<Variable>,
}

/// Classification rules in priority order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "near-transparent",
        when: |lit, _| lit.alpha().is_some_and(|a| a < 0.1),
        then: |_, _| Some(Variable::BarBg),
    },
    Rule {
        name: "black",
        when: |lit, _| {
            lit.is_hex(Rgb::BLACK)
                || (lit.is_rgba(Rgb::BLACK) && lit.alpha().is_some_and(|a| a >= 0.9))
        },
        then: |_, ctx| Some(ctx.pick(Variable::MainBg, Variable::MainFg)),
    },
    Rule {
        // The palette has no white background role; white always maps to text.
        name: "white",
        when: |lit, _| lit.is_white(),
        then: |_, _| Some(Variable::MainFg),
    },
    Rule {
        name: "active",
        when: |_, ctx| ctx.mentions(&["active", "act"]),
        then: |_, ctx| Some(ctx.pick(Variable::ActiveBg, Variable::ActiveFg)),
    },
    Rule {
        name: "hover",
        when: |_, ctx| ctx.mentions(&["hover", "hvr"]),
        then: |_, ctx| Some(ctx.pick(Variable::HoverBg, Variable::HoverFg)),
    },
    Rule {
        name: "background",
        when: |_, ctx| ctx.is_background(),
        then: |lit, _| {
            if lit.is_black() {
                Some(Variable::MainBg)
            } else if lit.alpha().is_some_and(|a| a < 0.1) {
                Some(Variable::BarBg)
            } else {
                lit.accent()
            }
        },
    },
    Rule {
        name: "foreground",
        when: |_, ctx| ctx.mentions(&["color", "fg"]),
        then: |lit, _| {
            if lit.is_white() {
                Some(Variable::MainFg)
            } else {
                lit.accent()
            }
        },
    },
    Rule {
        name: "border",
        when: |_, ctx| ctx.mentions(&["border"]),
        then: |lit, _| {
            if lit.is_black() || lit.is_white() {
                Some(Variable::MainFg)
            } else {
                lit.accent()
            }
        },
    },
    Rule {
        // Without a keyword only clear accents are touched, not near-black
        // or near-white.
        name: "accent",
        when: |_, _| true,
        then: |lit, _| {
            lit.hex_brightness()
                .filter(|b| *b > 0.1 && *b < 0.95)
                .map(Variable::accent_for)
        },
    },
];

/// Suggest a palette variable for `literal` given the text before it.
///
/// `None` means the literal should be left as is.
pub fn suggest_variable(literal: &str, context: &str) -> Option<Variable> {
    let lit = Literal::parse(literal)?;
    let ctx = Context::new(context);

    let rule = RULES.iter().find(|rule| (rule.when)(&lit, &ctx))?;
    let variable = (rule.then)(&lit, &ctx);
    tracing::trace!(literal, rule = rule.name, ?variable, "classified colour literal");
    variable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_transparent_wins_everywhere() {
        for ctx in ["", "background-color: ", "color: ", "border: 1px solid ", ":hover { color: "] {
            assert_eq!(suggest_variable("rgba(0,0,0,0.05)", ctx), Some(Variable::BarBg));
        }
        assert_eq!(suggest_variable("rgba(255, 0, 0, 0.0)", "border: "), Some(Variable::BarBg));
    }

    #[test]
    fn black_depends_on_background_context() {
        assert_eq!(suggest_variable("#000000", "background-color:"), Some(Variable::MainBg));
        assert_eq!(suggest_variable("#000", "color: "), Some(Variable::MainFg));
        assert_eq!(suggest_variable("rgba(0, 0, 0, 0.95)", "bg: "), Some(Variable::MainBg));
        assert_eq!(suggest_variable("rgb(0, 0, 0)", "text-shadow: 0 0 2px "), Some(Variable::MainFg));
    }

    #[test]
    fn white_background_maps_to_foreground() {
        assert_eq!(suggest_variable("#ffffff", "background-color:"), Some(Variable::MainFg));
        assert_eq!(suggest_variable("#FFF", "color: "), Some(Variable::MainFg));
        assert_eq!(suggest_variable("rgba(255, 255, 255, 0.3)", "background: "), Some(Variable::MainFg));
    }

    #[test]
    fn active_and_hover_split_on_background() {
        assert_eq!(suggest_variable("#89b4fa", "button.active { background: "), Some(Variable::ActiveBg));
        assert_eq!(suggest_variable("#89b4fa", "#workspaces button.active { color: "), Some(Variable::ActiveFg));
        assert_eq!(suggest_variable("#89b4fa", "button:hover { background-color: "), Some(Variable::HoverBg));
        assert_eq!(suggest_variable("rgba(10, 20, 30, 0.5)", "button:hover { color: "), Some(Variable::HoverFg));
    }

    #[test]
    fn background_accent_buckets() {
        assert_eq!(suggest_variable("#3a3a3a", "background: "), Some(Variable::AccentDark));
        assert_eq!(suggest_variable("#808080", "background: "), Some(Variable::AccentMedium));
        assert_eq!(suggest_variable("#d0d0d0", "background: "), Some(Variable::AccentLight));
        // Translucent black in a background keeps the background role.
        assert_eq!(suggest_variable("rgba(0, 0, 0, 0.5)", "background: "), Some(Variable::MainBg));
        // Other rgba colours have no bucket.
        assert_eq!(suggest_variable("rgba(30, 30, 46, 0.8)", "background: "), None);
        // Only pure black channels count as black.
        assert_eq!(suggest_variable("rgba(20, 0, 0, 0.5)", "background: "), None);
        assert_eq!(suggest_variable("rgba(0,0,0,0.5)", "background-color: "), Some(Variable::MainBg));
    }

    #[test]
    fn color_context_uses_brightness() {
        assert_eq!(suggest_variable("#3a3a3a", "color: "), Some(Variable::AccentDark));
        assert_eq!(suggest_variable("#f5c2e7", "fg "), Some(Variable::AccentLight));
        assert_eq!(suggest_variable("#abcd", "color: "), None);
    }

    #[test]
    fn buckets_split_exactly_at_thresholds() {
        assert_eq!(suggest_variable("#03f353", "color: "), Some(Variable::AccentMedium));
        assert_eq!(suggest_variable("#186c34", "color: "), Some(Variable::AccentDark));
        assert_eq!(Variable::accent_for(0.3), Variable::AccentMedium);
        assert_eq!(Variable::accent_for(0.6), Variable::AccentLight);
    }

    #[test]
    fn border_context() {
        assert_eq!(suggest_variable("#585b70", "border: 2px solid "), Some(Variable::AccentMedium));
        assert_eq!(suggest_variable("rgba(88, 91, 112, 1)", "border: 2px solid "), None);
    }

    #[test]
    fn fallback_only_touches_clear_accents() {
        assert_eq!(suggest_variable("#123456", "  "), Some(Variable::AccentDark));
        assert_eq!(suggest_variable("#0a0a0a", "  "), None);
        assert_eq!(suggest_variable("#fafafa", "  "), None);
        assert_eq!(suggest_variable("#cba6f7", "@define-accent "), Some(Variable::AccentLight));
        assert_eq!(suggest_variable("rgba(30, 30, 46, 0.8)", "  "), None);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert_eq!(suggest_variable("#000", "BACKGROUND: "), Some(Variable::MainBg));
    }

    #[test]
    fn variable_names_are_stylesheet_references() {
        assert_eq!(Variable::BarBg.to_string(), "@bar-bg");
        assert_eq!(Variable::AccentMedium.to_string(), "@wallbash_1xa5");
        assert!(RULES.iter().all(|r| !r.name.is_empty()));
    }
}
