//! CSS transform string builder
//!
//! Transform sub-properties are edited one at a time but must be composed
//! into a single `transform` declaration. Composition follows a fixed order
//! and normalizes units per property family.

use std::collections::BTreeMap;

/// A tracked transform sub-property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransformProperty {
    Perspective,
    TranslateX,
    TranslateY,
    TranslateZ,
    RotateX,
    RotateY,
    RotateZ,
    Rotate,
    ScaleX,
    ScaleY,
    ScaleZ,
    Scale,
    SkewX,
    SkewY,
}

impl TransformProperty {
    /// Every property, in composition order
    pub const ALL: [TransformProperty; 14] = [
        TransformProperty::Perspective,
        TransformProperty::TranslateX,
        TransformProperty::TranslateY,
        TransformProperty::TranslateZ,
        TransformProperty::RotateX,
        TransformProperty::RotateY,
        TransformProperty::RotateZ,
        TransformProperty::Rotate,
        TransformProperty::ScaleX,
        TransformProperty::ScaleY,
        TransformProperty::ScaleZ,
        TransformProperty::Scale,
        TransformProperty::SkewX,
        TransformProperty::SkewY,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TransformProperty::Perspective => "perspective",
            TransformProperty::TranslateX => "translateX",
            TransformProperty::TranslateY => "translateY",
            TransformProperty::TranslateZ => "translateZ",
            TransformProperty::RotateX => "rotateX",
            TransformProperty::RotateY => "rotateY",
            TransformProperty::RotateZ => "rotateZ",
            TransformProperty::Rotate => "rotate",
            TransformProperty::ScaleX => "scaleX",
            TransformProperty::ScaleY => "scaleY",
            TransformProperty::ScaleZ => "scaleZ",
            TransformProperty::Scale => "scale",
            TransformProperty::SkewX => "skewX",
            TransformProperty::SkewY => "skewY",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    fn family(&self) -> Family {
        match self {
            TransformProperty::Perspective => Family::Perspective,
            TransformProperty::TranslateX
            | TransformProperty::TranslateY
            | TransformProperty::TranslateZ => Family::Translate,
            TransformProperty::RotateX
            | TransformProperty::RotateY
            | TransformProperty::RotateZ
            | TransformProperty::Rotate
            | TransformProperty::SkewX
            | TransformProperty::SkewY => Family::Angle,
            TransformProperty::ScaleX
            | TransformProperty::ScaleY
            | TransformProperty::ScaleZ
            | TransformProperty::Scale => Family::Scale,
        }
    }
}

impl std::fmt::Display for TransformProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

enum Family {
    Perspective,
    Translate,
    Angle,
    Scale,
}

/// Raw edited values keyed by property
///
/// Ordered by the enum, which is also the composition order.
pub type TransformMap = BTreeMap<TransformProperty, String>;

/// Compose `transforms` into a CSS transform value
///
/// Absent properties are skipped. Values are never validated; malformed
/// numbers pass through as-is.
pub fn build_transform(transforms: &TransformMap) -> String {
    TransformProperty::ALL
        .iter()
        .filter_map(|prop| {
            transforms
                .get(prop)
                .map(|raw| format!("{}({})", prop.name(), normalize(*prop, raw)))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize(prop: TransformProperty, raw: &str) -> String {
    match prop.family() {
        Family::Scale => {
            if raw.contains('%') {
                match leading_number(raw) {
                    Some(n) => (n / 100.0).to_string(),
                    None => raw.to_string(),
                }
            } else {
                raw.to_string()
            }
        }
        Family::Angle => {
            let value = raw.replacen('°', "", 1);
            if value.contains("deg") {
                value
            } else {
                format!("{value}deg")
            }
        }
        Family::Translate => {
            if ["px", "%", "em", "rem"].iter().any(|unit| raw.contains(unit)) {
                raw.to_string()
            } else {
                format!("{raw}px")
            }
        }
        Family::Perspective => {
            if raw == "none" || raw.contains("px") {
                raw.to_string()
            } else {
                format!("{raw}px")
            }
        }
    }
}

/// Longest numeric prefix of `raw`, e.g. `93` for `"93%"`
pub fn leading_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(entries: &[(&str, &str)]) -> String {
        let map = entries
            .iter()
            .map(|(name, value)| {
                (
                    TransformProperty::from_name(name).expect("known property"),
                    value.to_string(),
                )
            })
            .collect();
        build_transform(&map)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(build(&[]), "");
    }

    #[test]
    fn test_scale_percent_and_plain() {
        assert_eq!(build(&[("scale", "0.93")]), "scale(0.93)");
        assert_eq!(build(&[("scale", "93%")]), "scale(0.93)");
        assert_eq!(build(&[("scaleX", "120%")]), "scaleX(1.2)");
        assert_eq!(build(&[("scaleY", "100%")]), "scaleY(1)");
    }

    #[test]
    fn test_angles() {
        assert_eq!(build(&[("rotate", "45deg")]), "rotate(45deg)");
        assert_eq!(build(&[("rotate", "45°")]), "rotate(45deg)");
        assert_eq!(build(&[("rotate", "45")]), "rotate(45deg)");
        assert_eq!(build(&[("skewX", "-33°")]), "skewX(-33deg)");
        assert_eq!(build(&[("rotateZ", "0")]), "rotateZ(0deg)");
    }

    #[test]
    fn test_translate_units() {
        assert_eq!(build(&[("translateX", "10")]), "translateX(10px)");
        assert_eq!(build(&[("translateX", "10%")]), "translateX(10%)");
        assert_eq!(build(&[("translateY", "2rem")]), "translateY(2rem)");
        assert_eq!(build(&[("translateZ", "-4px")]), "translateZ(-4px)");
    }

    #[test]
    fn test_perspective() {
        assert_eq!(build(&[("perspective", "3")]), "perspective(3px)");
        assert_eq!(build(&[("perspective", "none")]), "perspective(none)");
        assert_eq!(build(&[("perspective", "800px")]), "perspective(800px)");
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(
            build(&[("skewY", "2"), ("scale", "120%"), ("rotate", "10deg"), ("translateX", "50")]),
            "translateX(50px) rotate(10deg) scale(1.2) skewY(2deg)"
        );
        assert_eq!(
            build(&[("rotate", "1"), ("rotateX", "2"), ("perspective", "4")]),
            "perspective(4px) rotateX(2deg) rotate(1deg)"
        );
    }

    #[test]
    fn test_malformed_values_pass_through() {
        assert_eq!(build(&[("translateX", "abc")]), "translateX(abcpx)");
        assert_eq!(build(&[("scale", "big%")]), "scale(big%)");
    }

    #[test]
    fn test_empty_value_is_kept() {
        assert_eq!(build(&[("translateX", "")]), "translateX(px)");
        assert_eq!(
            build(&[("rotate", ""), ("scale", "50%")]),
            "rotate(deg) scale(0.5)"
        );
    }

    #[test]
    fn test_names_round_trip() {
        for prop in TransformProperty::ALL {
            assert_eq!(TransformProperty::from_name(prop.name()), Some(prop));
        }
        assert_eq!(TransformProperty::from_name("opacity"), None);
        assert_eq!(TransformProperty::from_name("transform"), None);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("93%"), Some(93.0));
        assert_eq!(leading_number("-12.5%"), Some(-12.5));
        assert_eq!(leading_number("%"), None);
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;
        use proptest::sample::subsequence;

        proptest! {
            #[test]
            fn tokens_follow_canonical_order(
                picked in subsequence(TransformProperty::ALL.to_vec(), 0..=14)
                    .prop_shuffle(),
                value in -500i32..500,
            ) {
                let map: TransformMap = picked
                    .iter()
                    .map(|p| (*p, value.to_string()))
                    .collect();
                let output = build_transform(&map);

                let emitted: Vec<&str> = output
                    .split(' ')
                    .filter(|t| !t.is_empty())
                    .filter_map(|t| t.split('(').next())
                    .collect();
                let expected: Vec<&str> = TransformProperty::ALL
                    .iter()
                    .filter(|p| picked.contains(p))
                    .map(|p| p.name())
                    .collect();
                prop_assert_eq!(emitted, expected);
            }

            #[test]
            fn degree_sign_and_bare_number_agree(n in -180i32..=180) {
                let mut bare = TransformMap::new();
                bare.insert(TransformProperty::Rotate, n.to_string());
                let mut degree = TransformMap::new();
                degree.insert(TransformProperty::Rotate, format!("{n}°"));
                prop_assert_eq!(build_transform(&bare), build_transform(&degree));
            }
        }
    }
}
