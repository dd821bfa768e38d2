//! Data types and property grammars known to [`CssGrammar`](super::CssGrammar).

use crate::value::{Component, Node};

/// A terminal data type checked against a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Primitive {
    Length,
    Percentage,
    LengthPercentage,
    Number,
    Integer,
    Angle,
    String,
    CustomIdent,
    Url,
    Color,
    Image,
}

/// Inclusive numeric bounds from `<type [min,max]>`. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Range {
    pub(crate) min: f32,
    pub(crate) max: f32,
}

impl Range {
    fn contains(range: Option<Range>, value: f32) -> bool {
        range.is_none_or(|r| r.min <= value && value <= r.max)
    }
}

impl Primitive {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "length" => Primitive::Length,
            "percentage" => Primitive::Percentage,
            "length-percentage" => Primitive::LengthPercentage,
            "number" => Primitive::Number,
            "integer" => Primitive::Integer,
            "angle" => Primitive::Angle,
            "string" => Primitive::String,
            "custom-ident" => Primitive::CustomIdent,
            "url" => Primitive::Url,
            "color" => Primitive::Color,
            "image" => Primitive::Image,
            _ => return None,
        })
    }

    fn is_numeric(self) -> bool {
        matches!(
            self,
            Primitive::Length
                | Primitive::Percentage
                | Primitive::LengthPercentage
                | Primitive::Number
                | Primitive::Integer
                | Primitive::Angle
        )
    }

    /// Whether `node` is a value of this type within `range`.
    ///
    /// Math functions satisfy any numeric type; their result is not checked
    /// against the range.
    pub(crate) fn matches(self, range: Option<Range>, node: &Node) -> bool {
        if self.is_numeric() && is_math_function(node) {
            return true;
        }
        match self {
            Primitive::Length => length(node).is_some_and(|v| Range::contains(range, v)),
            Primitive::Percentage => percentage(node).is_some_and(|v| Range::contains(range, v)),
            Primitive::LengthPercentage => length(node)
                .or_else(|| percentage(node))
                .is_some_and(|v| Range::contains(range, v)),
            Primitive::Number => number(node).is_some_and(|v| Range::contains(range, v)),
            Primitive::Integer => matches!(
                node,
                Node::Opaque(Component::Number(n)) if n.int_value.is_some() && Range::contains(range, n.value)
            ),
            Primitive::Angle => angle(node).is_some_and(|v| Range::contains(range, v)),
            Primitive::String => matches!(node, Node::Opaque(Component::String(_))),
            Primitive::CustomIdent => {
                matches!(node, Node::Ident(name) if !is_reserved_ident(name))
            }
            Primitive::Url => is_url(node),
            Primitive::Color => is_color(node),
            Primitive::Image => is_image(node),
        }
    }
}

/// Grammars of the non-terminal types used by the expanders.
pub(crate) fn type_definition(name: &str) -> Option<&'static str> {
    Some(match name {
        "line-width" => "<length [0,∞]> | thin | medium | thick",
        "line-style" => "none | hidden | dotted | dashed | solid | double | groove | ridge | inset | outset",
        "absolute-size" => "xx-small | x-small | small | medium | large | x-large | xx-large | xxx-large",
        "relative-size" => "larger | smaller",
        "font-weight-absolute" => "normal | bold | <number [1,1000]>",
        "generic-family" => {
            "serif | sans-serif | cursive | fantasy | monospace | system-ui | emoji | math | fangsong \
             | ui-serif | ui-sans-serif | ui-monospace | ui-rounded"
        }
        "family-name" => "<string> | <custom-ident>+",
        _ => return None,
    })
}

/// Grammars of the longhand properties referenced as `<'name'>`.
pub(crate) fn property_definition(name: &str) -> Option<&'static str> {
    Some(match name {
        "border-image-source" => "none | <image>",
        "border-image-slice" => "[ <number [0,∞]> | <percentage [0,∞]> ]{1,4} && fill?",
        "border-image-width" => "[ <length-percentage [0,∞]> | <number [0,∞]> | auto ]{1,4}",
        "border-image-outset" => "[ <length [0,∞]> | <number [0,∞]> ]{1,4}",
        "border-image-repeat" => "[ stretch | repeat | round | space ]{1,2}",
        "font-style" => "normal | italic | oblique <angle [-90deg,90deg]>?",
        "font-weight" => "<font-weight-absolute> | bolder | lighter",
        "font-size" => "<absolute-size> | <relative-size> | <length-percentage [0,∞]> | math",
        "line-height" => "normal | <number [0,∞]> | <length-percentage [0,∞]>",
        "font-family" => "[ <family-name> | <generic-family> ]#",
        "text-decoration-line" => {
            "none | [ underline || overline || line-through || blink ] | spelling-error | grammar-error"
        }
        "text-decoration-style" => "solid | double | dotted | dashed | wavy",
        "text-decoration-color" => "<color>",
        "text-emphasis-style" => {
            "none | [ [ filled | open ] || [ dot | circle | double-circle | triangle | sesame ] ] | <string>"
        }
        "text-emphasis-color" => "<color>",
        _ => return None,
    })
}

/// Units that make a dimension a `<length>`.
const LENGTH_UNITS: &[&str] = &[
    "px", "cm", "mm", "q", "in", "pt", "pc", "em", "rem", "ex", "rex", "cap", "rcap", "ch", "rch",
    "ic", "ric", "lh", "rlh", "vw", "vh", "vi", "vb", "vmin", "vmax", "svw", "svh", "svi", "svb",
    "svmin", "svmax", "lvw", "lvh", "lvi", "lvb", "lvmin", "lvmax", "dvw", "dvh", "dvi", "dvb",
    "dvmin", "dvmax", "cqw", "cqh", "cqi", "cqb", "cqmin", "cqmax",
];

/// Functions that stand in for any numeric type.
const MATH_FUNCTIONS: &[&str] = &[
    "calc", "min", "max", "clamp", "round", "mod", "rem", "sin", "cos", "tan", "asin", "acos",
    "atan", "atan2", "pow", "sqrt", "hypot", "log", "exp", "abs", "sign",
];

/// Functional `<color>` notations.
const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color", "color-mix",
    "light-dark", "device-cmyk",
];

/// Functions producing an `<image>`.
const IMAGE_FUNCTIONS: &[&str] = &[
    "url", "src", "image", "image-set", "-webkit-image-set", "cross-fade", "element", "paint",
    "linear-gradient", "radial-gradient", "conic-gradient", "repeating-linear-gradient",
    "repeating-radial-gradient", "repeating-conic-gradient", "-webkit-linear-gradient",
    "-webkit-radial-gradient", "-webkit-repeating-linear-gradient",
    "-webkit-repeating-radial-gradient", "-webkit-gradient",
];

/// Keywords that can never be a `<custom-ident>`.
const RESERVED_IDENTS: &[&str] = &["initial", "inherit", "unset", "revert", "revert-layer", "default"];

const NAMED_COLORS: &[&str] = &[
    // named colors
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
    // special and system colors
    "transparent", "currentcolor", "canvas", "canvastext", "linktext", "visitedtext",
    "activetext", "buttonface", "buttontext", "buttonborder", "field", "fieldtext", "highlight",
    "highlighttext", "selecteditem", "selecteditemtext", "mark", "marktext", "graytext",
    "accentcolor", "accentcolortext",
];

fn contains_ignore_case(list: &[&str], name: &str) -> bool {
    list.iter().any(|item| item.eq_ignore_ascii_case(name))
}

fn is_function(node: &Node, names: &[&str]) -> bool {
    matches!(node, Node::Opaque(Component::Function { name, .. }) if contains_ignore_case(names, name))
}

fn is_math_function(node: &Node) -> bool {
    is_function(node, MATH_FUNCTIONS)
}

fn is_reserved_ident(name: &str) -> bool {
    contains_ignore_case(RESERVED_IDENTS, name)
}

fn length(node: &Node) -> Option<f32> {
    match node {
        Node::Opaque(Component::Dimension(n, unit)) if contains_ignore_case(LENGTH_UNITS, unit) => {
            Some(n.value)
        }
        Node::Opaque(Component::Number(n)) if n.value == 0.0 => Some(0.0),
        _ => None,
    }
}

fn percentage(node: &Node) -> Option<f32> {
    match node {
        Node::Opaque(Component::Percentage(n)) => Some(n.value * 100.0),
        _ => None,
    }
}

fn number(node: &Node) -> Option<f32> {
    match node {
        Node::Opaque(Component::Number(n)) => Some(n.value),
        _ => None,
    }
}

fn angle(node: &Node) -> Option<f32> {
    match node {
        Node::Opaque(Component::Dimension(n, unit)) => angle_in_degrees(n.value, unit),
        _ => None,
    }
}

/// Convert an angle to degrees, or `None` if `unit` is not an angle unit.
pub(crate) fn angle_in_degrees(value: f32, unit: &str) -> Option<f32> {
    let degrees = match unit.to_ascii_lowercase().as_str() {
        "deg" => value,
        "grad" => value * 0.9,
        "rad" => value.to_degrees(),
        "turn" => value * 360.0,
        _ => return None,
    };
    Some(degrees)
}

fn is_url(node: &Node) -> bool {
    matches!(node, Node::Opaque(Component::Url(_))) || is_function(node, &["url", "src"])
}

fn is_hex_color(value: &str) -> bool {
    matches!(value.len(), 3 | 4 | 6 | 8) && value.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_color(node: &Node) -> bool {
    match node {
        Node::Ident(name) => contains_ignore_case(NAMED_COLORS, name),
        Node::Opaque(Component::Hash { value, .. }) => is_hex_color(value),
        other => is_function(other, COLOR_FUNCTIONS),
    }
}

fn is_image(node: &Node) -> bool {
    matches!(node, Node::Opaque(Component::Url(_))) || is_function(node, IMAGE_FUNCTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::parse;

    fn node(text: &str) -> Node {
        parse(text).unwrap().value_list()[0].clone()
    }

    fn bounded(min: f32, max: f32) -> Option<Range> {
        Some(Range { min, max })
    }

    #[test]
    fn test_lengths() {
        assert!(Primitive::Length.matches(None, &node("1px")));
        assert!(Primitive::Length.matches(None, &node("2.5REM")));
        assert!(Primitive::Length.matches(None, &node("0")));
        assert!(!Primitive::Length.matches(None, &node("1")));
        assert!(!Primitive::Length.matches(None, &node("10%")));
        assert!(!Primitive::Length.matches(None, &node("3deg")));
        assert!(!Primitive::Length.matches(bounded(0.0, f32::INFINITY), &node("-1px")));
    }

    #[test]
    fn test_math_functions_satisfy_numeric_types() {
        assert!(Primitive::Length.matches(bounded(0.0, 1.0), &node("calc(100% - 2px)")));
        assert!(Primitive::Number.matches(None, &node("min(1, 2)")));
        assert!(!Primitive::Color.matches(None, &node("calc(1px)")));
    }

    #[test]
    fn test_percentages_use_percent_scale() {
        assert!(Primitive::Percentage.matches(bounded(0.0, 100.0), &node("50%")));
        assert!(!Primitive::Percentage.matches(bounded(0.0, 100.0), &node("150%")));
        assert!(Primitive::LengthPercentage.matches(None, &node("50%")));
    }

    #[test]
    fn test_numbers_and_integers() {
        assert!(Primitive::Number.matches(bounded(1.0, 1000.0), &node("700")));
        assert!(!Primitive::Number.matches(bounded(1.0, 1000.0), &node("1001")));
        assert!(Primitive::Integer.matches(None, &node("3")));
        assert!(!Primitive::Integer.matches(None, &node("1.5")));
    }

    #[test]
    fn test_angles() {
        assert!(Primitive::Angle.matches(bounded(-90.0, 90.0), &node("0.25turn")));
        assert!(!Primitive::Angle.matches(bounded(-90.0, 90.0), &node("100deg")));
        assert_eq!(angle_in_degrees(0.5, "turn"), Some(180.0));
        assert_eq!(angle_in_degrees(1.0, "px"), None);
    }

    #[test]
    fn test_colors() {
        for color in ["red", "RebeccaPurple", "currentColor", "#fff", "#ff000080", "rgb(0 0 0)", "oklch(0.5 0.1 20)"] {
            assert!(Primitive::Color.matches(None, &node(color)), "{color} should be a color");
        }
        for not_color in ["solid", "#ggg", "#12345", "1px", "\"red\""] {
            assert!(!Primitive::Color.matches(None, &node(not_color)), "{not_color} is not a color");
        }
    }

    #[test]
    fn test_images_and_urls() {
        assert!(Primitive::Image.matches(None, &node("url(a.png)")));
        assert!(Primitive::Image.matches(None, &node("linear-gradient(red, blue)")));
        assert!(!Primitive::Image.matches(None, &node("none")));
        assert!(Primitive::Url.matches(None, &node("url(\"a.png\")")));
    }

    #[test]
    fn test_custom_ident_excludes_wide_keywords() {
        assert!(Primitive::CustomIdent.matches(None, &node("Arial")));
        assert!(!Primitive::CustomIdent.matches(None, &node("inherit")));
        assert!(!Primitive::CustomIdent.matches(None, &node("\"Arial\"")));
    }

    #[test]
    fn test_definition_tables() {
        assert!(type_definition("line-width").is_some());
        assert!(type_definition("length").is_none());
        assert!(property_definition("font-family").is_some());
        assert!(property_definition("margin").is_none());
    }
}
