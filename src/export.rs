//! Export formatters - snapshot to text in six syntaxes.
//!
//! Every formatter is a pure function from a [`Snapshot`] to a string; the
//! templates mirror what a designer would paste into the target environment.
//! Per-corner snapshots render radius positions as the four-value CSS
//! shorthand (`tl tr br bl`); the design-token document gains one entry per
//! corner instead.

use serde::Serialize;

use crate::model::Snapshot;
use crate::types::{Corner, CornerRadii};

// =============================================================================
// Formats
// =============================================================================

/// An output syntax the current values can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Css,
    Scss,
    Tailwind,
    CssInJs,
    DesignTokens,
    Swift,
}

impl ExportFormat {
    /// All formats in display order.
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Css,
        ExportFormat::Scss,
        ExportFormat::Tailwind,
        ExportFormat::CssInJs,
        ExportFormat::DesignTokens,
        ExportFormat::Swift,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Css => "CSS",
            ExportFormat::Scss => "SCSS",
            ExportFormat::Tailwind => "Tailwind",
            ExportFormat::CssInJs => "CSS-in-JS",
            ExportFormat::DesignTokens => "Design Tokens",
            ExportFormat::Swift => "Swift",
        }
    }
}

/// A single value available for quick copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickValue {
    Outer,
    Padding,
    Inner,
}

impl QuickValue {
    pub const ALL: [QuickValue; 3] = [QuickValue::Outer, QuickValue::Padding, QuickValue::Inner];

    pub fn label(self) -> &'static str {
        match self {
            QuickValue::Outer => "Outer",
            QuickValue::Padding => "Padding",
            QuickValue::Inner => "Inner",
        }
    }
}

/// Render a quick-copy value, e.g. `30px`.
pub fn quick_value(which: QuickValue, snap: &Snapshot) -> String {
    let value = match which {
        QuickValue::Outer => snap.outer_radius,
        QuickValue::Padding => snap.padding,
        QuickValue::Inner => snap.inner_radius,
    };
    format!("{value}px")
}

/// Render the snapshot in the given syntax.
pub fn render(format: ExportFormat, snap: &Snapshot) -> String {
    match format {
        ExportFormat::Css => css(snap),
        ExportFormat::Scss => scss(snap),
        ExportFormat::Tailwind => tailwind(snap),
        ExportFormat::CssInJs => css_in_js(snap),
        ExportFormat::DesignTokens => design_tokens(snap),
        ExportFormat::Swift => swift(snap),
    }
}

// =============================================================================
// Radius rendering
// =============================================================================

/// One radius position: `30px`, or the four-value shorthand when the corners
/// differ.
fn radius_css(radii: CornerRadii) -> String {
    if radii.is_uniform() {
        format!("{}px", radii.top_left)
    } else {
        let [tl, tr, br, bl] = radii.values();
        format!("{tl}px {tr}px {br}px {bl}px")
    }
}

// =============================================================================
// Stylesheet formats
// =============================================================================

fn css(snap: &Snapshot) -> String {
    format!(
        "/* CSS */\n\
         .outer-container {{\n\
         \x20 width: {dim}px;\n\
         \x20 height: {dim}px;\n\
         \x20 border-radius: {outer};\n\
         \x20 padding: {pad}px;\n\
         \x20 border: 4px solid #d1d5db;\n\
         \x20 background: #f9fafb;\n\
         }}\n\
         \n\
         .inner-container {{\n\
         \x20 width: 100%;\n\
         \x20 height: 100%;\n\
         \x20 border-radius: {inner};\n\
         \x20 border: 4px solid #93c5fd;\n\
         \x20 background: #dbeafe;\n\
         }}",
        dim = snap.dimension,
        outer = radius_css(snap.corners),
        pad = snap.padding,
        inner = radius_css(snap.corner_inner),
    )
}

fn scss(snap: &Snapshot) -> String {
    format!(
        "// SCSS Variables\n\
         $outer-radius: {outer};\n\
         $padding: {pad}px;\n\
         $inner-radius: {inner};\n\
         $dimension: {dim}px;\n\
         \n\
         .outer-container {{\n\
         \x20 width: $dimension;\n\
         \x20 height: $dimension;\n\
         \x20 border-radius: $outer-radius;\n\
         \x20 padding: $padding;\n\
         \x20 border: 4px solid #d1d5db;\n\
         \x20 background: #f9fafb;\n\
         }}\n\
         \n\
         .inner-container {{\n\
         \x20 width: 100%;\n\
         \x20 height: 100%;\n\
         \x20 border-radius: $inner-radius;\n\
         \x20 border: 4px solid #93c5fd;\n\
         \x20 background: #dbeafe;\n\
         }}",
        outer = radius_css(snap.corners),
        pad = snap.padding,
        inner = radius_css(snap.corner_inner),
        dim = snap.dimension,
    )
}

fn tailwind(snap: &Snapshot) -> String {
    format!(
        "<!-- Tailwind Classes -->\n\
         <div class=\"border-4 border-gray-300 bg-gray-50\"\n\
         \x20    style=\"width: {dim}px; height: {dim}px; border-radius: {outer}; padding: {pad}px;\">\n\
         \x20 <div class=\"w-full h-full border-4 border-blue-300 bg-blue-100\"\n\
         \x20      style=\"border-radius: {inner};\">\n\
         \x20 </div>\n\
         </div>",
        dim = snap.dimension,
        outer = radius_css(snap.corners),
        pad = snap.padding,
        inner = radius_css(snap.corner_inner),
    )
}

fn css_in_js(snap: &Snapshot) -> String {
    format!(
        "// CSS-in-JS (styled-components/emotion)\n\
         const OuterContainer = styled.div`\n\
         \x20 width: {dim}px;\n\
         \x20 height: {dim}px;\n\
         \x20 border-radius: {outer};\n\
         \x20 padding: {pad}px;\n\
         \x20 border: 4px solid #d1d5db;\n\
         \x20 background: #f9fafb;\n\
         `;\n\
         \n\
         const InnerContainer = styled.div`\n\
         \x20 width: 100%;\n\
         \x20 height: 100%;\n\
         \x20 border-radius: {inner};\n\
         \x20 border: 4px solid #93c5fd;\n\
         \x20 background: #dbeafe;\n\
         `;",
        dim = snap.dimension,
        outer = radius_css(snap.corners),
        pad = snap.padding,
        inner = radius_css(snap.corner_inner),
    )
}

// =============================================================================
// Design tokens
// =============================================================================

#[derive(Serialize)]
struct TokenValue {
    value: String,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl TokenValue {
    fn radius(px: u16) -> Self {
        Self {
            value: format!("{px}px"),
            kind: "borderRadius",
        }
    }
}

#[derive(Serialize)]
struct RadiusTokens {
    outer: TokenValue,
    inner: TokenValue,
    // A flattened `None` emits nothing, so uniform documents stay minimal.
    #[serde(flatten)]
    corners: Option<CornerTokens>,
}

/// Per-corner entries, present only in per-corner mode.
#[derive(Serialize)]
struct CornerTokens {
    #[serde(rename = "outer-top-left")]
    outer_top_left: TokenValue,
    #[serde(rename = "outer-top-right")]
    outer_top_right: TokenValue,
    #[serde(rename = "outer-bottom-right")]
    outer_bottom_right: TokenValue,
    #[serde(rename = "outer-bottom-left")]
    outer_bottom_left: TokenValue,
    #[serde(rename = "inner-top-left")]
    inner_top_left: TokenValue,
    #[serde(rename = "inner-top-right")]
    inner_top_right: TokenValue,
    #[serde(rename = "inner-bottom-right")]
    inner_bottom_right: TokenValue,
    #[serde(rename = "inner-bottom-left")]
    inner_bottom_left: TokenValue,
}

#[derive(Serialize)]
struct SpacingTokens {
    padding: TokenValue,
}

#[derive(Serialize)]
struct SizingTokens {
    dimension: TokenValue,
}

#[derive(Serialize)]
struct TokenDocument {
    #[serde(rename = "border-radius")]
    border_radius: RadiusTokens,
    spacing: SpacingTokens,
    sizing: SizingTokens,
}

fn design_tokens(snap: &Snapshot) -> String {
    let corners = snap.per_corner.then(|| CornerTokens {
        outer_top_left: TokenValue::radius(snap.corners.get(Corner::TopLeft)),
        outer_top_right: TokenValue::radius(snap.corners.get(Corner::TopRight)),
        outer_bottom_right: TokenValue::radius(snap.corners.get(Corner::BottomRight)),
        outer_bottom_left: TokenValue::radius(snap.corners.get(Corner::BottomLeft)),
        inner_top_left: TokenValue::radius(snap.corner_inner.get(Corner::TopLeft)),
        inner_top_right: TokenValue::radius(snap.corner_inner.get(Corner::TopRight)),
        inner_bottom_right: TokenValue::radius(snap.corner_inner.get(Corner::BottomRight)),
        inner_bottom_left: TokenValue::radius(snap.corner_inner.get(Corner::BottomLeft)),
    });

    let document = TokenDocument {
        border_radius: RadiusTokens {
            outer: TokenValue::radius(snap.outer_radius),
            inner: TokenValue::radius(snap.inner_radius),
            corners,
        },
        spacing: SpacingTokens {
            padding: TokenValue {
                value: format!("{}px", snap.padding),
                kind: "spacing",
            },
        },
        sizing: SizingTokens {
            dimension: TokenValue {
                value: format!("{}px", snap.dimension),
                kind: "sizing",
            },
        },
    };

    // A fixed document serialized to a string cannot fail.
    serde_json::to_string_pretty(&document).expect("token document serializes")
}

// =============================================================================
// Platform snippet
// =============================================================================

fn swift(snap: &Snapshot) -> String {
    format!(
        "// Swift (iOS)\n\
         let outerRadius: CGFloat = {outer}\n\
         let padding: CGFloat = {pad}\n\
         let innerRadius: CGFloat = {inner}\n\
         let dimension: CGFloat = {dim}\n\
         \n\
         outerView.layer.cornerRadius = outerRadius\n\
         outerView.layer.borderWidth = 4\n\
         outerView.layer.borderColor = UIColor.systemGray3.cgColor\n\
         \n\
         innerView.layer.cornerRadius = innerRadius\n\
         innerView.layer.borderWidth = 4\n\
         innerView.layer.borderColor = UIColor.systemBlue.cgColor",
        outer = snap.outer_radius,
        pad = snap.padding,
        inner = snap.inner_radius,
        dim = snap.dimension,
    )
}

// =============================================================================
// Tests
// =============================================================================
