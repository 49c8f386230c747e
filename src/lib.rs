//! # concentric
//!
//! Interactive terminal calculator for concentric corner radii.
//!
//! Nested rounded-corner shapes only look right when the inner radius
//! subtracts the padding: `inner = max(0, outer - padding)`. This crate
//! demonstrates that relationship live - drag the preview, move sliders,
//! apply design-system presets - and exports the resulting values into six
//! output syntaxes.
//!
//! Built on [spark-signals](https://crates.io/crates/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The pipeline is purely derived-based:
//! ```text
//! input signals -> snapshot derived -> screen derived -> render effect
//! ```
//!
//! Input events flow the other way: crossterm events are converted, resolved
//! against the composed frame's region map, and written back into the input
//! signals, which re-runs exactly the affected part of the pipeline.
//!
//! ## Modules
//!
//! - [`types`] - corner identifiers, per-corner radii, value bounds
//! - [`model`] - reactive value store and the derivation formula
//! - [`gesture`] - drag sessions, pointer-distance-to-value mapping
//! - [`throttle`] - trailing-edge rate limiter for drag updates
//! - [`presets`] - built-in design-system catalog
//! - [`export`] - snapshot-to-text formatters and quick-copy values
//! - [`clipboard`] - internal buffer plus best-effort system clipboard
//! - [`input`] - crossterm event conversion and polling
//! - [`ui`] - frame buffer, region map, screen composition, diff renderer
//! - [`app`] - the application: reactive wiring and the event loop

pub mod app;
pub mod clipboard;
pub mod export;
pub mod gesture;
pub mod input;
pub mod model;
pub mod presets;
pub mod throttle;
pub mod types;
pub mod ui;

// Re-export commonly used items
pub use export::{render as render_export, quick_value, ExportFormat, QuickValue};
pub use gesture::{map_padding, map_radius, DragKind, DragSession, PxPoint};
pub use model::{inner_radius, max_padding, RadiusStore, Snapshot};
pub use presets::{Category, PresetConfig, DESIGN_PRESETS};
pub use throttle::Throttle;
pub use types::{Corner, CornerRadii};
