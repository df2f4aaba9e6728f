//! # Boxwind
//!
//! Translates design-inspector property strings into utility-class tokens.
//!
//! An element is described by up to five short strings, one per inspector
//! section, in the same shorthand a designer reads off the panel:
//!
//! ```text
//! layout:     Auto{flow=horizontal, gap=10px, align=center, w-fill, h-48px}
//! position:   ignore-auto-layout=true, rotation=r-90
//! appearance: visible, opacity=80, radius=(8px, 8px, 0, 0)
//! fill:       type=solid, color=#3b82f6, opacity=100
//! stroke:     color=blue-700, weight=1
//! ```
//!
//! Each string goes through its own parser and comes back as a
//! [`ParseResult`]: ordered, duplicate-free classes plus error and warning
//! messages. [`translate`] runs all five and merges them, also reporting
//! whether the element must be detached into the top-level layer
//! ([`AggregateResult::is_fixed`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use boxwind::{translate, StyleProps};
//!
//! let props = StyleProps::new()
//!     .with_layout("Auto{flow=horizontal, gap=10px, w-fill, h-48px, align=center}")
//!     .with_position("ignore-auto-layout=false, rotation=none")
//!     .with_appearance("visible, opacity=100");
//!
//! let result = translate(&props);
//! assert_eq!(
//!     result.class_attr(),
//!     "flex flex-row gap-[10px] w-full h-[48px] justify-center items-center opacity-100"
//! );
//! assert!(!result.is_fixed);
//! assert!(result.errors.is_empty());
//! ```
//!
//! ## Diagnostics
//!
//! Parsing never stops at the first problem. Missing required values,
//! malformed values and tokens used outside their mode are errors; unknown
//! tokens, applied defaults and overridden values are warnings. Every message
//! is prefixed with its property name (`"stroke: missing stroke color"`).
//!
//! When the same visual concern is set twice, the earlier class is removed
//! before the new one is added, so the output never carries both.
//!
//! ## Style Sheets
//!
//! [`StyleSheet`] loads many named elements from YAML or JSON, see the
//! [`sheet`] module.

pub mod aggregate;
pub mod appearance;
mod diagnostics;
pub mod error;
pub mod fill;
pub mod layout;
pub mod position;
pub mod result;
pub mod sheet;
pub mod stroke;
pub mod value;

pub use aggregate::{translate, AggregateResult, StyleProps};
pub use appearance::parse_appearance;
pub use diagnostics::Property;
pub use error::SheetError;
pub use fill::parse_fill;
pub use layout::{parse_layout, LayoutMode, LayoutResult};
pub use position::{parse_position, PositionResult};
pub use result::{ClassSet, ParseResult};
pub use sheet::StyleSheet;
pub use stroke::parse_stroke;
pub use value::ColorValue;

pub use boxwind_lexer::{tokenize, Token};
