/// Data layer: core types, loading, detection, cleaning, and alignment.
///
/// Architecture:
/// ```text
///   two .csv files
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  detect   │  keyword match → year / area column labels
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  coerce to numeric, drop incomplete rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  align    │  common year domain (∩, or ∪ fallback) → filtered views
///   └──────────┘
/// ```
///
/// `prepare` composes the stages for both files into one `Comparison`.

pub mod align;
pub mod clean;
pub mod detect;
pub mod loader;
pub mod model;
pub mod prepare;
