/// Data layer: file selection, loading, and the series model.
///
/// Architecture:
/// ```text
///  (folder, name, golds, run mode)
///        │
///        ▼
///   ┌──────────┐
///   │  select   │  mandatory/optional rules per mode → ordered paths
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse each CSV → Series, skip malformed files
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Series   │  label + column-major table, first column = X
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
pub mod select;
