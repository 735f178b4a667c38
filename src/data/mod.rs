/// Data layer: chain query/result types and the chain file loader.
///
/// Architecture:
/// ```text
///   ChainQuery (dir, basename, parameter, count)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  {basename}.{i}.txt → resolve column → parse rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ ChainSet  │  Vec<ChainSeries> in chain order + diagnostics
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
