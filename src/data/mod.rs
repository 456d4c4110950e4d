/// Data layer: core types, report parsing, range selection and CSV output.
///
/// Architecture:
/// ```text
///   1.txt (instrument report)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip preamble up to "DY/DX", parse rows → Series
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  keep records with x in [min, max]
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  "x,y" lines → ECDout.csv
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
