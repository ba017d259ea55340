//! Body location, noise filtering and text assembly.
//!
//! # Module Structure
//!
//! - `tags`: Tag catalogs (text blocks, structural denylist, media markers)
//! - `locator`: Profile cascade with the generic fallback
//! - `fallback`: Paragraph-density heuristic
//! - `pruning`: Noise filter over a private copy of the body
//! - `assemble`: Block collection and boilerplate-phrase filtering
//!
//! # Usage
//!
//! ```rust
//! use rs_news_extract::extractor::{assemble, locator, pruning};
//! use rs_news_extract::{SiteProfile, Snapshot};
//!
//! let snapshot = Snapshot::parse("<article><h1>T</h1><p>A</p><aside><p>ad</p></aside></article>");
//! let profile = SiteProfile::default();
//!
//! let located = locator::locate(&snapshot, &profile.body_selectors, 1).expect("body");
//! let filtered = pruning::filter(&located.root, &profile);
//! let blocks = assemble::collect_blocks(&filtered, &profile);
//! assert_eq!(assemble::join_blocks(&blocks), "T\n\nA");
//! ```

pub mod assemble;
pub mod fallback;
pub mod locator;
pub mod pruning;
pub mod tags;

pub use locator::{locate, Located, Strategy};
pub use pruning::{filter, FilteredBody, PruneStats};
