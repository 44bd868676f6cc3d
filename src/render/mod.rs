//! HTML rendering of the quiz page and its results panel

pub mod page;
pub mod regions;

pub use page::{render_page, PageView};
pub use regions::{render_regions, ResultRegions};
