pub mod reducer;
pub mod section_view;

pub use reducer::reduce;
pub use section_view::{render_view, SectionView};
