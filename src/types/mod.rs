mod section;

pub use section::{DietPlanSections, SectionKey};
