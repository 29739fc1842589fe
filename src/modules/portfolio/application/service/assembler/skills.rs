use crate::modules::portfolio::application::helpers::split_list_default;
use crate::modules::portfolio::application::ports::outgoing::{RowError, SheetRow};
use crate::modules::portfolio::domain::entities::SkillCategory;

pub fn build_skills(rows: &[SheetRow]) -> Result<Vec<SkillCategory>, RowError> {
    rows.iter()
        .map(|row| {
            Ok(SkillCategory {
                category: row.text("category")?,
                technologies: split_list_default(&row.text("technologies")?),
            })
        })
        .collect()
}
