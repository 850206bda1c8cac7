use strum::{Display, EnumIter};

/// The six files a running advisor needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Artifact {
    DietModel,
    ActivityModel,
    LeActivity,
    LeDiet,
    LeRecDiet,
    LeRecActivity,
}

impl Artifact {
    pub fn file_name(&self) -> String {
        format!("{}.ron", self)
    }
}
