#[derive(PartialEq, Debug)]
pub enum CreateSkillError {
    /// a skill with that name already exists
    AlreadyExists,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum GetSkillError {
    SkillNotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum ListSkillsError {
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum UpdateSkillError {
    SkillNotFound,
    /// a different skill already uses the new name
    AlreadyExists,
    DbFailure,
}
