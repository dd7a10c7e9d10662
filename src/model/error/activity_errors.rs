#[derive(PartialEq, Debug)]
pub enum LogActivityError {
    DbFailure,
}
