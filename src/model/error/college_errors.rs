#[derive(PartialEq, Debug)]
pub enum CreateCollegeError {
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum GetCollegeError {
    CollegeNotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum ListCollegesError {
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum UpdateCollegeError {
    CollegeNotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum DeleteCollegeError {
    CollegeNotFound,
    DbFailure,
}
