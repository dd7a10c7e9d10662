#[derive(PartialEq, Debug)]
pub enum CreateCourseError {
    /// the college the course should attach to does not exist
    CollegeNotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum GetCourseError {
    CourseNotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum ListCoursesError {
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum DeleteCourseError {
    CourseNotFound,
    DbFailure,
}
