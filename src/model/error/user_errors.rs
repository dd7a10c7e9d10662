#[derive(PartialEq, Debug)]
pub enum RegisterUserError {
    /// another user already registered that username
    UsernameTaken,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum GetUserError {
    UserNotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum ListUsersError {
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum UpdateUserRoleError {
    /// no user with the passed id exists
    UserNotFound,
    DbFailure,
}
