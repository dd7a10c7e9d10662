#[derive(PartialEq, Debug)]
pub enum UploadError {
    /// the target course does not exist
    CourseNotFound,
    /// a file's extension does not match its content type; carries the file name
    InvalidFileType(String),
    /// the request carried no files
    NoFiles,
    /// the object store failed to write a blob
    StorageFailure,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum GetFolderError {
    FolderNotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum ListFoldersError {
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum DeleteFolderError {
    FolderNotFound,
    /// the caller is neither the uploader nor allowed to moderate the course
    NotAllowed,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum RestoreFolderError {
    FolderNotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum SetImportanceError {
    FolderNotFound,
    NotAllowed,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum DeleteFileEntryError {
    FolderNotFound,
    /// the folder has no file entry at the passed index
    FileNotFound,
    NotAllowed,
    DbFailure,
}
