use std::backtrace::Backtrace;
use std::collections::HashSet;

use itertools::Itertools;

use crate::maintenance::models::{
    CourseFinding, DiagnosticsError, DiagnosticsReport, FolderFinding, RepairError, RepairSummary,
    ShapeCounts, SummaryShape,
};
use crate::model::repository::FolderRef;
use crate::repository::{course_repository, folder_repository, open_connection};
use crate::util::RequestLimiter;

/// full scan of every course and folder row, reporting each way the
/// denormalized summary arrays have drifted from the authoritative folder
/// table. Nothing is written; this is the read-only half of the repair pass
pub fn run_diagnostics() -> Result<DiagnosticsReport, DiagnosticsError> {
    let con = open_connection();
    let courses = match course_repository::get_all_courses(&con) {
        Ok(courses) => courses,
        Err(e) => {
            log::error!(
                "Failed to scan courses for diagnostics! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(DiagnosticsError::DbFailure);
        }
    };
    let folders = match folder_repository::get_all_folders(&con) {
        Ok(folders) => folders,
        Err(e) => {
            log::error!(
                "Failed to scan folders for diagnostics! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(DiagnosticsError::DbFailure);
        }
    };
    con.close().unwrap();
    let course_ids: HashSet<&str> = courses.iter().map(|course| course.id.as_str()).collect();
    let folder_ids: HashSet<&str> = folders.iter().map(|folder| folder.id.as_str()).collect();
    let mut summary_shapes = ShapeCounts::default();
    let mut course_findings: Vec<CourseFinding> = Vec::new();
    for course in courses.iter() {
        let shape = classify(&course.folders);
        match shape {
            SummaryShape::Id => summary_shapes.string += 1,
            SummaryShape::Object => summary_shapes.object += 1,
            SummaryShape::Mixed => summary_shapes.mixed += 1,
            SummaryShape::Empty => summary_shapes.empty += 1,
        }
        let resolved: Vec<&str> = course
            .folders
            .iter()
            .filter_map(|entry| entry.folder_id())
            .collect();
        let dangling_refs: Vec<String> = resolved
            .iter()
            .filter(|id| !folder_ids.contains(*id))
            .unique()
            .map(|id| id.to_string())
            .collect();
        let duplicate_refs: Vec<String> = resolved
            .iter()
            .duplicates()
            .map(|id| id.to_string())
            .collect();
        // reverse pass: live folders the course's array has lost track of
        let missing_refs: Vec<String> = folders
            .iter()
            .filter(|folder| !folder.deleted)
            .filter(|folder| folder.course_id.as_deref() == Some(course.id.as_str()))
            .filter(|folder| !resolved.contains(&folder.id.as_str()))
            .map(|folder| folder.id.clone())
            .collect();
        let needs_standardizing = shape == SummaryShape::Object || shape == SummaryShape::Mixed;
        if needs_standardizing
            || !dangling_refs.is_empty()
            || !duplicate_refs.is_empty()
            || !missing_refs.is_empty()
        {
            course_findings.push(CourseFinding {
                course_id: course.id.clone(),
                course_name: course.name.clone(),
                shape,
                dangling_refs,
                duplicate_refs,
                missing_refs,
            });
        }
    }
    let orphaned_folders: Vec<FolderFinding> = folders
        .iter()
        .filter(|folder| match &folder.course_id {
            Some(course_id) => !course_ids.contains(course_id.as_str()),
            None => true,
        })
        .map(folder_finding)
        .collect();
    let empty_folders: Vec<FolderFinding> = folders
        .iter()
        .filter(|folder| folder.files.is_empty())
        .map(folder_finding)
        .collect();
    Ok(DiagnosticsReport {
        scanned_courses: courses.len() as u32,
        scanned_folders: folders.len() as u32,
        summary_shapes,
        orphaned_folders,
        empty_folders,
        course_findings,
    })
}

/// converges the summary arrays back onto the folder table, in four ordered
/// steps: standardize every array to deduplicated id-string form, delete
/// empty orphaned folders, strip refs to folders that don't exist, then add
/// refs for live folders their course lost. Each step only writes rows it
/// actually changes, so a rerun over converged data is a no-op. Every write
/// goes through the limiter; a full repair over a big database is expected
/// to take a while.
///
/// Orphaned folders that still hold files are left alone: there is no course
/// to reattach them to, so deleting them would throw away uploads. They stay
/// visible in diagnostics until an operator decides
pub fn run_repair(limiter: &RequestLimiter) -> Result<RepairSummary, RepairError> {
    let con = open_connection();
    let mut courses = match course_repository::get_all_courses(&con) {
        Ok(courses) => courses,
        Err(e) => {
            log::error!(
                "Failed to scan courses for repair! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(RepairError::DbFailure);
        }
    };
    let folders = match folder_repository::get_all_folders(&con) {
        Ok(folders) => folders,
        Err(e) => {
            log::error!(
                "Failed to scan folders for repair! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(RepairError::DbFailure);
        }
    };
    let course_ids: HashSet<String> = courses.iter().map(|course| course.id.clone()).collect();
    let mut summary = RepairSummary::default();
    // step 1: deduplicated plain-id form everywhere
    for course in courses.iter_mut() {
        let standardized = standardized_refs(&course.folders);
        if standardized == course.folders {
            continue;
        }
        limiter.acquire();
        if let Err(e) = course_repository::update_folders(course.id.as_str(), &standardized, &con)
        {
            log::error!(
                "Failed to standardize summary array for course {}! Error is {e:?}\n{}",
                course.id,
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(RepairError::DbFailure);
        }
        course.folders = standardized;
        summary.standardized_courses += 1;
    }
    // step 2: empty folders nobody owns are garbage
    let mut folder_ids: HashSet<String> =
        folders.iter().map(|folder| folder.id.clone()).collect();
    for folder in folders.iter() {
        let orphaned = match &folder.course_id {
            Some(course_id) => !course_ids.contains(course_id.as_str()),
            None => true,
        };
        if !orphaned || !folder.files.is_empty() {
            continue;
        }
        limiter.acquire();
        if let Err(e) = folder_repository::delete_folder(folder.id.as_str(), &con) {
            log::error!(
                "Failed to delete empty orphaned folder {}! Error is {e:?}\n{}",
                folder.id,
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(RepairError::DbFailure);
        }
        folder_ids.remove(folder.id.as_str());
        summary.deleted_folders += 1;
    }
    // step 3: strip refs whose target is gone, including rows step 2 removed
    for course in courses.iter_mut() {
        let kept: Vec<FolderRef> = course
            .folders
            .iter()
            .filter(|entry| match entry.folder_id() {
                Some(id) => folder_ids.contains(id),
                None => false,
            })
            .cloned()
            .collect();
        let stripped = course.folders.len() - kept.len();
        if stripped == 0 {
            continue;
        }
        limiter.acquire();
        if let Err(e) = course_repository::update_folders(course.id.as_str(), &kept, &con) {
            log::error!(
                "Failed to strip dangling refs from course {}! Error is {e:?}\n{}",
                course.id,
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(RepairError::DbFailure);
        }
        course.folders = kept;
        summary.stripped_refs += stripped as u32;
    }
    // step 4: reverse pass, reattach live folders their course forgot
    for course in courses.iter_mut() {
        let additions: Vec<FolderRef> = folders
            .iter()
            .filter(|folder| !folder.deleted)
            .filter(|folder| folder.course_id.as_deref() == Some(course.id.as_str()))
            .filter(|folder| {
                course
                    .folders
                    .iter()
                    .all(|entry| entry.folder_id() != Some(folder.id.as_str()))
            })
            .map(|folder| FolderRef::Id(folder.id.clone()))
            .collect();
        if additions.is_empty() {
            continue;
        }
        summary.added_refs += additions.len() as u32;
        course.folders.extend(additions);
        limiter.acquire();
        if let Err(e) =
            course_repository::update_folders(course.id.as_str(), &course.folders, &con)
        {
            log::error!(
                "Failed to add missing refs to course {}! Error is {e:?}\n{}",
                course.id,
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(RepairError::DbFailure);
        }
    }
    con.close().unwrap();
    log::info!(
        "Repair pass standardized {} courses, deleted {} folders, stripped {} refs, added {} refs",
        summary.standardized_courses,
        summary.deleted_folders,
        summary.stripped_refs,
        summary.added_refs
    );
    Ok(summary)
}

fn classify(refs: &[FolderRef]) -> SummaryShape {
    if refs.is_empty() {
        return SummaryShape::Empty;
    }
    let objects = refs
        .iter()
        .filter(|entry| matches!(entry, FolderRef::Legacy(_)))
        .count();
    if objects == 0 {
        SummaryShape::Id
    } else if objects == refs.len() {
        SummaryShape::Object
    } else {
        SummaryShape::Mixed
    }
}

/// the deduplicated plain-id form of a summary array. Object entries
/// contribute their id; an entry without one has nothing to point at and is
/// dropped
fn standardized_refs(refs: &[FolderRef]) -> Vec<FolderRef> {
    refs.iter()
        .filter_map(|entry| entry.folder_id())
        .unique()
        .map(|id| FolderRef::Id(id.to_string()))
        .collect()
}

fn folder_finding(folder: &crate::model::repository::Folder) -> FolderFinding {
    FolderFinding {
        folder_id: folder.id.clone(),
        name: folder.name.clone(),
        course_id: folder.course_id.clone(),
        file_count: folder.files.len() as u32,
    }
}
