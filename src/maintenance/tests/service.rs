mod run_diagnostics_tests {
    use crate::maintenance::models::SummaryShape;
    use crate::maintenance::service::run_diagnostics;
    use crate::model::repository::{FolderRef, LegacyFolderRef};
    use crate::model::role::Role;
    use crate::repository::{course_repository, open_connection};
    use crate::test::{
        cleanup, create_course_db_entry, create_folder_db_entry, create_user_db_entry, refresh_db,
    };

    #[test]
    fn reverse_pass_reports_folders_missing_from_their_course() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        let f1 = create_folder_db_entry("Week 1", Some(course_id.as_str()), uploader_id.as_str(), 1);
        let f2 = create_folder_db_entry("Week 2", Some(course_id.as_str()), uploader_id.as_str(), 1);
        let con = open_connection();
        course_repository::update_folders(course_id.as_str(), &[FolderRef::Id(f1)], &con).unwrap();
        con.close().unwrap();
        let report = run_diagnostics().unwrap();
        assert_eq!(1, report.course_findings.len());
        let finding = &report.course_findings[0];
        assert_eq!(course_id, finding.course_id);
        assert_eq!(vec![f2], finding.missing_refs);
        assert!(finding.dangling_refs.is_empty());
        assert!(finding.duplicate_refs.is_empty());
        cleanup();
    }

    #[test]
    fn classifies_array_shapes_and_flags_ref_problems() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let string_course = create_course_db_entry("Strings");
        let mixed_course = create_course_db_entry("Mixed");
        create_course_db_entry("Empty");
        let folder_id = create_folder_db_entry(
            "Week 1",
            Some(string_course.as_str()),
            uploader_id.as_str(),
            1,
        );
        let con = open_connection();
        course_repository::update_folders(
            string_course.as_str(),
            &[
                FolderRef::Id(folder_id.clone()),
                FolderRef::Id(folder_id.clone()),
            ],
            &con,
        )
        .unwrap();
        course_repository::update_folders(
            mixed_course.as_str(),
            &[
                FolderRef::Id("nowhere".to_string()),
                FolderRef::Legacy(LegacyFolderRef {
                    id: Some(folder_id.clone()),
                    name: Some("Week 1".to_string()),
                    ..Default::default()
                }),
            ],
            &con,
        )
        .unwrap();
        con.close().unwrap();
        let report = run_diagnostics().unwrap();
        assert_eq!(3, report.scanned_courses);
        assert_eq!(1, report.scanned_folders);
        assert_eq!(1, report.summary_shapes.string);
        assert_eq!(0, report.summary_shapes.object);
        assert_eq!(1, report.summary_shapes.mixed);
        assert_eq!(1, report.summary_shapes.empty);
        let duplicated = report
            .course_findings
            .iter()
            .find(|finding| finding.course_id == string_course)
            .unwrap();
        assert_eq!(SummaryShape::Id, duplicated.shape);
        assert_eq!(vec![folder_id], duplicated.duplicate_refs);
        let mixed = report
            .course_findings
            .iter()
            .find(|finding| finding.course_id == mixed_course)
            .unwrap();
        assert_eq!(SummaryShape::Mixed, mixed.shape);
        assert_eq!(vec!["nowhere".to_string()], mixed.dangling_refs);
        cleanup();
    }

    #[test]
    fn flags_orphaned_and_empty_folders() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        let lost = create_folder_db_entry("Lost", None, uploader_id.as_str(), 2);
        let husk = create_folder_db_entry("Husk", Some("gone-course"), uploader_id.as_str(), 0);
        create_folder_db_entry("Week 1", Some(course_id.as_str()), uploader_id.as_str(), 1);
        let report = run_diagnostics().unwrap();
        let mut orphaned: Vec<&str> = report
            .orphaned_folders
            .iter()
            .map(|finding| finding.folder_id.as_str())
            .collect();
        orphaned.sort();
        let mut expected = vec![lost.as_str(), husk.as_str()];
        expected.sort();
        assert_eq!(expected, orphaned);
        assert_eq!(1, report.empty_folders.len());
        assert_eq!(husk, report.empty_folders[0].folder_id);
        assert_eq!(0, report.empty_folders[0].file_count);
        cleanup();
    }

    #[test]
    fn clean_data_produces_no_findings() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        let folder_id = create_folder_db_entry(
            "Week 1",
            Some(course_id.as_str()),
            uploader_id.as_str(),
            1,
        );
        let con = open_connection();
        course_repository::update_folders(course_id.as_str(), &[FolderRef::Id(folder_id)], &con)
            .unwrap();
        con.close().unwrap();
        let report = run_diagnostics().unwrap();
        assert!(report.course_findings.is_empty());
        assert!(report.orphaned_folders.is_empty());
        assert!(report.empty_folders.is_empty());
        cleanup();
    }
}

mod run_repair_tests {
    use crate::maintenance::models::RepairSummary;
    use crate::maintenance::service::{run_diagnostics, run_repair};
    use crate::model::repository::{FolderRef, LegacyFolderRef};
    use crate::model::role::Role;
    use crate::repository::{course_repository, folder_repository, open_connection};
    use crate::test::{
        cleanup, create_course_db_entry, create_folder_db_entry, create_user_db_entry, refresh_db,
    };
    use crate::util::RequestLimiter;

    #[test]
    fn adds_refs_the_course_lost_track_of() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        let f1 = create_folder_db_entry("Week 1", Some(course_id.as_str()), uploader_id.as_str(), 1);
        let f2 = create_folder_db_entry("Week 2", Some(course_id.as_str()), uploader_id.as_str(), 1);
        let con = open_connection();
        course_repository::update_folders(
            course_id.as_str(),
            &[FolderRef::Id(f1.clone())],
            &con,
        )
        .unwrap();
        con.close().unwrap();
        let limiter = RequestLimiter::new(100, 1_000);
        let summary = run_repair(&limiter).unwrap();
        assert_eq!(1, summary.added_refs);
        assert_eq!(0, summary.standardized_courses);
        let con = open_connection();
        let course = course_repository::get_course_by_id(course_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        assert_eq!(vec![FolderRef::Id(f1), FolderRef::Id(f2)], course.folders);
        cleanup();
    }

    #[test]
    fn standardizes_arrays_to_deduplicated_id_form() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        let folder_id = create_folder_db_entry(
            "Week 1",
            Some(course_id.as_str()),
            uploader_id.as_str(),
            1,
        );
        let con = open_connection();
        course_repository::update_folders(
            course_id.as_str(),
            &[
                FolderRef::Legacy(LegacyFolderRef {
                    id: Some(folder_id.clone()),
                    name: Some("Week 1".to_string()),
                    file_count: Some(1),
                    ..Default::default()
                }),
                // id-less entries resolve to nothing and get dropped
                FolderRef::Legacy(LegacyFolderRef {
                    name: Some("mystery".to_string()),
                    ..Default::default()
                }),
                FolderRef::Id(folder_id.clone()),
            ],
            &con,
        )
        .unwrap();
        con.close().unwrap();
        let limiter = RequestLimiter::new(100, 1_000);
        let summary = run_repair(&limiter).unwrap();
        assert_eq!(1, summary.standardized_courses);
        let con = open_connection();
        let course = course_repository::get_course_by_id(course_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        assert_eq!(vec![FolderRef::Id(folder_id)], course.folders);
        cleanup();
    }

    #[test]
    fn deletes_empty_orphans_and_strips_the_refs_left_behind() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        let husk = create_folder_db_entry("Husk", Some("gone-course"), uploader_id.as_str(), 0);
        let lost = create_folder_db_entry("Lost", Some("gone-course"), uploader_id.as_str(), 2);
        let live = create_folder_db_entry(
            "Week 1",
            Some(course_id.as_str()),
            uploader_id.as_str(),
            1,
        );
        let con = open_connection();
        // the course's array still points at the husk
        course_repository::update_folders(
            course_id.as_str(),
            &[FolderRef::Id(husk.clone()), FolderRef::Id(live.clone())],
            &con,
        )
        .unwrap();
        con.close().unwrap();
        let limiter = RequestLimiter::new(100, 1_000);
        let summary = run_repair(&limiter).unwrap();
        assert_eq!(1, summary.deleted_folders);
        assert_eq!(1, summary.stripped_refs);
        let con = open_connection();
        let gone = folder_repository::get_folder_by_id(husk.as_str(), &con).unwrap();
        let kept = folder_repository::get_folder_by_id(lost.as_str(), &con).unwrap();
        let course = course_repository::get_course_by_id(course_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        assert_eq!(None, gone);
        // orphans still holding files are never deleted automatically
        assert!(kept.is_some());
        assert_eq!(vec![FolderRef::Id(live)], course.folders);
        cleanup();
    }

    #[test]
    fn second_run_is_a_noop() {
        refresh_db();
        let uploader_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        let f1 = create_folder_db_entry("Week 1", Some(course_id.as_str()), uploader_id.as_str(), 1);
        let f2 = create_folder_db_entry("Week 2", Some(course_id.as_str()), uploader_id.as_str(), 1);
        create_folder_db_entry("Husk", None, uploader_id.as_str(), 0);
        let con = open_connection();
        course_repository::update_folders(
            course_id.as_str(),
            &[
                FolderRef::Legacy(LegacyFolderRef {
                    id: Some(f1.clone()),
                    ..Default::default()
                }),
                FolderRef::Id(f1.clone()),
                FolderRef::Id("nowhere".to_string()),
            ],
            &con,
        )
        .unwrap();
        con.close().unwrap();
        let limiter = RequestLimiter::new(100, 1_000);
        let first = run_repair(&limiter).unwrap();
        assert!(first.standardized_courses > 0);
        assert_eq!(1, first.deleted_folders);
        assert_eq!(1, first.stripped_refs);
        assert_eq!(1, first.added_refs);
        let con = open_connection();
        let settled = course_repository::get_course_by_id(course_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        assert_eq!(vec![FolderRef::Id(f1), FolderRef::Id(f2)], settled.folders);
        let second = run_repair(&limiter).unwrap();
        assert_eq!(RepairSummary::default(), second);
        let con = open_connection();
        let untouched = course_repository::get_course_by_id(course_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        assert_eq!(settled.folders, untouched.folders);
        let report = run_diagnostics().unwrap();
        assert!(report.course_findings.is_empty());
        assert!(report.orphaned_folders.is_empty());
        assert!(report.empty_folders.is_empty());
        cleanup();
    }
}
