mod recalculate_user_contributions_tests {
    use crate::contributions::models::RecalculateError;
    use crate::contributions::service::recalculate_user_contributions;
    use crate::model::role::Role;
    use crate::repository::{open_connection, user_repository};
    use crate::test::{
        cleanup, create_course_db_entry, create_folder_db_entry, create_user_db_entry, refresh_db,
    };

    #[test]
    fn recalculate_sums_files_across_live_folders() {
        refresh_db();
        let user_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        create_folder_db_entry("Week 1", Some(course_id.as_str()), user_id.as_str(), 3);
        create_folder_db_entry("Week 2", Some(course_id.as_str()), user_id.as_str(), 2);
        let outcome = recalculate_user_contributions(user_id.as_str()).unwrap();
        assert!(outcome.success);
        assert_eq!(5, outcome.contributions);
        assert_eq!(50, outcome.xp);
        let con = open_connection();
        let user = user_repository::get_user_by_id(user_id.as_str(), &con)
            .unwrap()
            .unwrap();
        con.close().unwrap();
        assert_eq!(5, user.contributions);
        assert_eq!(50, user.xp);
        assert!(user.contributions_updated_at.is_some());
        cleanup();
    }

    #[test]
    fn recalculate_skips_soft_deleted_folders() {
        refresh_db();
        let user_id = create_user_db_entry("uploader", Role::User);
        let course_id = create_course_db_entry("Signals");
        create_folder_db_entry("Kept", Some(course_id.as_str()), user_id.as_str(), 2);
        let doomed = create_folder_db_entry("Gone", Some(course_id.as_str()), user_id.as_str(), 4);
        let con = open_connection();
        crate::repository::folder_repository::soft_delete_folder(
            doomed.as_str(),
            chrono::Utc::now(),
            user_id.as_str(),
            &con,
        )
        .unwrap();
        con.close().unwrap();
        let outcome = recalculate_user_contributions(user_id.as_str()).unwrap();
        assert_eq!(2, outcome.contributions);
        assert_eq!(20, outcome.xp);
        cleanup();
    }

    #[test]
    fn recalculate_zeroes_a_user_with_no_folders() {
        refresh_db();
        let user_id = create_user_db_entry("lurker", Role::User);
        let outcome = recalculate_user_contributions(user_id.as_str()).unwrap();
        assert_eq!(0, outcome.contributions);
        assert_eq!(0, outcome.xp);
        cleanup();
    }

    #[test]
    fn recalculate_rejects_unknown_user() {
        refresh_db();
        let res = recalculate_user_contributions("missing").unwrap_err();
        assert_eq!(RecalculateError::UserNotFound, res);
        cleanup();
    }
}
