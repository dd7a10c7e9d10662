use std::backtrace::Backtrace;

use chrono::Utc;
use itertools::Itertools;

use crate::contributions::models::{RecalculateError, RecalculationOutcome};
use crate::repository::{folder_repository, open_connection, user_repository};

/// recounts the user's files and writes `contributions` plus the derived
/// `xp` in one statement. The count is folder-scoped: every file in a
/// non-deleted folder the user uploaded counts toward them, whoever
/// appended it. Concurrent folder writes race this read and the last
/// recalculation to land wins; sequential writes always converge
pub fn recalculate_user_contributions(
    user_id: &str,
) -> Result<RecalculationOutcome, RecalculateError> {
    let con = open_connection();
    let user = match user_repository::get_user_by_id(user_id, &con) {
        Ok(Some(user)) => user,
        Ok(None) => {
            con.close().unwrap();
            return Err(RecalculateError::UserNotFound);
        }
        Err(_) => {
            con.close().unwrap();
            return Err(RecalculateError::DbFailure);
        }
    };
    let folders = match folder_repository::get_folders_by_uploader(user_id, &con) {
        Ok(folders) => folders,
        Err(e) => {
            log::error!(
                "Failed to pull folders to recalculate contributions for {user_id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(RecalculateError::DbFailure);
        }
    };
    let contributions: u32 = folders
        .iter()
        .unique_by(|folder| folder.id.as_str())
        .map(|folder| folder.files.len() as u32)
        .sum();
    let xp = contributions * 10;
    if let Err(e) =
        user_repository::update_contributions(user_id, contributions, xp, Utc::now(), &con)
    {
        log::error!(
            "Failed to write recalculated contributions for {user_id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(RecalculateError::DbFailure);
    }
    con.close().unwrap();
    Ok(RecalculationOutcome {
        success: true,
        user_id: user.id,
        contributions,
        xp,
    })
}

/// hands the uploader id to the queue when rabbit is wired up, otherwise
/// recalculates inline. Either way failures are logged and swallowed; the
/// counters are derived data and the next folder write trips another pass
#[cfg(any(not(test), rust_analyzer))]
pub fn queue_recalculation(user_id: &str) {
    use crate::config::RESOURCE_SERVER_CONFIG;
    use crate::queue;

    if RESOURCE_SERVER_CONFIG.rabbit_mq.enabled {
        queue::publish_message(queue::CONTRIBUTION_RECALC_QUEUE, &user_id.to_string());
    } else if let Err(e) = recalculate_user_contributions(user_id) {
        log::warn!("Inline contribution recalculation for {user_id} came back with {e:?}");
    }
}

/// test builds recalculate inline so assertions read settled counters
#[cfg(all(test, not(rust_analyzer)))]
pub fn queue_recalculation(user_id: &str) {
    if let Err(e) = recalculate_user_contributions(user_id) {
        log::warn!("Inline contribution recalculation for {user_id} came back with {e:?}");
    }
}

/// consumer entry point: recalculates and reports whether the message did
/// any good. The caller acks either way; a poison message that can't
/// recalculate is logged here and dropped
pub async fn handle_recalc_message(user_id: String) -> bool {
    match recalculate_user_contributions(user_id.as_str()) {
        Ok(outcome) => {
            log::info!(
                "Recalculated contributions for {}: {} files, {} xp",
                outcome.user_id,
                outcome.contributions,
                outcome.xp
            );
            true
        }
        Err(e) => {
            log::error!("Contribution recalculation for {user_id} failed with {e:?}");
            false
        }
    }
}
