use rusqlite::{Connection, Result};

/// runs every migration script that the database is behind on, in order
pub fn migrate_db(con: &Connection, version: u64) -> Result<()> {
    if version < 2 {
        migrate_to_v2(con)?;
    }
    Ok(())
}

/// v2 adds the activity logging tables (Sessions, Downloads)
fn migrate_to_v2(con: &Connection) -> Result<()> {
    log::info!("migrating database to version 2...");
    con.execute_batch(include_str!("./assets/migration/v2.sql"))?;
    log::info!("successfully migrated database to version 2");
    Ok(())
}
