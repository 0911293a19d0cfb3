//! Bread crumb demo
//!
//! Creates a small example table and reads it back through the goose.

use application::GooseDb;
use application::ports::SqlConnectionPort;
use domain::QueryFrame;

/// Create and fill the `bread_crumbs` table
pub fn create_example_table<C: SqlConnectionPort>(db: &GooseDb<C>) -> Result<(), C::Error> {
    db.execute(
        "
        CREATE TABLE IF NOT EXISTS bread_crumbs (
            id INTEGER PRIMARY KEY,
            location VARCHAR,
            tastiness INTEGER
        )
        ",
        &[],
    )?;

    db.execute(
        "
        INSERT INTO bread_crumbs VALUES
        (1, 'Park Bench', 8),
        (2, 'Sidewalk', 5),
        (3, 'Pond Edge', 9)
        ",
        &[],
    )?;

    Ok(())
}

/// Tastiest crumbs first
pub fn analyse<C: SqlConnectionPort>(db: &GooseDb<C>) -> Result<QueryFrame, C::Error> {
    db.query("SELECT * FROM bread_crumbs ORDER BY tastiness DESC", &[])
}

#[cfg(test)]
mod tests {
    use domain::{CellValue, HonkProbability};
    use infrastructure::{GooseConfig, InterferenceConfig};

    use super::*;

    fn quiet_config() -> GooseConfig {
        GooseConfig {
            interference: InterferenceConfig {
                honk_probability: HonkProbability::NEVER,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn demo_on_duckdb() {
        let db = infrastructure::open_duckdb(&quiet_config()).unwrap();
        create_example_table(&db).unwrap();

        let frame = analyse(&db).unwrap();
        assert_eq!(frame.row_count(), 3);
        assert_eq!(frame.get(0, "location"), Some(&CellValue::Text("Pond Edge".into())));
        assert_eq!(frame.get(2, "location"), Some(&CellValue::Text("Sidewalk".into())));
    }

    #[test]
    fn demo_on_sqlite() {
        let db = infrastructure::open_sqlite(&quiet_config()).unwrap();
        create_example_table(&db).unwrap();

        let frame = analyse(&db).unwrap();
        assert_eq!(frame.get(1, "tastiness"), Some(&CellValue::Integer(8)));
    }

    #[test]
    fn running_demo_twice_hits_the_primary_key() {
        let db = infrastructure::open_duckdb(&quiet_config()).unwrap();
        create_example_table(&db).unwrap();
        assert!(create_example_table(&db).is_err());
    }
}
