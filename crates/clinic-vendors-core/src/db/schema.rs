//! SQLite schema definition.

/// Complete database schema for the vendor directory.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Vendors
-- ============================================================================

CREATE TABLE IF NOT EXISTS vendors (
    id TEXT PRIMARY KEY,
    clinic_id TEXT NOT NULL,
    name TEXT NOT NULL,
    normalized_name TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- At most one vendor per normalized name per clinic
CREATE UNIQUE INDEX IF NOT EXISTS idx_vendors_clinic_normalized
    ON vendors(clinic_id, normalized_name);

CREATE INDEX IF NOT EXISTS idx_vendors_clinic ON vendors(clinic_id);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        assert!(conn.execute_batch(SCHEMA).is_ok());
    }

    #[test]
    fn test_unique_normalized_name_per_clinic() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        let insert = "INSERT INTO vendors (id, clinic_id, name, normalized_name, created_at) \
                      VALUES (?, ?, ?, ?, datetime('now'))";

        conn.execute(insert, ["v1", "A", "Acme", "acme"]).unwrap();

        // Same clinic, same normalized name should fail
        let result = conn.execute(insert, ["v2", "A", "ACME.", "acme"]);
        assert!(result.is_err());

        // Other clinic is fine
        let result = conn.execute(insert, ["v3", "B", "Acme", "acme"]);
        assert!(result.is_ok());
    }
}
