//! Vendor database operations.

use rusqlite::{ffi, params, OptionalExtension, Row};

use super::Database;
use crate::models::Vendor;
use crate::store::{StoreError, StoreResult, VendorStore};

const VENDOR_COLUMNS: &str = "id, clinic_id, name, normalized_name, created_at";

impl Database {
    /// Insert seed vendors, skipping any that collide with an existing record.
    ///
    /// Returns the number of vendors actually inserted.
    pub fn seed_vendors(&self, vendors: &[Vendor]) -> StoreResult<usize> {
        let mut inserted = 0;
        for vendor in vendors {
            inserted += self.conn.execute(
                &format!(
                    "INSERT OR IGNORE INTO vendors ({}) VALUES (?1, ?2, ?3, ?4, ?5)",
                    VENDOR_COLUMNS
                ),
                params![
                    vendor.id,
                    vendor.clinic_id,
                    vendor.name,
                    vendor.normalized_name,
                    vendor.created_at,
                ],
            )?;
        }
        tracing::debug!(inserted, offered = vendors.len(), "Seeded vendors");
        Ok(inserted)
    }

    /// Count vendors of a clinic.
    pub fn count_vendors(&self, clinic_id: &str) -> StoreResult<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM vendors WHERE clinic_id = ?",
            [clinic_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn query_one(&self, sql: &str, clinic_id: &str, key: &str) -> StoreResult<Option<Vendor>> {
        self.conn
            .query_row(sql, [clinic_id, key], vendor_from_row)
            .optional()
            .map_err(Into::into)
    }
}

impl VendorStore for Database {
    fn fetch_all(&self, clinic_id: &str) -> StoreResult<Vec<Vendor>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM vendors WHERE clinic_id = ? ORDER BY rowid",
            VENDOR_COLUMNS
        ))?;

        let rows = stmt.query_map([clinic_id], vendor_from_row)?;

        let mut vendors = Vec::new();
        for row in rows {
            vendors.push(row?);
        }
        Ok(vendors)
    }

    fn insert(&self, vendor: Vendor) -> StoreResult<Vendor> {
        let result = self.conn.execute(
            &format!(
                "INSERT INTO vendors ({}) VALUES (?1, ?2, ?3, ?4, ?5)",
                VENDOR_COLUMNS
            ),
            params![
                vendor.id,
                vendor.clinic_id,
                vendor.name,
                vendor.normalized_name,
                vendor.created_at,
            ],
        );

        match result {
            Ok(_) => Ok(vendor),
            // Only the (clinic_id, normalized_name) index; a primary key
            // collision on id is not a name duplicate
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Err(StoreError::Duplicate {
                    clinic_id: vendor.clinic_id,
                    normalized_name: vendor.normalized_name,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn find_by_normalized_name(
        &self,
        clinic_id: &str,
        normalized_name: &str,
    ) -> StoreResult<Option<Vendor>> {
        self.query_one(
            &format!(
                "SELECT {} FROM vendors WHERE clinic_id = ?1 AND normalized_name = ?2",
                VENDOR_COLUMNS
            ),
            clinic_id,
            normalized_name,
        )
    }

    fn find_by_id(&self, clinic_id: &str, id: &str) -> StoreResult<Option<Vendor>> {
        self.query_one(
            &format!(
                "SELECT {} FROM vendors WHERE clinic_id = ?1 AND id = ?2",
                VENDOR_COLUMNS
            ),
            clinic_id,
            id,
        )
    }
}

fn vendor_from_row(row: &Row<'_>) -> rusqlite::Result<Vendor> {
    Ok(Vendor {
        id: row.get(0)?,
        clinic_id: row.get(1)?,
        name: row.get(2)?,
        normalized_name: row.get(3)?,
        created_at: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_insert_and_fetch() {
        let db = setup_db();

        let vendor = db.insert(Vendor::new("A", "Medical Supplies Co.")).unwrap();

        let fetched = db.fetch_all("A").unwrap();
        assert_eq!(fetched, vec![vendor]);
        assert!(db.fetch_all("B").unwrap().is_empty());
    }

    #[test]
    fn test_insert_duplicate() {
        let db = setup_db();
        db.insert(Vendor::new("A", "Medical Supplies Co.")).unwrap();

        let result = db.insert(Vendor::new("A", "medical supplies co"));
        match result {
            Err(StoreError::Duplicate {
                clinic_id,
                normalized_name,
            }) => {
                assert_eq!(clinic_id, "A");
                assert_eq!(normalized_name, "medical supplies co");
            }
            other => panic!("Expected duplicate error, got {:?}", other),
        }
        assert_eq!(db.count_vendors("A").unwrap(), 1);
    }

    #[test]
    fn test_insert_id_collision_is_not_duplicate() {
        let db = setup_db();
        let first = db.insert(Vendor::new("A", "Acme Labs")).unwrap();

        let mut other = Vendor::new("A", "Globex");
        other.id = first.id.clone();

        match db.insert(other) {
            Err(StoreError::Sqlite(rusqlite::Error::SqliteFailure(err, _))) => {
                assert_eq!(err.extended_code, ffi::SQLITE_CONSTRAINT_PRIMARYKEY);
            }
            other => panic!("Expected primary key failure, got {:?}", other),
        }
        assert_eq!(db.count_vendors("A").unwrap(), 1);
    }

    #[test]
    fn test_fetch_preserves_insertion_order() {
        let db = setup_db();
        for name in ["Zeta", "Alpha", "Mid"] {
            db.insert(Vendor::new("A", name)).unwrap();
        }

        let names: Vec<String> = db.fetch_all("A").unwrap().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_find_by_normalized_name() {
        let db = setup_db();
        let vendor = db.insert(Vendor::new("A", "Acme Labs")).unwrap();

        let found = db.find_by_normalized_name("A", "acme labs").unwrap();
        assert_eq!(found, Some(vendor));
        assert!(db.find_by_normalized_name("B", "acme labs").unwrap().is_none());
        assert!(db.find_by_normalized_name("A", "acme").unwrap().is_none());
    }

    #[test]
    fn test_find_by_id_scoped_to_clinic() {
        let db = setup_db();
        let vendor = db.insert(Vendor::new("A", "Acme Labs")).unwrap();

        assert_eq!(db.find_by_id("A", &vendor.id).unwrap(), Some(vendor.clone()));
        assert!(db.find_by_id("B", &vendor.id).unwrap().is_none());
    }

    #[test]
    fn test_seed_vendors_skips_collisions() {
        let db = setup_db();
        db.insert(Vendor::new("A", "Acme")).unwrap();

        let seed = vec![
            Vendor::new("A", "ACME"),
            Vendor::new("A", "Globex"),
            Vendor::new("B", "Acme"),
        ];
        let inserted = db.seed_vendors(&seed).unwrap();

        assert_eq!(inserted, 2);
        assert_eq!(db.count_vendors("A").unwrap(), 2);
        assert_eq!(db.count_vendors("B").unwrap(), 1);

        // Seeding twice is a no-op
        assert_eq!(db.seed_vendors(&seed).unwrap(), 0);
    }
}
