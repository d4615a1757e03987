use std::path::Path;

use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};
use sarovar_core::generate_reference;
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};
use crate::schema::init_schema;
use crate::seed::seed_menu;
use crate::types::{Booking, MenuFilter, MenuItem, NewBooking, Rating};

const MENU_COLUMNS: &str = "id, name, description, price, category, is_veg, is_vegan, is_spicy, is_bestseller, image_url";

const BOOKING_COLUMNS: &str =
    "id, session_id, name, date, time, party_size, special_requests, status, created_at";

/// SQLite store shared by the HTTP handlers
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Open (or create) the database file, bootstrap the schema and seed an
    /// empty menu
    pub fn open(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.bootstrap()?;
        info!("Store opened at {:?}", path);
        Ok(store)
    }

    pub fn open_in_memory() -> StorageResult<Self> {
        let store = Self {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        store.bootstrap()?;
        Ok(store)
    }

    fn bootstrap(&self) -> StorageResult<()> {
        let conn = self.conn.lock();
        init_schema(&conn)?;

        if count_menu(&conn)? == 0 {
            let seeded = seed_menu(&conn)?;
            info!("Seeded {} menu items", seeded);
        }
        Ok(())
    }

    // ── Menu ───────────────────────────────────────────────────────────

    /// Ordered by category, bestsellers first, then name
    pub fn list_menu(&self, filter: &MenuFilter) -> StorageResult<Vec<MenuItem>> {
        let mut sql = format!("SELECT {} FROM menu_items", MENU_COLUMNS);
        let mut conditions = Vec::new();
        let mut args: Vec<&dyn ToSql> = Vec::new();

        if let Some(category) = &filter.category {
            conditions.push("category = ?");
            args.push(category);
        }
        if filter.veg_only {
            conditions.push("is_veg = 1");
        }
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY category, is_bestseller DESC, name");

        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&sql)?;
        let items = stmt
            .query_map(args.as_slice(), menu_item_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = items.len(), ?filter, "menu listed");
        Ok(items)
    }

    /// Distinct categories, alphabetical
    pub fn categories(&self) -> StorageResult<Vec<String>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT DISTINCT category FROM menu_items ORDER BY category")?;
        let categories = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(categories)
    }

    /// Replace the menu with the seed catalog
    pub fn reset_menu(&self) -> StorageResult<usize> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM menu_items", [])?;
        let seeded = seed_menu(&tx)?;
        tx.commit()?;
        info!("Menu reset with {} items", seeded);
        Ok(seeded)
    }

    // ── Bookings ───────────────────────────────────────────────────────

    /// Store a booking under a freshly generated reference
    pub fn create_booking(&self, session_id: &str, booking: &NewBooking) -> StorageResult<Booking> {
        if booking.name.trim().is_empty()
            || booking.date.trim().is_empty()
            || booking.time.trim().is_empty()
        {
            return Err(StorageError::invalid("name, date and time are required"));
        }

        let id = generate_reference();
        {
            let conn = self.conn.lock();
            conn.execute(
                "INSERT INTO bookings (id, session_id, name, date, time, party_size, special_requests)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    id,
                    session_id,
                    booking.name,
                    booking.date,
                    booking.time,
                    booking.party_size,
                    booking.special_requests,
                ],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    StorageError::DuplicateBooking { id: id.clone() }
                }
                other => StorageError::Database(other),
            })?;
        }

        info!(booking_id = %id, party_size = booking.party_size, "booking created");
        self.get_booking(&id)?
            .ok_or_else(|| StorageError::invalid(format!("booking {} vanished after insert", id)))
    }

    /// Case-insensitive lookup by reference
    pub fn get_booking(&self, id: &str) -> StorageResult<Option<Booking>> {
        let conn = self.conn.lock();
        let booking = conn
            .query_row(
                &format!("SELECT {} FROM bookings WHERE id = ?1", BOOKING_COLUMNS),
                params![id.trim().to_ascii_uppercase()],
                booking_from_row,
            )
            .optional()?;
        Ok(booking)
    }

    // ── Ratings ────────────────────────────────────────────────────────

    pub fn insert_rating(&self, rating: &Rating) -> StorageResult<i64> {
        if !(1..=5).contains(&rating.rating) {
            return Err(StorageError::invalid(format!(
                "rating {} outside 1..=5",
                rating.rating
            )));
        }

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO ratings (session_id, rating, feedback) VALUES (?1, ?2, ?3)",
            params![rating.session_id, rating.rating, rating.feedback],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn count_menu(conn: &Connection) -> StorageResult<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM menu_items", [], |row| row.get(0))?;
    Ok(count as usize)
}

fn menu_item_from_row(row: &Row<'_>) -> rusqlite::Result<MenuItem> {
    Ok(MenuItem {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        category: row.get(4)?,
        is_veg: row.get(5)?,
        is_vegan: row.get(6)?,
        is_spicy: row.get(7)?,
        is_bestseller: row.get(8)?,
        image_url: row.get(9)?,
    })
}

fn booking_from_row(row: &Row<'_>) -> rusqlite::Result<Booking> {
    Ok(Booking {
        id: row.get(0)?,
        session_id: row.get(1)?,
        name: row.get(2)?,
        date: row.get(3)?,
        time: row.get(4)?,
        party_size: row.get(5)?,
        special_requests: row.get(6)?,
        status: row.get(7)?,
        created_at: row.get(8)?,
    })
}
