//! Reservation Repository
//!
//! Besides plain CRUD this owns the booking-overlap rule: a table cannot be
//! reserved by two different clients within 2 hours of each other. The check
//! is a read before the write, not a store transaction; with a single server
//! process writing, that is enough.

use chrono::NaiveDate;

use super::{BaseRepository, RESERVATION_TABLE, RepoError, RepoResult, Repository};
use crate::db::models::{Reservation, ReservationCreate, ReservationUpdate};
use crate::utils::time::{conflict_window, day_end_millis, day_start_millis};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = RESERVATION_TABLE;

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all reservations whose time falls on the given UTC calendar date.
    pub async fn find_by_date(&self, date: NaiveDate) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query(
                "SELECT * FROM reservas WHERE reserved_at >= $start AND reserved_at < $end \
                 ORDER BY reserved_at",
            )
            .bind(("start", day_start_millis(date)))
            .bind(("end", day_end_millis(date)))
            .await?
            .take(0)?;
        Ok(reservations)
    }

    /// Reservations on the same table by a different client within the
    /// 2-hour window around `reserved_at`, bounds inclusive. `exclude` drops
    /// the record being updated from the candidates. Status is deliberately
    /// not filtered: a cancelled reservation still holds its slot.
    async fn find_conflicting(
        &self,
        table_id: &RecordId,
        client_id: &RecordId,
        reserved_at: i64,
        exclude: Option<&RecordId>,
    ) -> RepoResult<Vec<Reservation>> {
        let (from, until) = conflict_window(reserved_at);

        let mut sql = String::from(
            "SELECT * FROM reservas WHERE table_id = $table AND client_id != $client \
             AND reserved_at >= $from AND reserved_at <= $until",
        );
        if exclude.is_some() {
            sql.push_str(" AND id != $exclude");
        }

        let mut query = self
            .base
            .db()
            .query(sql)
            .bind(("table", table_id.clone()))
            .bind(("client", client_id.clone()))
            .bind(("from", from))
            .bind(("until", until));
        if let Some(id) = exclude {
            query = query.bind(("exclude", id.clone()));
        }

        let conflicting: Vec<Reservation> = query.await?.take(0)?;
        Ok(conflicting)
    }

    async fn ensure_no_conflict(
        &self,
        table_id: &RecordId,
        client_id: &RecordId,
        reserved_at: i64,
        exclude: Option<&RecordId>,
    ) -> RepoResult<()> {
        let conflicting = self
            .find_conflicting(table_id, client_id, reserved_at, exclude)
            .await?;
        if !conflicting.is_empty() {
            return Err(RepoError::Conflict(format!(
                "Table {} already has a reservation within 2 hours of the requested time",
                table_id
            )));
        }
        Ok(())
    }
}

impl Repository<Reservation, ReservationCreate, ReservationUpdate> for ReservationRepository {
    /// Find all reservations ordered by time
    async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservas ORDER BY reserved_at")
            .await?
            .take(0)?;
        Ok(reservations)
    }

    /// Find reservation by id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let reservation: Option<Reservation> = self.base.db().select(thing).await?;
        Ok(reservation)
    }

    /// Create a new reservation after the overlap check
    async fn create(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        data.validate()?;
        self.ensure_no_conflict(&data.table_id, &data.client_id, data.reserved_at, None)
            .await?;

        // References must be bound as RecordId values; serializing the
        // struct through content() would store them as plain strings and
        // the window query above would stop matching them.
        let created: Vec<Reservation> = self
            .base
            .db()
            .query(
                "CREATE reservas SET client_id = $client, table_id = $table, \
                 reserved_at = $at, status = $status, notes = $notes",
            )
            .bind(("client", data.client_id))
            .bind(("table", data.table_id))
            .bind(("at", data.reserved_at))
            .bind(("status", data.status))
            .bind(("notes", data.notes))
            .await?
            .take(0)?;

        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    /// Replace every field of an existing reservation, re-running the
    /// overlap check with the record itself excluded
    async fn update(&self, id: &str, data: ReservationUpdate) -> RepoResult<Reservation> {
        data.validate()?;
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))?;

        self.ensure_no_conflict(
            &data.table_id,
            &data.client_id,
            data.reserved_at,
            Some(&thing),
        )
        .await?;

        self.base
            .db()
            .query(
                "UPDATE $thing SET client_id = $client, table_id = $table, \
                 reserved_at = $at, status = $status, notes = $notes",
            )
            .bind(("thing", thing))
            .bind(("client", data.client_id))
            .bind(("table", data.table_id))
            .bind(("at", data.reserved_at))
            .bind(("status", data.status))
            .bind(("notes", data.notes))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Delete a reservation
    async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let deleted: Option<Reservation> = self.base.db().delete(thing).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!(
                "Reservation {} not found",
                id
            )));
        }
        Ok(true)
    }

    /// Count all reservations
    async fn count(&self) -> RepoResult<i64> {
        self.base.count_table(TABLE).await
    }
}
