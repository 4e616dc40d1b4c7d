//! Reservation overlap rule and date filtering over a real embedded store
//! Run: cargo test -p reserva-server --test reservation_conflict

use chrono::{Duration, Utc};
use surrealdb::RecordId;

use reserva_server::db::DbService;
use reserva_server::db::models::{
    ClientCreate, DiningTableCreate, ReservationCreate, ReservationStatus,
};
use reserva_server::db::repository::{
    ClientRepository, DiningTableRepository, RepoError, Repository, ReservationRepository,
};

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;

struct Fixture {
    _tmp: tempfile::TempDir,
    service: DbService,
    ana: RecordId,
    ben: RecordId,
    t1: RecordId,
    t2: RecordId,
}

impl Fixture {
    fn reservations(&self) -> ReservationRepository {
        ReservationRepository::new(self.service.db.clone())
    }
}

/// Two clients and two tables, ready to book
async fn seed() -> Fixture {
    let tmp = tempfile::tempdir().unwrap();
    let service = DbService::new(tmp.path()).await.unwrap();

    let clients = ClientRepository::new(service.db.clone());
    let tables = DiningTableRepository::new(service.db.clone());

    let ana = clients
        .create(ClientCreate {
            name: "Ana García".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+34911223344".to_string(),
            address: None,
        })
        .await
        .unwrap()
        .id
        .unwrap();
    let ben = clients
        .create(ClientCreate {
            name: "Benito Ruiz".to_string(),
            email: "benito@example.com".to_string(),
            phone: "+34911223355".to_string(),
            address: None,
        })
        .await
        .unwrap()
        .id
        .unwrap();

    let t1 = tables
        .create(DiningTableCreate {
            table_number: 1,
            capacity: 4,
            location: "Salón".to_string(),
        })
        .await
        .unwrap()
        .id
        .unwrap();
    let t2 = tables
        .create(DiningTableCreate {
            table_number: 2,
            capacity: 2,
            location: "Terraza".to_string(),
        })
        .await
        .unwrap()
        .id
        .unwrap();

    Fixture {
        _tmp: tmp,
        service,
        ana,
        ben,
        t1,
        t2,
    }
}

fn booking(client: &RecordId, table: &RecordId, at: i64) -> ReservationCreate {
    ReservationCreate {
        client_id: client.clone(),
        table_id: table.clone(),
        reserved_at: at,
        status: ReservationStatus::default(),
        notes: None,
    }
}

/// Tomorrow, so the not-in-the-past rule never interferes
fn base_time() -> i64 {
    Utc::now().timestamp_millis() + 24 * HOUR_MS
}

#[tokio::test]
async fn overlapping_booking_by_another_client_is_rejected() {
    let fx = seed().await;
    let repo = fx.reservations();
    let base = base_time();

    repo.create(booking(&fx.ana, &fx.t1, base)).await.unwrap();

    // 90 minutes later on the same table, different client
    let err = repo
        .create(booking(&fx.ben, &fx.t1, base + 90 * MINUTE_MS))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));

    // 3 hours later is outside the window
    repo.create(booking(&fx.ben, &fx.t1, base + 3 * HOUR_MS))
        .await
        .unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn window_bounds_are_inclusive() {
    let fx = seed().await;
    let repo = fx.reservations();
    let base = base_time();

    repo.create(booking(&fx.ana, &fx.t1, base)).await.unwrap();

    // Exactly two hours away on either side still conflicts
    let err = repo
        .create(booking(&fx.ben, &fx.t1, base + 2 * HOUR_MS))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));
    let err = repo
        .create(booking(&fx.ben, &fx.t1, base - 2 * HOUR_MS))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));

    // One millisecond past the bound is fine
    repo.create(booking(&fx.ben, &fx.t1, base + 2 * HOUR_MS + 1))
        .await
        .unwrap();
}

#[tokio::test]
async fn same_client_and_other_tables_are_exempt() {
    let fx = seed().await;
    let repo = fx.reservations();
    let base = base_time();

    repo.create(booking(&fx.ana, &fx.t1, base)).await.unwrap();

    // The same client may hold nearby times on the same table
    repo.create(booking(&fx.ana, &fx.t1, base + 30 * MINUTE_MS))
        .await
        .unwrap();

    // Another client at the same instant on a different table
    repo.create(booking(&fx.ben, &fx.t2, base)).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn cancelled_reservations_still_hold_their_slot() {
    let fx = seed().await;
    let repo = fx.reservations();
    let base = base_time();

    let mut cancelled = booking(&fx.ana, &fx.t1, base);
    cancelled.status = ReservationStatus::Cancelled;
    repo.create(cancelled).await.unwrap();

    let err = repo
        .create(booking(&fx.ben, &fx.t1, base + HOUR_MS))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));
}

#[tokio::test]
async fn update_reruns_the_check_excluding_itself() {
    let fx = seed().await;
    let repo = fx.reservations();
    let base = base_time();

    repo.create(booking(&fx.ana, &fx.t1, base)).await.unwrap();
    let bens = repo
        .create(booking(&fx.ben, &fx.t1, base + 6 * HOUR_MS))
        .await
        .unwrap();
    let bens_id = bens.id.as_ref().unwrap().to_string();

    // Moving into Ana's window is rejected, and the record is untouched
    let err = repo
        .update(&bens_id, booking(&fx.ben, &fx.t1, base + 90 * MINUTE_MS))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));
    let unchanged = repo.find_by_id(&bens_id).await.unwrap().unwrap();
    assert_eq!(unchanged.reserved_at, base + 6 * HOUR_MS);

    // Moving within its own window is fine: the record does not conflict
    // with itself
    let moved = repo
        .update(&bens_id, booking(&fx.ben, &fx.t1, base + 5 * HOUR_MS))
        .await
        .unwrap();
    assert_eq!(moved.reserved_at, base + 5 * HOUR_MS);
    assert_eq!(moved.status, ReservationStatus::Pending);
}

#[tokio::test]
async fn past_times_and_missing_ids_are_rejected() {
    let fx = seed().await;
    let repo = fx.reservations();

    let err = repo
        .create(booking(&fx.ana, &fx.t1, Utc::now().timestamp_millis() - HOUR_MS))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let err = repo
        .update("reservas:doesnotexist", booking(&fx.ana, &fx.t1, base_time()))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    let err = repo.delete("reservas:doesnotexist").await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn find_by_date_uses_utc_day_bounds() {
    let fx = seed().await;
    let repo = fx.reservations();

    let day = (Utc::now() + Duration::days(40)).date_naive();
    let next_day = day.succ_opt().unwrap();
    let at = |d: chrono::NaiveDate, h: u32| {
        d.and_hms_opt(h, 0, 0).unwrap().and_utc().timestamp_millis()
    };

    // Same client books lunch and dinner, plus one the day after
    repo.create(booking(&fx.ana, &fx.t1, at(day, 12))).await.unwrap();
    repo.create(booking(&fx.ana, &fx.t1, at(day, 19))).await.unwrap();
    repo.create(booking(&fx.ana, &fx.t1, at(next_day, 14)))
        .await
        .unwrap();

    let on_day = repo.find_by_date(day).await.unwrap();
    assert_eq!(on_day.len(), 2);
    assert_eq!(on_day[0].reserved_at, at(day, 12));
    assert_eq!(on_day[1].reserved_at, at(day, 19));

    assert_eq!(repo.find_by_date(next_day).await.unwrap().len(), 1);
    let empty_day = next_day.succ_opt().unwrap();
    assert!(repo.find_by_date(empty_day).await.unwrap().is_empty());
}

#[tokio::test]
async fn stored_references_round_trip_as_strings() {
    let fx = seed().await;
    let repo = fx.reservations();

    let created = repo
        .create(booking(&fx.ana, &fx.t1, base_time()))
        .await
        .unwrap();
    assert_eq!(created.client_id, fx.ana);
    assert_eq!(created.table_id, fx.t1);

    // Over the wire the references are plain strings
    let json = serde_json::to_value(&created).unwrap();
    assert_eq!(json["client_id"], fx.ana.to_string());
    assert_eq!(json["table_id"], fx.t1.to_string());
    assert!(json["id"].as_str().unwrap().starts_with("reservas:"));
}
