use chrono::{TimeZone, Utc};
use sea_orm::Database;
use uuid::Uuid;

use engine::{Amount, Draft, Ledger, LedgerError};
use migration::MigratorTrait;

async fn ledger_with_db() -> Ledger {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Ledger::builder().database(db).build().await.unwrap()
}

fn draft(cents: i64, category: &str, day: u32) -> Draft {
    Draft {
        amount: Amount::new(cents),
        category: category.to_string(),
        date: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
        note: None,
    }
}

#[tokio::test]
async fn fresh_ledger_is_empty_everywhere() {
    let ledger = ledger_with_db().await;

    assert!(ledger.transactions().is_empty());
    let totals = ledger.totals();
    assert_eq!(totals.income, Amount::ZERO);
    assert_eq!(totals.expense, Amount::ZERO);
    assert_eq!(totals.balance, Amount::ZERO);
    assert!(ledger.category_breakdown().is_empty());
    assert_eq!(ledger.export_csv(), Err(LedgerError::EmptyLedger));
    assert_eq!(
        ledger.insight_prompt("anything"),
        Err(LedgerError::EmptyLedger)
    );
}

#[tokio::test]
async fn create_refreshes_snapshot_and_aggregates() {
    let mut ledger = ledger_with_db().await;

    ledger.create(draft(7550, "Food & Dining", 3)).await.unwrap();
    ledger.create(draft(200_000, "Income", 5)).await.unwrap();

    assert_eq!(ledger.transactions().len(), 2);

    let totals = ledger.totals();
    assert_eq!(totals.income, Amount::new(200_000));
    assert_eq!(totals.expense, Amount::new(7550));
    assert_eq!(totals.balance, Amount::new(192_450));

    let breakdown = ledger.category_breakdown();
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].category, "Food & Dining");
    assert_eq!(breakdown[0].amount, Amount::new(7550));
}

#[tokio::test]
async fn snapshot_lists_most_recent_date_first() {
    let mut ledger = ledger_with_db().await;

    ledger.create(draft(100, "Travel", 1)).await.unwrap();
    ledger.create(draft(200, "Travel", 20)).await.unwrap();
    ledger.create(draft(300, "Travel", 10)).await.unwrap();

    let days: Vec<u32> = ledger
        .transactions()
        .iter()
        .map(|tx| {
            use chrono::Datelike;
            tx.date.day()
        })
        .collect();
    assert_eq!(days, vec![20, 10, 1]);
}

#[tokio::test]
async fn create_assigns_unique_ids() {
    let mut ledger = ledger_with_db().await;

    let a = ledger.create(draft(100, "Travel", 1)).await.unwrap();
    let b = ledger.create(draft(100, "Travel", 1)).await.unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn update_replaces_fields_and_rederives_kind() {
    let mut ledger = ledger_with_db().await;

    let created = ledger.create(draft(7550, "Food & Dining", 3)).await.unwrap();
    assert_eq!(created.kind, engine::Kind::Expense);

    ledger
        .update(created.id, draft(200_000, "Income", 4))
        .await
        .unwrap();

    let snapshot = ledger.transactions();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, created.id);
    assert_eq!(snapshot[0].kind, engine::Kind::Income);
    assert_eq!(snapshot[0].amount, Amount::new(200_000));

    let totals = ledger.totals();
    assert_eq!(totals.expense, Amount::ZERO);
    assert_eq!(totals.income, Amount::new(200_000));
}

#[tokio::test]
async fn update_unknown_id_is_key_not_found() {
    let mut ledger = ledger_with_db().await;
    ledger.create(draft(100, "Travel", 1)).await.unwrap();

    let missing = Uuid::new_v4();
    let err = ledger.update(missing, draft(200, "Travel", 2)).await;
    assert_eq!(err, Err(LedgerError::KeyNotFound(missing.to_string())));
    assert_eq!(ledger.transactions()[0].amount, Amount::new(100));
}

#[tokio::test]
async fn delete_removes_and_refreshes() {
    let mut ledger = ledger_with_db().await;

    let created = ledger.create(draft(100, "Travel", 1)).await.unwrap();
    ledger.create(draft(200, "Shopping", 2)).await.unwrap();

    ledger.delete(created.id).await.unwrap();

    let snapshot = ledger.transactions();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].category, "Shopping");
    assert_eq!(ledger.totals().expense, Amount::new(200));
}

#[tokio::test]
async fn failed_delete_leaves_snapshot_untouched() {
    let mut ledger = ledger_with_db().await;

    ledger.create(draft(100, "Travel", 1)).await.unwrap();
    let before: Vec<_> = ledger.transactions().to_vec();

    let missing = Uuid::new_v4();
    let err = ledger.delete(missing).await;
    assert_eq!(err, Err(LedgerError::KeyNotFound(missing.to_string())));
    assert_eq!(ledger.transactions(), &before[..]);
}

#[tokio::test]
async fn clear_all_empties_the_ledger() {
    let mut ledger = ledger_with_db().await;

    ledger.create(draft(100, "Travel", 1)).await.unwrap();
    ledger.create(draft(200_000, "Income", 2)).await.unwrap();

    ledger.clear_all().await.unwrap();

    assert!(ledger.transactions().is_empty());
    assert_eq!(ledger.totals().balance, Amount::ZERO);
    assert_eq!(ledger.export_csv(), Err(LedgerError::EmptyLedger));
}

#[tokio::test]
async fn invalid_drafts_never_reach_the_store() {
    let mut ledger = ledger_with_db().await;

    let err = ledger.create(draft(0, "Travel", 1)).await;
    assert!(matches!(err, Err(LedgerError::InvalidAmount(_))));

    let err = ledger.create(draft(100, "", 1)).await;
    assert!(matches!(err, Err(LedgerError::InvalidDraft(_))));

    assert!(ledger.transactions().is_empty());
}

#[tokio::test]
async fn export_reflects_the_stored_snapshot() {
    let mut ledger = ledger_with_db().await;

    ledger.create(draft(7550, "Food & Dining", 3)).await.unwrap();
    ledger.create(draft(200_000, "Income", 10)).await.unwrap();

    let csv = ledger.export_csv().unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Date,Category,Type,Amount,Note");
    assert_eq!(lines[1], "2026-03-10,Income,Income,2000.00,");
    assert_eq!(lines[2], "2026-03-03,Food & Dining,Expense,75.50,");
}

#[tokio::test]
async fn chart_series_is_stable_across_refreshes() {
    let mut ledger = ledger_with_db().await;

    ledger.create(draft(300, "Travel", 1)).await.unwrap();
    ledger.create(draft(200, "Shopping", 2)).await.unwrap();

    let first = ledger.chart_series();
    ledger.refresh().await.unwrap();
    let second = ledger.chart_series();
    assert_eq!(first, second);
}
