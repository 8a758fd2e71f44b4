use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

pub use aggregate::{CategoryDetail, CategorySum, ChartSlice, PALETTE, Totals};
pub use categories::{CATEGORIES, Kind, kind_for_category};
pub use error::LedgerError;
pub use money::Amount;
pub use store::Store;
pub use transactions::{Draft, Transaction};

pub mod aggregate;
pub mod categories;
mod error;
pub mod export;
pub mod insight;
mod money;
mod store;
mod transactions;

pub type ResultLedger<T> = Result<T, LedgerError>;

/// Mutation coordinator: owns the store handle and the in-memory snapshot
/// every aggregate is derived from.
///
/// Each mutation is a serialized mutate → confirm → re-list cycle: the
/// snapshot is replaced only after the store has confirmed the write, so a
/// caller never reads an aggregate that is stale with respect to a mutation
/// it initiated. On failure the prior snapshot stays untouched. The engine
/// never patches aggregates incrementally; it always recomputes from a fresh
/// full listing.
#[derive(Debug)]
pub struct Ledger {
    store: Store,
    snapshot: Vec<Transaction>,
}

impl Ledger {
    /// Return a builder for `Ledger`.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    /// The current snapshot, most recent date first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.snapshot
    }

    /// Replaces the snapshot with a fresh full listing.
    pub async fn refresh(&mut self) -> ResultLedger<()> {
        self.snapshot = self.store.list().await?;
        Ok(())
    }

    /// Validates and stores a new record, then re-lists.
    pub async fn create(&mut self, draft: Draft) -> ResultLedger<Transaction> {
        let kind = draft.validate()?;
        let created = self.store.create(&draft, kind).await?;
        self.refresh().await?;
        Ok(created)
    }

    /// Validates and replaces the record `id`, then re-lists.
    pub async fn update(&mut self, id: Uuid, draft: Draft) -> ResultLedger<()> {
        let kind = draft.validate()?;
        self.store.update(id, &draft, kind).await?;
        self.refresh().await
    }

    /// Deletes the record `id`.
    ///
    /// The re-list happens only after the store confirms the delete; a
    /// failed delete leaves the snapshot exactly as it was.
    pub async fn delete(&mut self, id: Uuid) -> ResultLedger<()> {
        self.store.delete(id).await?;
        self.refresh().await
    }

    /// Removes every record. Destructive and unscoped; callers must gather
    /// an explicit confirmation before dispatching this.
    pub async fn clear_all(&mut self) -> ResultLedger<()> {
        self.store.delete_all().await?;
        self.refresh().await
    }

    /// Running totals over the snapshot.
    pub fn totals(&self) -> Totals {
        aggregate::totals(&self.snapshot)
    }

    /// Per-category expense sums over the snapshot.
    pub fn category_breakdown(&self) -> Vec<CategorySum> {
        aggregate::category_breakdown(&self.snapshot)
    }

    /// Chart-ready series for the current breakdown.
    pub fn chart_series(&self) -> Vec<ChartSlice> {
        aggregate::chart_series(&self.category_breakdown())
    }

    /// Expense drilldown for one category.
    pub fn category_detail(&self, category: &str) -> CategoryDetail {
        aggregate::category_detail(&self.snapshot, category)
    }

    /// CSV rendition of the snapshot.
    pub fn export_csv(&self) -> ResultLedger<String> {
        export::to_csv(&self.snapshot)
    }

    /// Completion prompt for a free-text question over the snapshot.
    pub fn insight_prompt(&self, question: &str) -> ResultLedger<String> {
        insight::build_prompt(&self.snapshot, question)
    }

    /// Completion prompt for the one-click insights action.
    pub fn general_insight_prompt(&self) -> ResultLedger<String> {
        insight::build_general_prompt(&self.snapshot)
    }
}

#[derive(Debug, Default)]
pub struct LedgerBuilder {
    database: Option<DatabaseConnection>,
}

impl LedgerBuilder {
    pub fn database(mut self, db: DatabaseConnection) -> LedgerBuilder {
        self.database = Some(db);
        self
    }

    /// Builds the ledger and performs the initial listing.
    pub async fn build(self) -> ResultLedger<Ledger> {
        let db = self
            .database
            .ok_or_else(|| LedgerError::Database(DbErr::Custom("no database configured".into())))?;

        let mut ledger = Ledger {
            store: Store::new(db),
            snapshot: Vec::new(),
        };
        ledger.refresh().await?;
        Ok(ledger)
    }
}
