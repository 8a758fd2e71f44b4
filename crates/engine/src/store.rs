//! Record store adapter.
//!
//! Translates between the domain [`Transaction`] and the persisted row, and
//! exposes the CRUD surface the mutation coordinator drives. Listing always
//! returns the full set ordered by date descending; the engine never pages.

use sea_orm::{ActiveValue::Set, DatabaseConnection, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{Amount, Draft, Kind, LedgerError, ResultLedger, Transaction};

pub(crate) mod records {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "transactions")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub amount_cents: i64,
        pub category: String,
        pub kind: String,
        pub occurred_at: DateTimeUtc,
        pub note: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

fn to_domain(row: records::Model) -> ResultLedger<Transaction> {
    Ok(Transaction {
        id: row.id,
        amount: Amount::new(row.amount_cents),
        category: row.category,
        date: row.occurred_at,
        note: row.note,
        kind: Kind::try_from(row.kind.as_str())?,
    })
}

/// CRUD adapter over the `transactions` table.
#[derive(Clone, Debug)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every record, most recent date first.
    ///
    /// Id is a secondary sort key so equal dates list deterministically.
    pub async fn list(&self) -> ResultLedger<Vec<Transaction>> {
        let rows = records::Entity::find()
            .order_by_desc(records::Column::OccurredAt)
            .order_by_desc(records::Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter().map(to_domain).collect()
    }

    /// Inserts a validated draft and returns the stored record with its
    /// assigned id.
    pub async fn create(&self, draft: &Draft, kind: Kind) -> ResultLedger<Transaction> {
        let row = records::ActiveModel {
            id: Set(Uuid::new_v4()),
            amount_cents: Set(draft.amount.cents()),
            category: Set(draft.category.clone()),
            kind: Set(kind.as_str().to_string()),
            occurred_at: Set(draft.date),
            note: Set(draft.note.clone()),
        };

        to_domain(row.insert(&self.db).await?)
    }

    /// Full-record replace keyed by `id`; the id itself never changes.
    pub async fn update(&self, id: Uuid, draft: &Draft, kind: Kind) -> ResultLedger<()> {
        let row = records::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| LedgerError::KeyNotFound(id.to_string()))?;

        let mut active: records::ActiveModel = row.into();
        active.amount_cents = Set(draft.amount.cents());
        active.category = Set(draft.category.clone());
        active.kind = Set(kind.as_str().to_string());
        active.occurred_at = Set(draft.date);
        active.note = Set(draft.note.clone());
        active.update(&self.db).await?;

        Ok(())
    }

    /// Deletes by id, failing with [`LedgerError::KeyNotFound`] when no row
    /// matched.
    pub async fn delete(&self, id: Uuid) -> ResultLedger<()> {
        let result = records::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(LedgerError::KeyNotFound(id.to_string()));
        }

        Ok(())
    }

    /// Removes every record.
    pub async fn delete_all(&self) -> ResultLedger<()> {
        records::Entity::delete_many().exec(&self.db).await?;
        Ok(())
    }
}
