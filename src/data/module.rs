//! Module catalog access.
//!
//! Read access to module records plus the single write path this service is
//! permitted on the catalog: the conditional seat-count increment.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::module::Module;

pub struct ModuleRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ModuleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a module by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Module))` - Module found
    /// - `Ok(None)` - No module with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, module_id: i32) -> Result<Option<Module>, DbErr> {
        let entity = entity::prelude::Module::find_by_id(module_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Module::from_entity))
    }

    /// Claims one seat in the module if any remain.
    ///
    /// Issues `UPDATE module SET enrolled = enrolled + 1 WHERE id = ? AND
    /// enrolled < capacity` — the capacity check and the increment are one
    /// atomic statement, so two concurrent claims for the last seat cannot
    /// both succeed.
    ///
    /// # Arguments
    /// - `module_id` - Module to claim a seat in
    ///
    /// # Returns
    /// - `Ok(true)` - Seat claimed, enrolled count incremented by one
    /// - `Ok(false)` - Module is full or does not exist, nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn claim_seat(&self, module_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Module::update_many()
            .col_expr(
                entity::module::Column::Enrolled,
                Expr::col(entity::module::Column::Enrolled).add(1),
            )
            .filter(entity::module::Column::Id.eq(module_id))
            .filter(
                Expr::col(entity::module::Column::Enrolled)
                    .lt(Expr::col(entity::module::Column::Capacity)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
