use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityName, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Use the builder pattern to add entity tables,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Module};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Module)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's
    /// schema builder. Statements are executed in the order they were added.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after table creation.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Tables should be added in dependency
    /// order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for enrollment operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Instructor
    /// - Course
    /// - Module
    /// - Enrollment
    ///
    /// and the unique index on enrollment (user_id, module_id), matching the
    /// constraint the migrations create. Entity-derived schema does not
    /// carry composite indexes, so the index is added explicitly here.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_enrollment_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_enrollment_tables(mut self) -> Self {
        self = self
            .with_table(User)
            .with_table(Instructor)
            .with_table(Course)
            .with_table(Module)
            .with_table(Enrollment);

        self.indexes.push(
            Index::create()
                .name("idx_enrollment_user_module")
                .table(entity::enrollment::Entity.table_ref())
                .col(entity::enrollment::Column::UserId)
                .col(entity::enrollment::Column::ModuleId)
                .unique()
                .to_owned(),
        );

        self
    }

    /// Builds and initializes the test context with the configured schema.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE
    /// TABLE statements in the order they were added, then the CREATE INDEX
    /// statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::Database)` - Failed to connect or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
