use std::marker::PhantomData;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PrimaryKeyTrait};

/// Table access shared by every resource group: list, lookup and delete by
/// integer id. Per-table create, update and relationship queries are added
/// with inherent impls on the concrete `CrudRepo<Entity>` aliases.
pub struct CrudRepo<E> {
    pub db: DatabaseConnection,
    entity: PhantomData<E>,
}

impl<E> CrudRepo<E>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(&self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.db).await
    }

    /// Returns the affected-row count; zero means no row had this id.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}
