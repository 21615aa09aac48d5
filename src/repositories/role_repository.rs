use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{is_duplicate_key, Database},
    errors::AppResult,
    models::domain::{Role, RoleRecord},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_by_name(&self, name: Role) -> AppResult<Option<RoleRecord>>;
    async fn save(&self, role: RoleRecord) -> AppResult<RoleRecord>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoRoleRepository {
    collection: Collection<RoleRecord>,
}

impl MongoRoleRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("roles");
        Self { collection }
    }
}

#[async_trait]
impl RoleRepository for MongoRoleRepository {
    async fn find_by_name(&self, name: Role) -> AppResult<Option<RoleRecord>> {
        let role = self
            .collection
            .find_one(doc! { "name": name.as_str() })
            .await?;
        Ok(role)
    }

    async fn save(&self, role: RoleRecord) -> AppResult<RoleRecord> {
        match self.collection.insert_one(&role).await {
            Ok(_) => Ok(role),
            // Another request created it first; one record per name either way.
            Err(e) if is_duplicate_key(&e) => Ok(role),
            Err(e) => Err(e.into()),
        }
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("Created unique index on roles.name");

        Ok(())
    }
}
