use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::sort::parse_sort,
    hypermedia::page::PageRequest,
    model::coach::{Coach, CoachParams},
};

pub struct CoachRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoachRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new coach
    pub async fn create(&self, params: CoachParams) -> Result<Coach, DbErr> {
        let entity = entity::coach::ActiveModel {
            name: ActiveValue::Set(params.name),
            surname: ActiveValue::Set(params.surname),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Coach::from_entity(entity))
    }

    /// Finds a coach by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Coach>, DbErr> {
        let entity = entity::prelude::Coach::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Coach::from_entity))
    }

    /// Gets one page of coaches
    ///
    /// # Returns
    /// - `Ok((coaches, total))`: Coaches of the page and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(&self, request: &PageRequest) -> Result<(Vec<Coach>, u64), DbErr> {
        let mut query = entity::prelude::Coach::find();
        if let Some((field, order)) = parse_sort(request.sort.as_deref()) {
            if let Some(column) = sort_column(field) {
                query = query.order_by(column, order);
            }
        }

        let paginator = query
            .order_by_asc(entity::coach::Column::Id)
            .paginate(self.db, request.size);

        let total = paginator.num_items().await?;
        let coaches = paginator.fetch_page(request.page).await?;

        Ok((coaches.into_iter().map(Coach::from_entity).collect(), total))
    }

    /// Gets every coach ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Coach>, DbErr> {
        let coaches = entity::prelude::Coach::find()
            .order_by_asc(entity::coach::Column::Id)
            .all(self.db)
            .await?;

        Ok(coaches.into_iter().map(Coach::from_entity).collect())
    }

    /// Updates every field of a coach
    pub async fn update(&self, id: i32, params: CoachParams) -> Result<Coach, DbErr> {
        let coach = entity::prelude::Coach::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Coach with id {} not found", id)))?;

        let mut active_model: entity::coach::ActiveModel = coach.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.surname = ActiveValue::Set(params.surname);
        active_model.email = ActiveValue::Set(params.email);
        active_model.phone = ActiveValue::Set(params.phone);

        let updated = active_model.update(self.db).await?;

        Ok(Coach::from_entity(updated))
    }

    /// Deletes a coach and, through the foreign key cascade, their team roles
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Coach::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Loads the given coaches in one query
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::coach::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Coach::find()
            .filter(entity::coach::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}

fn sort_column(field: &str) -> Option<entity::coach::Column> {
    use entity::coach::Column;

    match field {
        "id" => Some(Column::Id),
        "name" => Some(Column::Name),
        "surname" => Some(Column::Surname),
        "email" => Some(Column::Email),
        _ => None,
    }
}
