use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::sort::parse_sort,
    hypermedia::page::PageRequest,
    model::hall::{Address, Hall, HallParams},
};

pub struct HallRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HallRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new hall
    pub async fn create(&self, params: HallParams) -> Result<Hall, DbErr> {
        let entity = entity::hall::ActiveModel {
            name: ActiveValue::Set(params.name),
            street: ActiveValue::Set(params.address.street),
            city: ActiveValue::Set(params.address.city),
            postal_code: ActiveValue::Set(params.address.postal_code),
            country: ActiveValue::Set(params.address.country),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Hall::from_entity(entity))
    }

    /// Finds a hall by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Hall>, DbErr> {
        let entity = entity::prelude::Hall::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Hall::from_entity))
    }

    /// Gets one page of halls, ordered by the requested field or by ID
    ///
    /// # Arguments
    /// - `request`: Page number, size and optional `field[,asc|desc]` sort
    ///
    /// # Returns
    /// - `Ok((halls, total))`: Halls of the page and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(&self, request: &PageRequest) -> Result<(Vec<Hall>, u64), DbErr> {
        let mut query = entity::prelude::Hall::find();
        if let Some((field, order)) = parse_sort(request.sort.as_deref()) {
            if let Some(column) = sort_column(field) {
                query = query.order_by(column, order);
            }
        }

        let paginator = query
            .order_by_asc(entity::hall::Column::Id)
            .paginate(self.db, request.size);

        let total = paginator.num_items().await?;
        let halls = paginator.fetch_page(request.page).await?;

        Ok((halls.into_iter().map(Hall::from_entity).collect(), total))
    }

    /// Gets every hall ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Hall>, DbErr> {
        let halls = entity::prelude::Hall::find()
            .order_by_asc(entity::hall::Column::Id)
            .all(self.db)
            .await?;

        Ok(halls.into_iter().map(Hall::from_entity).collect())
    }

    /// Updates a hall's name and address
    pub async fn update(&self, id: i32, params: HallParams) -> Result<Hall, DbErr> {
        let hall = entity::prelude::Hall::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Hall with id {} not found", id)))?;

        let mut active_model: entity::hall::ActiveModel = hall.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.street = ActiveValue::Set(params.address.street);
        active_model.city = ActiveValue::Set(params.address.city);
        active_model.postal_code = ActiveValue::Set(params.address.postal_code);
        active_model.country = ActiveValue::Set(params.address.country);

        let updated = active_model.update(self.db).await?;

        Ok(Hall::from_entity(updated))
    }

    /// Deletes a hall and, through the foreign key cascade, its training sessions
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of deleted halls, 0 when none matched
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Hall::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Checks if a hall with the same name and full address exists
    pub async fn exists(&self, name: &str, address: &Address) -> Result<bool, DbErr> {
        let count = entity::prelude::Hall::find()
            .filter(entity::hall::Column::Name.eq(name))
            .filter(entity::hall::Column::Street.eq(address.street.as_str()))
            .filter(entity::hall::Column::City.eq(address.city.as_str()))
            .filter(entity::hall::Column::PostalCode.eq(address.postal_code.as_str()))
            .filter(entity::hall::Column::Country.eq(address.country.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Loads the given halls in one query
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::hall::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Hall::find()
            .filter(entity::hall::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}

fn sort_column(field: &str) -> Option<entity::hall::Column> {
    use entity::hall::Column;

    match field {
        "id" => Some(Column::Id),
        "name" => Some(Column::Name),
        "address.street" | "street" => Some(Column::Street),
        "address.city" | "city" => Some(Column::City),
        "address.postalCode" | "postalCode" => Some(Column::PostalCode),
        "address.country" | "country" => Some(Column::Country),
        _ => None,
    }
}
