use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::{hall::HallRepository, sort::parse_sort},
    hypermedia::page::PageRequest,
    model::training_session::{
        CreateTrainingSessionParams, TrainingSession, UpdateTrainingSessionParams,
    },
};

pub struct TrainingSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingSessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a training session for an existing team and hall
    pub async fn create(
        &self,
        params: CreateTrainingSessionParams,
    ) -> Result<TrainingSession, DbErr> {
        let entity = entity::training_session::ActiveModel {
            day_of_week: ActiveValue::Set(params.time_slot.day_of_week.as_str().to_string()),
            start_time: ActiveValue::Set(params.time_slot.start_time),
            end_time: ActiveValue::Set(params.time_slot.end_time),
            hall_id: ActiveValue::Set(params.hall_id),
            team_id: ActiveValue::Set(params.team_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_hall(entity).await
    }

    /// Finds a training session by ID together with its hall
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TrainingSession>, DbErr> {
        let result = entity::prelude::TrainingSession::find_by_id(id)
            .find_also_related(entity::prelude::Hall)
            .one(self.db)
            .await?;

        match result {
            Some((session, Some(hall))) => Ok(Some(TrainingSession::from_entity(session, hall)?)),
            Some((session, None)) => Err(missing_hall(&session)),
            None => Ok(None),
        }
    }

    /// Gets one page of training sessions
    ///
    /// # Returns
    /// - `Ok((sessions, total))`: Sessions of the page and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        request: &PageRequest,
    ) -> Result<(Vec<TrainingSession>, u64), DbErr> {
        let mut query = entity::prelude::TrainingSession::find();
        if let Some((field, order)) = parse_sort(request.sort.as_deref()) {
            if let Some(column) = sort_column(field) {
                query = query.order_by(column, order);
            }
        }

        let paginator = query
            .order_by_asc(entity::training_session::Column::Id)
            .paginate(self.db, request.size);

        let total = paginator.num_items().await?;
        let sessions = paginator.fetch_page(request.page).await?;

        Ok((self.with_halls(sessions).await?, total))
    }

    /// Gets every training session ordered by ID
    pub async fn get_all(&self) -> Result<Vec<TrainingSession>, DbErr> {
        let sessions = entity::prelude::TrainingSession::find()
            .order_by_asc(entity::training_session::Column::Id)
            .all(self.db)
            .await?;

        self.with_halls(sessions).await
    }

    /// Gets the training sessions of several teams in one query, ordered by ID
    pub async fn get_by_team_ids(&self, team_ids: Vec<i32>) -> Result<Vec<TrainingSession>, DbErr> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sessions = entity::prelude::TrainingSession::find()
            .filter(entity::training_session::Column::TeamId.is_in(team_ids))
            .order_by_asc(entity::training_session::Column::Id)
            .all(self.db)
            .await?;

        self.with_halls(sessions).await
    }

    /// Moves a training session to another hall and time slot
    pub async fn update(
        &self,
        id: i32,
        params: UpdateTrainingSessionParams,
    ) -> Result<TrainingSession, DbErr> {
        let session = entity::prelude::TrainingSession::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Training session with id {} not found",
                id
            )))?;

        let mut active_model: entity::training_session::ActiveModel = session.into();
        active_model.day_of_week =
            ActiveValue::Set(params.time_slot.day_of_week.as_str().to_string());
        active_model.start_time = ActiveValue::Set(params.time_slot.start_time);
        active_model.end_time = ActiveValue::Set(params.time_slot.end_time);
        active_model.hall_id = ActiveValue::Set(params.hall_id);

        let updated = active_model.update(self.db).await?;

        self.with_hall(updated).await
    }

    /// Deletes a training session
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TrainingSession::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn with_hall(
        &self,
        session: entity::training_session::Model,
    ) -> Result<TrainingSession, DbErr> {
        let mut sessions = self.with_halls(vec![session]).await?;
        sessions
            .pop()
            .ok_or(DbErr::RecordNotFound("Training session not found".to_string()))
    }

    /// Attaches halls to sessions, loading all referenced halls in one query
    async fn with_halls(
        &self,
        sessions: Vec<entity::training_session::Model>,
    ) -> Result<Vec<TrainingSession>, DbErr> {
        let mut hall_ids: Vec<i32> = sessions.iter().map(|s| s.hall_id).collect();
        hall_ids.sort_unstable();
        hall_ids.dedup();

        let halls: HashMap<i32, entity::hall::Model> = HallRepository::new(self.db)
            .get_by_ids(hall_ids)
            .await?
            .into_iter()
            .map(|h| (h.id, h))
            .collect();

        sessions
            .into_iter()
            .map(|session| {
                let hall = halls
                    .get(&session.hall_id)
                    .cloned()
                    .ok_or_else(|| missing_hall(&session))?;
                TrainingSession::from_entity(session, hall)
            })
            .collect()
    }
}

fn missing_hall(session: &entity::training_session::Model) -> DbErr {
    DbErr::RecordNotFound(format!(
        "Hall with id {} of training session {} not found",
        session.hall_id, session.id
    ))
}

fn sort_column(field: &str) -> Option<entity::training_session::Column> {
    use entity::training_session::Column;

    match field {
        "id" => Some(Column::Id),
        "timeSlot.dayOfWeek" | "dayOfWeek" => Some(Column::DayOfWeek),
        "timeSlot.startTime" | "startTime" => Some(Column::StartTime),
        "timeSlot.endTime" | "endTime" => Some(Column::EndTime),
        _ => None,
    }
}
