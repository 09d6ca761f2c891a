use crate::{
    model::training_session::TrainingSessionDto,
    server::{
        assembler::{
            hall::HallAssembler,
            team::{ADD_TRAINING_SESSION, TEAM_OPERATIONS},
            Assembler, AssemblyContext,
        },
        error::assembly::AssemblyError,
        hypermedia::{
            affordance::{
                Affordance, AffordanceScope, HttpMethod, OperationDescriptor, OperationTable,
                Target,
            },
            capability::ADMIN,
            representation::EntityModel,
            resource::ResourceType,
        },
        model::training_session::{fields, TrainingSession},
    },
};

pub const TRAINING_SESSION_OPERATIONS: OperationTable = OperationTable {
    resource: ResourceType::TrainingSession,
    operations: &[
        OperationDescriptor {
            name: "deleteTrainingSession",
            method: HttpMethod::Delete,
            capability: ADMIN,
            scope: AffordanceScope::Item,
            target: Target::Item,
            fields: &[],
        },
        OperationDescriptor {
            name: "updateTrainingSession",
            method: HttpMethod::Put,
            capability: ADMIN,
            scope: AffordanceScope::Item,
            target: Target::Item,
            fields: fields::UPDATE,
        },
        OperationDescriptor {
            name: "createTrainingSession",
            method: HttpMethod::Post,
            capability: ADMIN,
            scope: AffordanceScope::Collection,
            target: Target::Collection,
            fields: fields::CREATE,
        },
    ],
};

/// Assembles training sessions, embedding their hall and linking their team.
///
/// The team is linked rather than embedded: a team already embeds its sessions.
pub struct TrainingSessionAssembler<'a> {
    ctx: AssemblyContext<'a>,
    team_id: Option<i32>,
}

impl<'a> TrainingSessionAssembler<'a> {
    pub fn new(ctx: AssemblyContext<'a>) -> Self {
        Self { ctx, team_id: None }
    }

    /// Wrappers describe `/api/teams/{team_id}/training-sessions` instead of the global
    /// collection.
    pub fn for_team(ctx: AssemblyContext<'a>, team_id: i32) -> Self {
        Self {
            ctx,
            team_id: Some(team_id),
        }
    }
}

impl Assembler for TrainingSessionAssembler<'_> {
    type Domain = TrainingSession;
    type Dto = TrainingSessionDto;

    const OPERATIONS: &'static OperationTable = &TRAINING_SESSION_OPERATIONS;

    fn context(&self) -> AssemblyContext<'_> {
        self.ctx
    }

    fn collection_path(&self) -> String {
        match self.team_id {
            Some(team_id) => format!("{}/{}/training-sessions", ResourceType::Team.path(), team_id),
            None => ResourceType::TrainingSession.path().to_string(),
        }
    }

    /// Team-scoped sessions keep the team's order, so they cannot be sorted.
    fn sortable(&self) -> bool {
        self.team_id.is_none()
    }

    /// A team-scoped wrapper offers the team's `addTrainingSession` operation instead of
    /// the global create.
    fn wrapper_affordances(&self) -> Result<Vec<Affordance>, AssemblyError> {
        match self.team_id {
            Some(team_id) => {
                self.ctx
                    .selector()
                    .select_named(&TEAM_OPERATIONS, ADD_TRAINING_SESSION, Some(team_id))
            }
            None => self
                .ctx
                .selector()
                .select(Self::OPERATIONS, AffordanceScope::Collection, None),
        }
    }

    fn to_model(
        &self,
        session: &TrainingSession,
    ) -> Result<EntityModel<TrainingSessionDto>, AssemblyError> {
        let mut model = EntityModel::new(ResourceType::TrainingSession, session.to_dto());
        model.add_link(self.ctx.self_link(Self::OPERATIONS, session.id)?);
        model.add_link(self.ctx.collection_link(Self::OPERATIONS)?);
        model.add_link(self.ctx.related_link(
            ResourceType::Team.item_rel(),
            ResourceType::Team,
            Some(session.team_id),
        )?);

        let hall = HallAssembler::new(self.ctx).to_model(&session.hall)?;
        model.embed_one(ResourceType::Hall.item_rel(), hall)?;

        Ok(model)
    }
}
