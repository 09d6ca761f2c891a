use crate::{
    model::team::TeamDto,
    server::{
        assembler::{
            role_coach::RoleCoachAssembler, training_session::TrainingSessionAssembler, Assembler,
            AssemblyContext,
        },
        error::assembly::AssemblyError,
        hypermedia::{
            affordance::{
                AffordanceScope, HttpMethod, OperationDescriptor, OperationTable, Target,
            },
            capability::ADMIN,
            representation::EntityModel,
            resource::ResourceType,
        },
        model::{role_coach, team::fields, team::Team, training_session},
    },
};

pub const TRAINING_SESSIONS_LIST_REL: &str = "trainingSessionsList";
pub const ROLE_COACHES_LIST_REL: &str = "roleCoachesList";

pub const ADD_TRAINING_SESSION: &str = "addTrainingSession";
pub const ADD_ROLE_COACH: &str = "addRoleCoach";

pub const TEAM_OPERATIONS: OperationTable = OperationTable {
    resource: ResourceType::Team,
    operations: &[
        OperationDescriptor {
            name: "deleteTeam",
            method: HttpMethod::Delete,
            capability: ADMIN,
            scope: AffordanceScope::Item,
            target: Target::Item,
            fields: &[],
        },
        OperationDescriptor {
            name: "updateTeam",
            method: HttpMethod::Put,
            capability: ADMIN,
            scope: AffordanceScope::Item,
            target: Target::Item,
            fields: fields::ALL,
        },
        OperationDescriptor {
            name: ADD_TRAINING_SESSION,
            method: HttpMethod::Post,
            capability: ADMIN,
            scope: AffordanceScope::Item,
            target: Target::ItemAction("training-sessions"),
            fields: training_session::fields::ADD_TO_TEAM,
        },
        OperationDescriptor {
            name: ADD_ROLE_COACH,
            method: HttpMethod::Post,
            capability: ADMIN,
            scope: AffordanceScope::Item,
            target: Target::ItemAction("coach"),
            fields: role_coach::fields::ADD_TO_TEAM,
        },
        OperationDescriptor {
            name: "createTeam",
            method: HttpMethod::Post,
            capability: ADMIN,
            scope: AffordanceScope::Collection,
            target: Target::Collection,
            fields: fields::ALL,
        },
    ],
};

/// Assembles teams with their training sessions and coach roles embedded one level
/// deep, plus one list link per child.
pub struct TeamAssembler<'a> {
    ctx: AssemblyContext<'a>,
}

impl<'a> TeamAssembler<'a> {
    pub fn new(ctx: AssemblyContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Assembler for TeamAssembler<'_> {
    type Domain = Team;
    type Dto = TeamDto;

    const OPERATIONS: &'static OperationTable = &TEAM_OPERATIONS;

    fn context(&self) -> AssemblyContext<'_> {
        self.ctx
    }

    fn to_model(&self, team: &Team) -> Result<EntityModel<TeamDto>, AssemblyError> {
        let mut model = EntityModel::new(ResourceType::Team, team.to_dto());
        model.add_link(self.ctx.self_link(Self::OPERATIONS, team.id)?);
        model.add_link(self.ctx.collection_link(Self::OPERATIONS)?);

        for session in &team.training_sessions {
            model.add_link(self.ctx.related_link(
                TRAINING_SESSIONS_LIST_REL,
                ResourceType::TrainingSession,
                session.id,
            )?);
        }
        for role_coach in &team.role_coaches {
            model.add_link(self.ctx.related_link(
                ROLE_COACHES_LIST_REL,
                ResourceType::RoleCoach,
                role_coach.id,
            )?);
        }

        let sessions = TrainingSessionAssembler::new(self.ctx);
        model.embed_many(
            ResourceType::TrainingSession.collection_rel(),
            ResourceType::TrainingSession,
            team.training_sessions
                .iter()
                .map(|session| sessions.to_model(session))
                .collect::<Result<Vec<_>, _>>()?,
        )?;

        let role_coaches = RoleCoachAssembler::new(self.ctx);
        model.embed_many(
            ResourceType::RoleCoach.collection_rel(),
            ResourceType::RoleCoach,
            team.role_coaches
                .iter()
                .map(|role_coach| role_coaches.to_model(role_coach))
                .collect::<Result<Vec<_>, _>>()?,
        )?;

        tracing::debug!(
            "Assembled team {:?} with {} training sessions and {} coach roles",
            team.id,
            team.training_sessions.len(),
            team.role_coaches.len()
        );

        Ok(model)
    }
}
