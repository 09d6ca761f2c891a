use crate::{
    model::role_coach::RoleCoachDto,
    server::{
        assembler::{
            coach::CoachAssembler,
            team::{ADD_ROLE_COACH, TEAM_OPERATIONS},
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
        model::role_coach::RoleCoach,
    },
};

/// Coach roles are created through the team's `addRoleCoach` operation, so only
/// deletion is offered here.
pub const ROLE_COACH_OPERATIONS: OperationTable = OperationTable {
    resource: ResourceType::RoleCoach,
    operations: &[OperationDescriptor {
        name: "deleteRoleCoach",
        method: HttpMethod::Delete,
        capability: ADMIN,
        scope: AffordanceScope::Item,
        target: Target::Item,
        fields: &[],
    }],
};

pub struct RoleCoachAssembler<'a> {
    ctx: AssemblyContext<'a>,
    team_id: Option<i32>,
}

impl<'a> RoleCoachAssembler<'a> {
    pub fn new(ctx: AssemblyContext<'a>) -> Self {
        Self { ctx, team_id: None }
    }

    /// Wrappers describe `/api/teams/{team_id}/role-coaches`.
    pub fn for_team(ctx: AssemblyContext<'a>, team_id: i32) -> Self {
        Self {
            ctx,
            team_id: Some(team_id),
        }
    }
}

impl Assembler for RoleCoachAssembler<'_> {
    type Domain = RoleCoach;
    type Dto = RoleCoachDto;

    const OPERATIONS: &'static OperationTable = &ROLE_COACH_OPERATIONS;

    fn context(&self) -> AssemblyContext<'_> {
        self.ctx
    }

    fn collection_path(&self) -> String {
        match self.team_id {
            Some(team_id) => format!("{}/{}/role-coaches", ResourceType::Team.path(), team_id),
            None => ResourceType::RoleCoach.path().to_string(),
        }
    }

    /// Team-scoped roles keep the team's order, so they cannot be sorted.
    fn sortable(&self) -> bool {
        self.team_id.is_none()
    }

    /// A team-scoped wrapper offers the team's `addRoleCoach` operation.
    fn wrapper_affordances(&self) -> Result<Vec<Affordance>, AssemblyError> {
        match self.team_id {
            Some(team_id) => {
                self.ctx
                    .selector()
                    .select_named(&TEAM_OPERATIONS, ADD_ROLE_COACH, Some(team_id))
            }
            None => self
                .ctx
                .selector()
                .select(Self::OPERATIONS, AffordanceScope::Collection, None),
        }
    }

    fn to_model(&self, role_coach: &RoleCoach) -> Result<EntityModel<RoleCoachDto>, AssemblyError> {
        let mut model = EntityModel::new(ResourceType::RoleCoach, role_coach.to_dto());
        model.add_link(self.ctx.self_link(Self::OPERATIONS, role_coach.id)?);
        model.add_link(self.ctx.collection_link(Self::OPERATIONS)?);
        model.add_link(self.ctx.related_link(
            ResourceType::Team.item_rel(),
            ResourceType::Team,
            Some(role_coach.team_id),
        )?);

        let coach = CoachAssembler::new(self.ctx).to_model(&role_coach.coach)?;
        model.embed_one(ResourceType::Coach.item_rel(), coach)?;

        Ok(model)
    }
}
