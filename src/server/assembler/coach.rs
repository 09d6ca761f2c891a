use crate::{
    model::coach::CoachDto,
    server::{
        assembler::{Assembler, AssemblyContext},
        error::assembly::AssemblyError,
        hypermedia::{
            affordance::{
                AffordanceScope, HttpMethod, OperationDescriptor, OperationTable, Target,
            },
            capability::ADMIN,
            representation::EntityModel,
            resource::ResourceType,
        },
        model::coach::{fields, Coach},
    },
};

pub const COACH_OPERATIONS: OperationTable = OperationTable {
    resource: ResourceType::Coach,
    operations: &[
        OperationDescriptor {
            name: "deleteCoach",
            method: HttpMethod::Delete,
            capability: ADMIN,
            scope: AffordanceScope::Item,
            target: Target::Item,
            fields: &[],
        },
        OperationDescriptor {
            name: "updateCoach",
            method: HttpMethod::Put,
            capability: ADMIN,
            scope: AffordanceScope::Item,
            target: Target::Item,
            fields: fields::ALL,
        },
        OperationDescriptor {
            name: "createCoach",
            method: HttpMethod::Post,
            capability: ADMIN,
            scope: AffordanceScope::Collection,
            target: Target::Collection,
            fields: fields::ALL,
        },
    ],
};

pub struct CoachAssembler<'a> {
    ctx: AssemblyContext<'a>,
}

impl<'a> CoachAssembler<'a> {
    pub fn new(ctx: AssemblyContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Assembler for CoachAssembler<'_> {
    type Domain = Coach;
    type Dto = CoachDto;

    const OPERATIONS: &'static OperationTable = &COACH_OPERATIONS;

    fn context(&self) -> AssemblyContext<'_> {
        self.ctx
    }

    fn to_model(&self, coach: &Coach) -> Result<EntityModel<CoachDto>, AssemblyError> {
        let mut model = EntityModel::new(ResourceType::Coach, coach.to_dto());
        model.add_link(self.ctx.self_link(Self::OPERATIONS, coach.id)?);
        model.add_link(self.ctx.collection_link(Self::OPERATIONS)?);

        Ok(model)
    }
}
