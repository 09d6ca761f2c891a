use crate::{
    model::hall::HallDto,
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
        model::hall::{fields, Hall},
    },
};

pub const HALL_OPERATIONS: OperationTable = OperationTable {
    resource: ResourceType::Hall,
    operations: &[
        OperationDescriptor {
            name: "deleteHall",
            method: HttpMethod::Delete,
            capability: ADMIN,
            scope: AffordanceScope::Item,
            target: Target::Item,
            fields: &[],
        },
        OperationDescriptor {
            name: "updateHall",
            method: HttpMethod::Put,
            capability: ADMIN,
            scope: AffordanceScope::Item,
            target: Target::Item,
            fields: fields::ALL,
        },
        OperationDescriptor {
            name: "createHall",
            method: HttpMethod::Post,
            capability: ADMIN,
            scope: AffordanceScope::Collection,
            target: Target::Collection,
            fields: fields::ALL,
        },
    ],
};

pub struct HallAssembler<'a> {
    ctx: AssemblyContext<'a>,
}

impl<'a> HallAssembler<'a> {
    pub fn new(ctx: AssemblyContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Assembler for HallAssembler<'_> {
    type Domain = Hall;
    type Dto = HallDto;

    const OPERATIONS: &'static OperationTable = &HALL_OPERATIONS;

    fn context(&self) -> AssemblyContext<'_> {
        self.ctx
    }

    fn to_model(&self, hall: &Hall) -> Result<EntityModel<HallDto>, AssemblyError> {
        let mut model = EntityModel::new(ResourceType::Hall, hall.to_dto());
        model.add_link(self.ctx.self_link(Self::OPERATIONS, hall.id)?);
        model.add_link(self.ctx.collection_link(Self::OPERATIONS)?);

        Ok(model)
    }
}
