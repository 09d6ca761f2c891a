use super::*;
use crate::server::assembler::role_coach::RoleCoachAssembler;

/// Tests that a coach role embeds its coach and exposes delete only.
///
/// Expected: Ok with `_embedded.coach`, a `team` link and `deleteRoleCoach` for admin
#[test]
fn embeds_coach_and_offers_delete_only() -> Result<(), AssemblyError> {
    let links = link_builder();
    let caller = CapabilitySet::admin();
    let assembler = RoleCoachAssembler::new(AssemblyContext::new(&links, &caller));

    let model = assembler.to_model(&role_coach(6, 2, 3))?;

    assert_eq!(model.embedded_types(), vec![ResourceType::Coach]);
    assert_eq!(self_affordance_names(&model), vec!["deleteRoleCoach"]);
    assert!(model.links.get("roleCoaches").unwrap().affordances.is_empty());

    let json = to_json(&model);
    assert_eq!(json["role"], "MAIN");
    assert_eq!(json["_embedded"]["coach"]["id"], 3);
    assert_eq!(
        json["_links"]["team"]["href"],
        "http://localhost:8080/api/teams/2"
    );

    Ok(())
}

/// Tests the empty page of a team's coach roles.
///
/// Expected: Ok with the typed empty marker rendered as `roleCoaches: []`
#[test]
fn empty_team_roles_render_empty_marker() -> Result<(), AssemblyError> {
    let links = link_builder();
    let caller = CapabilitySet::anonymous();
    let assembler = RoleCoachAssembler::for_team(AssemblyContext::new(&links, &caller), 2);

    let model = assembler.to_paged_model(&page_of(Vec::new(), 0, 20))?;

    assert_eq!(model.members, Members::Empty(ResourceType::RoleCoach));
    assert!(model.links.get("first").is_none());

    let json = to_json(&model);
    assert_eq!(json["_embedded"]["roleCoaches"], serde_json::json!([]));
    assert_eq!(json["page"]["totalElements"], 0);
    assert_eq!(json["page"]["totalPages"], 0);

    Ok(())
}

/// Tests the page of a team's coach roles for an admin.
///
/// Expected: `self` offers addRoleCoach on the team and the template has no sort
#[test]
fn team_scoped_roles_offer_add_role_coach() -> Result<(), AssemblyError> {
    let links = link_builder();
    let caller = CapabilitySet::admin();
    let assembler = RoleCoachAssembler::for_team(AssemblyContext::new(&links, &caller), 2);

    let model = assembler.to_paged_model(&page_of(vec![role_coach(1, 2, 1)], 0, 20))?;

    let affordances = &model.links.get("self").unwrap().affordances;
    assert_eq!(affordances.len(), 1);
    assert_eq!(affordances[0].name, "addRoleCoach");
    assert_eq!(affordances[0].target, "http://localhost:8080/api/teams/2/coach");
    assert_eq!(
        model.links.get("page").unwrap().href,
        "http://localhost:8080/api/teams/2/role-coaches{?page,size}"
    );

    Ok(())
}
