use super::*;
use crate::server::assembler::team::TeamAssembler;

/// Tests a team with one session and one coach role.
///
/// Verifies both children are embedded one level deep, list links are rendered as
/// arrays, and no child embeds the team back.
///
/// Expected: Ok with `trainingSessions` and `roleCoaches` embedded
#[test]
fn embeds_children_without_cycles() -> Result<(), AssemblyError> {
    let links = link_builder();
    let caller = CapabilitySet::anonymous();
    let assembler = TeamAssembler::new(AssemblyContext::new(&links, &caller));

    let team = team(1, vec![training_session(10, 1, 2)], vec![role_coach(20, 1, 3)]);
    let model = assembler.to_model(&team)?;

    assert_eq!(
        model.embedded_types(),
        vec![ResourceType::TrainingSession, ResourceType::RoleCoach]
    );
    for rel in ["trainingSessions", "roleCoaches"] {
        for child in model.embedded(rel).unwrap().models() {
            assert!(!child.embedded_types().contains(&ResourceType::Team));
        }
    }

    let json = to_json(&model);
    assert_eq!(json["gender"], "F");
    assert_eq!(json["category"], "U15");
    assert_eq!(
        json["_links"]["trainingSessionsList"],
        serde_json::json!([{ "href": "http://localhost:8080/api/training-sessions/10" }])
    );
    assert_eq!(
        json["_links"]["roleCoachesList"],
        serde_json::json!([{ "href": "http://localhost:8080/api/role-coaches/20" }])
    );
    assert_eq!(json["_embedded"]["trainingSessions"][0]["_embedded"]["hall"]["id"], 2);
    assert_eq!(json["_embedded"]["roleCoaches"][0]["_embedded"]["coach"]["id"], 3);

    Ok(())
}

/// Tests a team without sessions or coach roles.
///
/// Expected: Ok with both relations rendered as empty arrays
#[test]
fn childless_team_renders_empty_relations() -> Result<(), AssemblyError> {
    let links = link_builder();
    let caller = CapabilitySet::anonymous();
    let assembler = TeamAssembler::new(AssemblyContext::new(&links, &caller));

    let model = assembler.to_model(&team(1, Vec::new(), Vec::new()))?;
    let json = to_json(&model);

    assert_eq!(json["_embedded"]["trainingSessions"], serde_json::json!([]));
    assert_eq!(json["_embedded"]["roleCoaches"], serde_json::json!([]));
    assert!(json["_links"].get("trainingSessionsList").is_none());

    Ok(())
}

/// Tests team affordances for an admin, including the sub-operations.
///
/// Expected: Ok with declared order and sub-operation targets under the team route
#[test]
fn admin_sees_sub_operations_in_declared_order() -> Result<(), AssemblyError> {
    let links = link_builder();
    let caller = CapabilitySet::admin();
    let assembler = TeamAssembler::new(AssemblyContext::new(&links, &caller));

    let model = assembler.to_model(&team(8, Vec::new(), Vec::new()))?;

    assert_eq!(
        self_affordance_names(&model),
        vec!["deleteTeam", "updateTeam", "addTrainingSession", "addRoleCoach"]
    );
    let add_session = model
        .affordances()
        .find(|a| a.name == "addTrainingSession")
        .unwrap();
    assert_eq!(
        add_session.target,
        "http://localhost:8080/api/teams/8/training-sessions"
    );
    assert!(add_session
        .field("trainingSessionDTORequest.timeSlot.startTime")
        .is_some());
    let add_coach = model.affordances().find(|a| a.name == "addRoleCoach").unwrap();
    assert_eq!(add_coach.target, "http://localhost:8080/api/teams/8/coach");
    assert_eq!(
        add_coach.field("role").unwrap().options,
        &["MAIN", "ASSISTANT", "SUPPORT_STAFF"]
    );

    let json = to_json(&model);
    let templates = json["_templates"].as_object().unwrap();
    assert!(templates.contains_key("createTeam"));
    // Embedded children render their own templates; the team renders only its own.
    assert!(!templates.contains_key("deleteTrainingSession"));

    Ok(())
}
