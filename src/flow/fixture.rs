use super::definition::{Content, Flow, PRIMARY_TEXT, SECONDARY_TEXT, Status, Step, StepType};

/// Stand-in for any step id that does not resolve.
///
/// It has an empty id, no edges, no contents and the `NOTHING` status, so it
/// never counts as done, never contributes time and never fans out.
pub static NEUTRAL_STEP: Step = Step {
    id: String::new(),
    step_type: StepType::Default,
    status: Status::Nothing,
    blocked_by_step_ids: None,
    blocking_step_ids: None,
    parent_step_id: None,
    child_step_ids: None,
    assignee_id: None,
    template_step_id: None,
    unblocked_at: None,
    completed_by: None,
    completed_at: None,
    contents: Vec::new(),
    fall_back_step_id: None,
    time_needed: None,
    name: None,
    position: None,
};

pub const DEFAULT_ROOT_STEP_ID: &str = "root-step-1";
pub const DEFAULT_LAST_STEP_ID: &str = "deployment-step-1";

/// The built-in BBPS onboarding flow used when nothing else is available.
///
/// Five phases chained by blocking edges (root, setup, config, testing,
/// deployment) and six substeps. Only the root is done; setup is pending.
pub fn default_flow() -> Flow {
    let root = DEFAULT_ROOT_STEP_ID;
    let setup = "setup-step-1";
    let config = "config-step-1";
    let testing = "testing-step-1";
    let deployment = DEFAULT_LAST_STEP_ID;

    let steps = vec![
        Step {
            blocking_step_ids: ids(&[setup]),
            child_step_ids: ids(&["setup-substep-1"]),
            contents: vec![
                content(
                    "content-root-1",
                    "root-template",
                    "Getting Started",
                    PRIMARY_TEXT,
                ),
                content(
                    "content-root-2",
                    "root-template",
                    "Welcome to the BBPS integration process. This guide will walk you through setting up your integration step by step.",
                    SECONDARY_TEXT,
                ),
            ],
            ..step(
                root,
                StepType::Root,
                Status::Done,
                "Getting Started",
                1,
                "00:05:00",
            )
        },
        Step {
            blocked_by_step_ids: ids(&[root]),
            blocking_step_ids: ids(&[config]),
            child_step_ids: ids(&["setup-substep-1", "setup-substep-2"]),
            contents: vec![content(
                "content-setup-1",
                "setup-template",
                "Environment Setup",
                PRIMARY_TEXT,
            )],
            ..step(
                setup,
                StepType::Main,
                Status::Pending,
                "Environment Setup",
                2,
                "00:15:00",
            )
        },
        substep(
            "setup-substep-1",
            setup,
            Status::Pending,
            "Install Dependencies",
            "Install the required packages and dependencies for your BBPS integration. Run <code>npm install</code> to get started.",
            1,
            "00:05:00",
        ),
        substep(
            "setup-substep-2",
            setup,
            Status::Pending,
            "Configure Environment Variables",
            "Set up your environment variables including API keys, endpoints, and merchant configuration details.",
            2,
            "00:10:00",
        ),
        Step {
            blocked_by_step_ids: ids(&[setup]),
            blocking_step_ids: ids(&[testing]),
            child_step_ids: ids(&["config-substep-1", "config-substep-2"]),
            contents: vec![content(
                "content-config-1",
                "config-template",
                "API Configuration",
                PRIMARY_TEXT,
            )],
            ..step(
                config,
                StepType::Main,
                Status::Upcoming,
                "API Configuration",
                3,
                "00:20:00",
            )
        },
        substep(
            "config-substep-1",
            config,
            Status::Upcoming,
            "Set up BBPS API Endpoints",
            "Configure the BBPS API endpoints and authentication settings in your application.",
            1,
            "00:10:00",
        ),
        substep(
            "config-substep-2",
            config,
            Status::Upcoming,
            "Configure Merchant Settings",
            "Set up merchant-specific configurations including payment categories and billing settings.",
            2,
            "00:10:00",
        ),
        Step {
            blocked_by_step_ids: ids(&[config]),
            blocking_step_ids: ids(&[deployment]),
            child_step_ids: ids(&["testing-substep-1"]),
            contents: vec![content(
                "content-testing-1",
                "testing-template",
                "Testing & Validation",
                PRIMARY_TEXT,
            )],
            ..step(
                testing,
                StepType::Main,
                Status::Upcoming,
                "Testing & Validation",
                4,
                "00:25:00",
            )
        },
        substep(
            "testing-substep-1",
            testing,
            Status::Upcoming,
            "Run Integration Tests",
            "Execute comprehensive tests to validate your BBPS integration including payment processing and status updates.",
            1,
            "00:25:00",
        ),
        Step {
            blocked_by_step_ids: ids(&[testing]),
            child_step_ids: ids(&["deployment-substep-1"]),
            contents: vec![content(
                "content-deployment-1",
                "deployment-template",
                "Go Live",
                PRIMARY_TEXT,
            )],
            ..step(
                deployment,
                StepType::Main,
                Status::Upcoming,
                "Go Live",
                5,
                "00:10:00",
            )
        },
        substep(
            "deployment-substep-1",
            deployment,
            Status::Upcoming,
            "Deploy to Production",
            "Deploy your BBPS integration to production and monitor the initial transactions.",
            1,
            "00:10:00",
        ),
    ];

    Flow {
        id: "default-flow-1".to_string(),
        merchant_id: "default-merchant".to_string(),
        flow_id: "bbps-integration-flow".to_string(),
        scenario: "bbps-onboarding".to_string(),
        root_step_id: DEFAULT_ROOT_STEP_ID.to_string(),
        last_step_id: DEFAULT_LAST_STEP_ID.to_string(),
        product_info_id: "bbps-product-info".to_string(),
        steps,
    }
}

fn step(
    id: &str,
    step_type: StepType,
    status: Status,
    name: &str,
    position: i64,
    time_needed: &str,
) -> Step {
    Step {
        name: Some(name.to_string()),
        position: Some(position),
        time_needed: Some(time_needed.to_string()),
        ..Step::new(id, step_type, status)
    }
}

fn substep(
    id: &str,
    parent: &str,
    status: Status,
    title: &str,
    description: &str,
    position: i64,
    time_needed: &str,
) -> Step {
    let scope = format!("{}-sub-template", parent.split('-').next().unwrap_or(parent));
    Step {
        parent_step_id: Some(parent.to_string()),
        contents: vec![
            content(&format!("content-{}-1", id), &scope, title, PRIMARY_TEXT),
            content(
                &format!("content-{}-2", id),
                &scope,
                description,
                SECONDARY_TEXT,
            ),
        ],
        ..step(id, StepType::Sub, status, title, position, time_needed)
    }
}

fn content(id: &str, scope: &str, display: &str, content_type: &str) -> Content {
    Content {
        id: id.to_string(),
        template_scope_id: scope.to_string(),
        display: display.to_string(),
        content_type: content_type.to_string(),
    }
}

fn ids(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|v| v.to_string()).collect())
}
