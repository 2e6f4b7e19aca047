//! Deployment planning stage.
//!
//! Scores affected services, orders them from safest to riskiest and turns
//! the order into a step-by-step plan with a rationale, prerequisites and an
//! estimated risk per step. Prerequisites come from an injectable
//! [`ServiceTopology`].

pub mod model;
pub mod planner;
pub mod topology;

pub use model::{DeploymentPlan, DeploymentStep, PlanOrder, RiskLevel, ScoredService};
pub use planner::{deployment_score, order, plan, DeploymentPlanner, RECOMMENDATIONS};
pub use topology::ServiceTopology;
