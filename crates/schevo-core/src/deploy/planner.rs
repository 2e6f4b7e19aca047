//! Risk scoring, ordering and plan synthesis.

use crate::deploy::model::{DeploymentPlan, DeploymentStep, PlanOrder, RiskLevel, ScoredService};
use crate::deploy::topology::ServiceTopology;
use crate::impact::AffectedService;
use crate::model::Importance;
use crate::{log_op_end, log_op_start};
use std::collections::HashMap;
use std::time::Instant;

/// Advisory notes attached to every non-empty plan.
pub const RECOMMENDATIONS: [&str; 4] = [
    "Deploy during low traffic hours",
    "Monitor each service after deployment",
    "Have rollback plan ready",
    "Test schema compatibility before deployment",
];

/// Above this many calls per day a service counts as high traffic.
const HIGH_TRAFFIC_CALLS: u64 = 40_000;
/// Above this many calls per day a service is at least MEDIUM risk.
const ELEVATED_RISK_CALLS: u64 = 30_000;

fn importance_weight(importance: Importance) -> u64 {
    match importance {
        Importance::Critical => 5,
        Importance::High => 3,
        Importance::Medium => 2,
        Importance::Low => 0,
    }
}

/// Deployment score of an affected service; lower deploys earlier.
///
/// Breaking changes dominate: each one adds 10, while importance adds at
/// most 5 and high traffic 2.
pub fn deployment_score(service: &AffectedService) -> u64 {
    let traffic_bonus = if service.service.calls_per_day > HIGH_TRAFFIC_CALLS {
        2
    } else {
        0
    };
    service.breaking_changes as u64 * 10 + importance_weight(service.service.importance) + traffic_bonus
}

/// Score the services and sort them ascending by score.
///
/// The sort is stable: services with equal scores keep their input order.
pub fn order(affected: &[AffectedService]) -> Vec<ScoredService> {
    let mut scored: Vec<ScoredService> = affected
        .iter()
        .map(|service| ScoredService {
            deployment_score: deployment_score(service),
            service: service.clone(),
        })
        .collect();
    scored.sort_by_key(|s| s.deployment_score);
    scored
}

/// Plan a deployment with the standard topology.
pub fn plan(affected: &[AffectedService]) -> DeploymentPlan {
    DeploymentPlanner::default().plan(affected)
}

/// Builds deployment plans against a given service topology.
#[derive(Debug, Clone, Default)]
pub struct DeploymentPlanner {
    topology: ServiceTopology,
}

impl DeploymentPlanner {
    pub fn new(topology: ServiceTopology) -> Self {
        Self { topology }
    }

    pub fn topology(&self) -> &ServiceTopology {
        &self.topology
    }

    /// Score and sort the services. See [`order`].
    ///
    /// Ordering depends on the services alone; the topology only shapes
    /// prerequisites, so every planner orders the same input identically.
    pub fn order(&self, affected: &[AffectedService]) -> Vec<ScoredService> {
        order(affected)
    }

    /// Order the services and build the plan.
    pub fn plan(&self, affected: &[AffectedService]) -> DeploymentPlan {
        self.plan_ordered(&order(affected))
    }

    /// Build the plan for services that are already in deployment order.
    pub fn plan_ordered(&self, ordered: &[ScoredService]) -> DeploymentPlan {
        let start = Instant::now();
        log_op_start!(
            "plan_deployment",
            service_count = ordered.len(),
            topology_size = self.topology.len()
        );

        if ordered.is_empty() {
            log_op_end!(
                "plan_deployment",
                duration_ms = start.elapsed().as_millis() as u64,
                step_count = 0usize
            );
            return DeploymentPlan::empty();
        }

        // First occurrence wins, matching a front-to-back search.
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for (index, scored) in ordered.iter().enumerate() {
            positions.entry(scored.name()).or_insert(index);
        }

        let steps: Vec<DeploymentStep> = ordered
            .iter()
            .enumerate()
            .map(|(index, scored)| {
                let service = &scored.service;
                DeploymentStep {
                    step: index + 1,
                    service: service.name().to_string(),
                    reason: step_reason(index, service).to_string(),
                    impact: service.impact_level,
                    importance: service.service.importance,
                    breaking_changes: service.breaking_changes,
                    prerequisites: self.prerequisites(index, ordered, &positions),
                    estimated_risk: estimated_risk(service),
                }
            })
            .collect();

        log_op_end!(
            "plan_deployment",
            duration_ms = start.elapsed().as_millis() as u64,
            step_count = steps.len()
        );

        DeploymentPlan {
            total_steps: steps.len(),
            order: PlanOrder::Optimized,
            steps,
            recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Topology predecessors already deployed at this point, else the
    /// previous step's service.
    fn prerequisites(
        &self,
        index: usize,
        ordered: &[ScoredService],
        positions: &HashMap<&str, usize>,
    ) -> Vec<String> {
        let current = ordered[index].name();
        let mut prerequisites: Vec<String> = self
            .topology
            .predecessors(current)
            .iter()
            .filter(|dep| {
                positions
                    .get(dep.as_str())
                    .is_some_and(|&position| position < index)
            })
            .map(|dep| deployed(dep))
            .collect();

        if prerequisites.is_empty() && index > 0 {
            prerequisites.push(deployed(ordered[index - 1].name()));
        }
        prerequisites
    }
}

fn deployed(service: &str) -> String {
    format!("{} deployed successfully", service)
}

/// Rationale for a step; the first matching rule wins.
fn step_reason(index: usize, service: &AffectedService) -> &'static str {
    let importance = service.service.importance;
    let breaking = service.breaking_changes;

    if index == 0 {
        "Lowest risk service - deploy first to validate process"
    } else if importance == Importance::Critical && breaking > 0 {
        "Critical service with breaking changes - deploy with full team monitoring"
    } else if breaking > 2 {
        "Multiple breaking changes - high risk deployment"
    } else if service.service.calls_per_day > HIGH_TRAFFIC_CALLS {
        "High traffic service - deploy during low usage hours"
    } else if importance == Importance::Low {
        "Low priority service - safe to deploy last"
    } else {
        "Standard deployment - monitor service health after changes"
    }
}

fn estimated_risk(service: &AffectedService) -> RiskLevel {
    let importance = service.service.importance;
    let breaking = service.breaking_changes;

    if breaking > 2 || (importance == Importance::Critical && breaking > 0) {
        RiskLevel::High
    } else if breaking > 0 || service.service.calls_per_day > ELEVATED_RISK_CALLS {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
