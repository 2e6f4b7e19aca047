//! Plan records produced by the planner.

use crate::impact::{AffectedService, ImpactLevel};
use crate::model::Importance;
use serde::{Deserialize, Serialize};

/// An affected service with its deployment score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredService {
    #[serde(flatten)]
    pub service: AffectedService,
    pub deployment_score: u64,
}

impl ScoredService {
    pub fn name(&self) -> &str {
        self.service.name()
    }
}

/// Estimated risk of one deployment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// How the steps of a plan were ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanOrder {
    /// Score-ordered plan
    Optimized,
    /// Nothing to deploy
    Safe,
}

/// One step of a deployment plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentStep {
    /// 1-based position
    pub step: usize,
    pub service: String,
    pub reason: String,
    pub impact: ImpactLevel,
    pub importance: Importance,
    pub breaking_changes: usize,
    pub prerequisites: Vec<String>,
    pub estimated_risk: RiskLevel,
}

/// An ordered deployment plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentPlan {
    pub total_steps: usize,
    pub order: PlanOrder,
    pub steps: Vec<DeploymentStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

impl DeploymentPlan {
    /// The plan for an empty affected-service list.
    pub fn empty() -> Self {
        Self {
            total_steps: 0,
            order: PlanOrder::Safe,
            steps: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
