//! Search configuration.

/// How a neighbor's tentative cost from origin is accumulated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CostModel {
    /// `current.g + neighbor.terrain_cost + current.h`.
    ///
    /// The expanding node's own heuristic estimate is folded into the
    /// neighbor's cost from origin, so `g` is not the plain sum of terrain
    /// costs along the route. Kept as the default for compatibility with
    /// existing agents.
    #[default]
    Legacy,
    /// `current.g + neighbor.terrain_cost`: `g` is the accumulated terrain
    /// cost of the route.
    Edge,
}

/// Tunables for a [`Pathfinder`](crate::Pathfinder).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PathfinderConfig {
    pub cost_model: CostModel,
}

impl PathfinderConfig {
    /// Replace the cost model.
    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_legacy() {
        assert_eq!(PathfinderConfig::default().cost_model, CostModel::Legacy);
    }

    #[test]
    fn builder_sets_model() {
        let cfg = PathfinderConfig::default().with_cost_model(CostModel::Edge);
        assert_eq!(cfg.cost_model, CostModel::Edge);
    }
}
