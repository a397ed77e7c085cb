use serde::{Deserialize, Serialize};

/// The dashboard rollup for one user: four numbers computed from current
/// store state on every request, never cached.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    /// Number of fields the user owns.
    pub total_fields: usize,
    /// Fields whose latest satellite NDVI is strictly above the healthy
    /// threshold. Fields with no satellite data never count.
    pub healthy_fields: usize,
    /// Sum of field sizes in acres; a field with no size contributes 0.
    pub total_acres: f64,
    /// Sum of each field's latest predicted yield; fields with no
    /// prediction contribute 0.
    pub predicted_yield: f64,
}
