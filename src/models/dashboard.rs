//! Dashboard summary figures.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "sales")]
    pub quantity: f64,
    #[serde(default)]
    pub revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default, alias = "action")]
    pub description: String,
    #[serde(default, alias = "time")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub new_customers: u64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub inventory_value: f64,
    /// Revenue change against the previous period, in percent.
    #[serde(default)]
    pub revenue_comparison: f64,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
    #[serde(default)]
    pub recent_activities: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_defaults_missing_fields() {
        let d: DashboardData = serde_json::from_str(
            r#"{"totalRevenue":1000.5,"pendingOrders":3,"topProducts":[{"name":"Rice","sales":12}]}"#,
        )
        .unwrap();
        assert_eq!(d.total_revenue, 1000.5);
        assert_eq!(d.pending_orders, 3);
        assert_eq!(d.new_customers, 0);
        assert_eq!(d.top_products[0].quantity, 12.0);
        assert!(d.recent_activities.is_empty());
    }
}
