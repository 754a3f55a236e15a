//! Static reference datasets shown on the dashboard.
//!
//! Everything here is built at compile time and never mutated.

use crate::domain::{
    CostCategory, CostRecommendation, FlipCardSpec, Icon, Impact, Metric, RiskMetric, RiskStatus,
};

pub static METRICS: [Metric; 4] = [
    Metric {
        title: "Revenue",
        value: "$125,000",
        change: 12.5,
        icon: Icon::DollarSign,
    },
    Metric {
        title: "Customers",
        value: "1,240",
        change: 8.2,
        icon: Icon::Users,
    },
    Metric {
        title: "Risk Score",
        value: "85/100",
        change: -2.4,
        icon: Icon::AlertTriangle,
    },
    Metric {
        title: "Efficiency",
        value: "94%",
        change: 5.1,
        icon: Icon::TrendingUp,
    },
];

pub static RISKS: [RiskMetric; 4] = [
    RiskMetric {
        category: "Market Volatility",
        value: 75,
        status: RiskStatus::High,
    },
    RiskMetric {
        category: "Operational Risk",
        value: 45,
        status: RiskStatus::Medium,
    },
    RiskMetric {
        category: "Credit Risk",
        value: 30,
        status: RiskStatus::Low,
    },
    RiskMetric {
        category: "Compliance Risk",
        value: 60,
        status: RiskStatus::Medium,
    },
];

pub static COST_CATEGORIES: [CostCategory; 3] = [
    CostCategory {
        name: "Operations",
        current_cost: 50000.0,
        previous_cost: 55000.0,
        predicted_reduction: 3000.0,
        efficiency: 92.0,
    },
    CostCategory {
        name: "Marketing",
        current_cost: 30000.0,
        previous_cost: 28000.0,
        predicted_reduction: 2000.0,
        efficiency: 85.0,
    },
    CostCategory {
        name: "Technology",
        current_cost: 25000.0,
        previous_cost: 22000.0,
        predicted_reduction: 1500.0,
        efficiency: 88.0,
    },
];

pub static RECOMMENDATIONS: [CostRecommendation; 2] = [
    CostRecommendation {
        category: "Operations Optimization",
        impact: Impact::High,
        potential_savings: 15000.0,
        description: "Streamline operational processes through automation",
        action_items: &[
            "Implement automated inventory management",
            "Optimize workforce scheduling",
            "Reduce manual data entry tasks",
        ],
    },
    CostRecommendation {
        category: "Marketing Efficiency",
        impact: Impact::Medium,
        potential_savings: 8000.0,
        description: "Improve marketing ROI through targeted campaigns",
        action_items: &[
            "Focus on high-performing channels",
            "Implement A/B testing",
            "Optimize ad spend allocation",
        ],
    },
];

pub static FLIP_CARDS: [FlipCardSpec; 3] = [
    FlipCardSpec {
        title: "Risk Assessment",
        front_content: "Comprehensive analysis of potential risks and mitigation strategies.",
        back_content: "AI-powered risk scoring and automated alert system for proactive risk management.",
        icon: Icon::AlertTriangle,
        risk_percentage: Some(75),
        tip: Some("Implement automated risk monitoring systems to reduce exposure by 30%"),
    },
    FlipCardSpec {
        title: "Demand Forecasting",
        front_content: "Advanced predictive modeling for future market demand.",
        back_content: "Machine learning algorithms analyzing historical data and market trends.",
        icon: Icon::LineChart,
        risk_percentage: Some(45),
        tip: Some("Utilize historical data patterns to improve forecast accuracy by 25%"),
    },
    FlipCardSpec {
        title: "Market Analysis",
        front_content: "Deep insights into market trends and competitive landscape.",
        back_content: "Real-time competitor tracking and market opportunity identification.",
        icon: Icon::BarChart2,
        risk_percentage: Some(60),
        tip: Some("Diversify market presence to reduce dependency on primary segments"),
    },
];

/// Sum of potential savings across all recommendations.
pub fn total_potential_savings() -> f64 {
    RECOMMENDATIONS.iter().map(|r| r.potential_savings).sum()
}
