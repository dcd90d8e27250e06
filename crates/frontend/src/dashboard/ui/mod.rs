pub mod dashboard;
pub mod metric_card;
pub mod trend_chart;

pub use dashboard::Dashboard;
pub use metric_card::MetricCard;
pub use trend_chart::TrendChart;
