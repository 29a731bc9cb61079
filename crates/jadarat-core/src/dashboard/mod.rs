//! Dashboard domain module.

mod model;
mod source;

pub use model::{
    DashboardSummary, MonthlyRevenue, OrganizationStatus, OrganizationSummary,
    RECENT_ORGANIZATIONS_LIMIT,
};
pub use source::DashboardSource;
