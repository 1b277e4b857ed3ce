//! The app's endpoint URIs.

/// The root route which redirects to the budget page.
pub const ROOT: &str = "/";
/// The single page showing the total, the entry form, the transaction
/// table, and the balance chart.
pub const BUDGET_VIEW: &str = "/budget";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for recording money added to the budget.
pub const ADD_TRANSACTION: &str = "/api/transactions/add";
/// The route for recording money taken from the budget.
pub const SUBTRACT_TRANSACTION: &str = "/api/transactions/subtract";
