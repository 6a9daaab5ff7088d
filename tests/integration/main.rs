//! Integration tests: engine properties over input grids and the
//! dashboard HTTP flow end to end.

mod dashboard_flow;
mod properties;
