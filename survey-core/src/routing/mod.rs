//! The routing module orders members of a finalized group into a visiting sequence and estimates route metrics.
//!
//! A route is an open path: it starts at the member closest to the group center and ends at the last
//! visited member, no return leg is assumed.

mod distance;
pub use self::distance::DistanceMatrix;

mod exchange;
pub use self::exchange::improve_with_two_opt;

mod metrics;
pub use self::metrics::RouteMetrics;

mod optimizer;
pub use self::optimizer::*;
