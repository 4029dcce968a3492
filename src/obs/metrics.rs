// std
use std::time::Duration as StdDuration;
// self
use crate::obs::{Operation, OperationOutcome};

/// Counts one attempt, success, or failure of `operation` (no-op without `metrics`).
pub fn record_operation_outcome(operation: Operation, outcome: OperationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"drivecandy_operation_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

/// Records how long `operation` took, including the HTTP round trip.
pub fn record_operation_duration(operation: Operation, elapsed: StdDuration) {
	#[cfg(feature = "metrics")]
	{
		metrics::histogram!(
			"drivecandy_operation_duration_seconds",
			"operation" => operation.as_str(),
			"http.method" => operation.method()
		)
		.record(elapsed.as_secs_f64());
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, elapsed);
	}
}
