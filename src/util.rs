pub fn spawn_local<F, E>(target: &'static str, future: F)
where
	F: std::future::Future<Output = Result<(), E>> + 'static,
	E: std::fmt::Debug + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::error!(target: target, "{err:?}");
		}
	});
}

/// Simulated network latency. Immediate off-wasm so the test suite does not
/// wait on timers.
pub async fn latency(ms: u32) {
	#[cfg(target_family = "wasm")]
	gloo_timers::future::TimeoutFuture::new(ms).await;
	#[cfg(not(target_family = "wasm"))]
	let _ = ms;
}

/// Indian-rupee display used across cards and detail pages, e.g. `₹2.0 Lakhs`.
pub fn format_inr(amount: u32) -> String {
	if amount >= 100_000 {
		format!("₹{:.1} Lakhs", amount as f64 / 100_000.0)
	} else {
		format!("₹{amount}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn amounts_over_a_lakh_use_lakh_units() {
		assert_eq!(format_inr(200000), "₹2.0 Lakhs");
		assert_eq!(format_inr(95000), "₹95000");
		assert_eq!(format_inr(1200000), "₹12.0 Lakhs");
	}
}
