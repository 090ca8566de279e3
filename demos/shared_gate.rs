//! Shares one admission gate between async tasks and a plain OS thread, then cancels a waiter.

// std
use std::{sync::Arc, thread, time::Duration};
// crates.io
use color_eyre::Result;
use tokio::time::Instant;
// self
use crpt_gate::gate::{AdmissionGate, CancelSignal, GateConfig};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = GateConfig::from_json_str(
		r#"{"capacity":3,"window":{"unit":"milliseconds","count":500}}"#,
	)?;
	let gate = Arc::new(AdmissionGate::from_config(&config)?);
	let start = Instant::now();
	let tasks = (0..4)
		.map(|index| {
			let gate = gate.clone();

			tokio::spawn(async move {
				gate.acquire().await;

				println!("Task {index} admitted after {:?}.", start.elapsed());
			})
		})
		.collect::<Vec<_>>();
	let worker = {
		let gate = gate.clone();

		thread::spawn(move || {
			gate.acquire_blocking();

			println!("Thread admitted after {:?}.", start.elapsed());
		})
	};

	for task in tasks {
		task.await?;
	}

	worker.join().map_err(|_| color_eyre::eyre::eyre!("Worker thread panicked."))?;

	let cancel = CancelSignal::new();
	let waiter = {
		let gate = gate.clone();
		let cancel = cancel.clone();

		tokio::spawn(async move { gate.acquire_cancellable(&cancel).await })
	};

	while gate.try_acquire().is_admitted() {}

	tokio::time::sleep(Duration::from_millis(50)).await;
	cancel.cancel();

	match waiter.await? {
		Ok(()) => println!("Waiter admitted before cancellation."),
		Err(e) => println!("Waiter stopped: {e}."),
	}

	println!("Gate stats: {}.", serde_json::to_string(&gate.stats())?);

	Ok(())
}
