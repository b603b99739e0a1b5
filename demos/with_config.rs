use cadence::{Clock, SchedulerBuilder};
use chrono::Local;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .with_target(false)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/config/scheduler.toml".to_string());
    println!("📝 Loading {} (override with CADENCE_SCHEDULER__MAX_WAIT)\n", path);

    let builder = if path.ends_with(".yaml") || path.ends_with(".yml") {
        SchedulerBuilder::with_yaml(&path)?
    } else {
        SchedulerBuilder::with_toml(&path)?
    };
    // time_unit = "milliseconds", so deltas below are milliseconds.
    let scheduler = builder.epoch_clock().build();

    for (delay, label) in [(1500, "1.5s"), (500, "0.5s"), (1000, "1s")] {
        scheduler.enter(delay, 0, move |sched| {
            let now = Local::now().format("%H:%M:%S%.3f");
            println!("[{}] ⏱️  {} event (epoch ms {})", now, label, sched.clock().now());
            Ok(())
        });
    }

    scheduler.run(true)?;
    println!("\n👋 All events ran.");
    Ok(())
}
