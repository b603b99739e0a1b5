use cadence::{simulated, Clock, FloatTime, Scheduler, SimClock, SimWaiter};

type SimScheduler = Scheduler<SimClock<FloatTime>, SimWaiter<FloatTime>>;

/// Re-arms itself until `remaining` reaches zero.
fn heartbeat(sched: &SimScheduler, period: f64, remaining: u32) {
    sched.enter(period, 5, move |sched: &SimScheduler| {
        println!("[t={:>5}] 💓 heartbeat ({} left)", sched.clock().now(), remaining - 1);
        if remaining > 1 {
            heartbeat(sched, period, remaining - 1);
        }
        Ok(())
    });
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_target(false)
        .init();

    println!("🚀 Simulated time: the whole run finishes instantly\n");

    let (clock, waiter) = simulated(FloatTime(0.0));
    let scheduler = Scheduler::new(clock, waiter.clone());

    heartbeat(&scheduler, 2.5, 4);
    scheduler.enterabs(FloatTime(5.0), 0, |sched: &SimScheduler| {
        println!("[t={:>5}] 📦 batch job (priority 0 wins the tie)", sched.clock().now());
        Ok(())
    });
    let timeout = scheduler.enterabs(FloatTime(6.0), 0, |_: &SimScheduler| {
        println!("never printed: cancelled below");
        Ok(())
    });
    scheduler.enterabs(FloatTime(4.0), 0, move |sched: &SimScheduler| {
        println!("[t={:>5}] ✂️  cancelling the timeout", sched.clock().now());
        sched.cancel(&timeout)?;
        Ok(())
    });

    println!("📋 Pending before the run:");
    for id in scheduler.queue() {
        println!("   t={:<5} priority={} #{}", id.time(), id.priority(), id.sequence());
    }
    println!();

    if let Some(deadline) = scheduler.run(false)? {
        println!("⏭️  Non-blocking run: next deadline at t={}\n", deadline);
    }

    scheduler.run(true)?;
    println!("\n✅ Drained at t={} after {} waits", scheduler.clock().now(), waiter.waits().len());
    Ok(())
}
