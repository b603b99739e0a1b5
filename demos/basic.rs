use cadence::SchedulerBuilder;
use chrono::{Local, TimeDelta};

fn print_event(name: &str) {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    println!("[{}] {}", now, name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Scheduling three events on the wall clock...\n");

    let scheduler = SchedulerBuilder::new().build();

    scheduler.enter(TimeDelta::seconds(2), 1, |_| {
        print_event("[2s, priority 1] runs after the priority 0 event");
        Ok(())
    });
    scheduler.enter(TimeDelta::seconds(2), 0, |_| {
        print_event("[2s, priority 0] same time, higher priority");
        Ok(())
    });
    scheduler.enter(TimeDelta::seconds(1), 0, |_| {
        print_event("[1s] first one due");
        Ok(())
    });

    let dropped = scheduler.enter(TimeDelta::seconds(3), 0, |_| {
        print_event("[3s] never printed");
        Ok(())
    });
    scheduler.cancel(&dropped)?;

    print_event("[START]");
    scheduler.run(true)?;
    print_event("[DONE] queue drained");
    Ok(())
}
