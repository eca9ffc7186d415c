//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `unstuck_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use unstuck_core::{
    open_store_in_memory, screen_time, sleep_summary, LogNotifier, SqliteKvStore, TrackerService,
};

fn main() {
    println!("unstuck_core version={}", unstuck_core::core_version());

    // An in-memory store exercises the full bootstrap path (migrations,
    // seeding, permission request) without touching the user's data file.
    let conn = match open_store_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("store bootstrap failed: {err}");
            std::process::exit(1);
        }
    };

    let probe = SqliteKvStore::try_new(&conn)
        .map_err(|err| err.to_string())
        .and_then(|store| {
            TrackerService::bootstrap(store, LogNotifier).map_err(|err| err.to_string())
        });

    match probe {
        Ok(service) => {
            let state = service.state();
            let sleep = sleep_summary(&state.sleep_logs);
            println!(
                "seeded activities={} sleep_logs={} goals={} apps={} points={}",
                state.activities.len(),
                state.sleep_logs.len(),
                state.goals.len(),
                state.app_usage.len(),
                service.points()
            );
            println!(
                "sleep average_hours={} average_quality={} screen_time={}",
                sleep.average_hours,
                sleep.average_quality,
                screen_time(&state.app_usage)
            );
        }
        Err(err) => {
            eprintln!("core bootstrap failed: {err}");
            std::process::exit(1);
        }
    }
}
