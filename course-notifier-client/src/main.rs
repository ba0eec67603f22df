mod application;
mod listener;
mod notification_store;

use application::ApplicationEnv;
use listener::{Listener, ListenerConfig};
use notification_store::{Notification, NotificationStore};
use time::OffsetDateTime;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

const NOTIFICATIONS_BUFFER_SIZE: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing()?;

    let config = ListenerConfig {
        api_address: env.api_address,
        access_token: env.access_token,
        topic: env.topic,
        reconnect_delay: env.reconnect_delay,
    };
    let (notifications_tx, mut notifications_rx) = mpsc::channel(NOTIFICATIONS_BUFFER_SIZE);
    let listener = tokio::spawn(Listener::new(config, notifications_tx).run());

    let mut store = NotificationStore::new();
    let mut commands = BufReader::new(tokio::io::stdin()).lines();

    println!("commands: open, clear, bell, quit");

    loop {
        tokio::select! {
            notification = notifications_rx.recv() => {
                let Some(notification) = notification else {
                    break;
                };
                print_toast(store.receive(notification));
            }

            command = commands.next_line() => {
                match command? {
                    Some(command) => {
                        if !execute(&mut store, command.trim()) {
                            break;
                        }
                    }
                    None => break,
                }
            }

            _ = tokio::signal::ctrl_c() => break,
        }
    }

    drop(notifications_rx);
    listener.abort();

    Ok(())
}

///
/// ### Returns
/// false when the client should quit
///
fn execute(store: &mut NotificationStore, command: &str) -> bool {
    match command {
        "open" => {
            if store.is_empty() {
                println!("No notifications yet");
            }
            for notification in store.notifications() {
                let marker = if notification.read { ' ' } else { '*' };
                println!(
                    "{marker} {} {}",
                    format_time(notification.timestamp),
                    notification.message
                );
            }
            store.mark_all_read();
        }
        "clear" => {
            store.clear();
            println!("Notifications cleared");
        }
        "bell" => match store.bell_label() {
            Some(label) => println!("bell [{label}]"),
            None => println!("bell"),
        },
        "quit" => return false,
        "" => (),
        unknown => println!("unknown command: {unknown}"),
    }

    true
}

fn print_toast(notification: &Notification) {
    tracing::debug!(
        id = notification.id,
        entity_type = notification.entity_type,
        entity_id = ?notification.entity_id,
        "notification received"
    );
    println!("[{}] {}", notification.title(), notification.message);
}

/// HH:MM:SS in UTC, raw milliseconds when out of range
fn format_time(timestamp: i64) -> String {
    match OffsetDateTime::from_unix_timestamp_nanos(i128::from(timestamp) * 1_000_000) {
        Ok(datetime) => format!(
            "{:02}:{:02}:{:02}",
            datetime.hour(),
            datetime.minute(),
            datetime.second()
        ),
        Err(_) => timestamp.to_string(),
    }
}
