// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help() {
    println!(
        "Eventide v{} - Turns notification messages into calendar events",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    eventide [OPTIONS] [messages-file]");
    println!();
    println!("    Reads one message per line from <messages-file>, or from stdin when no");
    println!("    file is given. Parsed events are stored, exported, and reported when");
    println!("    they fall within the upcoming window. Malformed messages are skipped");
    println!("    with a logged reason.");
    println!();
    println!("OPTIONS:");
    println!("    --from <YYYY-MM-DD>   Reference date for the queries (default: today, UTC)");
    println!("    --horizon <days>      Upcoming window in days (default: from config, 7)");
    println!("    --export <path>       Export destination (default: from config)");
    println!("    --no-export           Skip writing the export file");
    println!("    -h, --help            Show this help message");
    println!();
    println!("MESSAGE SYNTAX:");
    println!("    \"label\"           Double-quoted event label (required)");
    println!("    D/M/YYYY          Event date, day first (required, e.g. 9/5/1990)");
    println!("    birthday          Anywhere in the message marks the event as a birthday");
    println!();
    println!("EXAMPLES:");
    println!("    echo 'Birthday \"Joe Soap\" 9/5/1990' | eventide");
    println!("    eventide --from 2024-02-22 --horizon 14 messages.txt");
    println!("    eventide --no-export messages.txt");
}
