//! Basic parsing and querying with the stable feature set.
//!
//! Run with: `cargo run --example basic`

use inicfg::{parse_str, IniOptions};

fn main() {
    let source = "\
; application configuration
[server]
host = 0.0.0.0
port = 8080

[logging]
level = info
file = /var/log/app.log
";

    let ini = match parse_str(source, IniOptions::stable()) {
        Ok(ini) => ini,
        Err(err) => {
            eprintln!("parse failed: {err}");
            return;
        }
    };

    // Lookups are case-insensitive.
    let host = ini.get("SERVER", "Host").and_then(|v| v.as_str());
    println!("host = {}", host.unwrap_or("<missing>"));

    // Iterate a section's entries in sorted key order.
    if let Some(logging) = ini.table("logging") {
        println!("[logging]");
        for (key, value) in logging.iter() {
            println!("  {key} = {}", value.as_str().unwrap_or("<binary>"));
        }
    }
}
