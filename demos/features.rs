//! The optional dialect features: global properties, nesting, inline
//! comments and quoted values.
//!
//! Run with: `cargo run --example features`

use inicfg::{parse_str, IniOptions};

fn main() {
    let source = "\
title = Demo            ; a global property with an inline comment

[net.http]
bind = '127.0.0.1:80'
motd = 'hello\\tworld \\u263A'

[net]
timeout = 30
";

    let ini = match parse_str(source, IniOptions::all()) {
        Ok(ini) => ini,
        Err(err) => {
            eprintln!("parse failed at line {}: {err}", err.line());
            return;
        }
    };

    // The empty table name addresses the global scope.
    println!("title = {:?}", ini.get("", "title").and_then(|v| v.as_str()));

    // Nested sections are addressed by path.
    println!("bind  = {:?}", ini.get("net.http", "bind").and_then(|v| v.as_str()));
    println!("motd  = {:?}", ini.get("net.http", "motd").and_then(|v| v.as_str()));

    // Intermediate tables exist as well.
    let net = ini.table("net").expect("net table");
    println!("timeout = {:?}", net.get("timeout").and_then(|v| v.as_str()));
}
