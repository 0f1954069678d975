mod protocol;
mod server;

pub use protocol::{AdapterMessage, AdapterMessageContent};
pub use server::{
    encode_frame, read_framed, toggle_only_reply, toggle_times_reply, AdapterServer, CommandReply,
};

use crate::logging::LogFile;
use std::io;

/// Serve editor requests over stdio until the editor disconnects or stdin
/// closes. One request, one response; `toggleTimes` may additionally round
/// trip a `needCount` reply while the editor prompts the user.
pub fn run_adapter_mode() -> io::Result<()> {
    eprintln!("Adapter server starting...");
    let mut log = LogFile::from_env();
    log.line("adapter mode entered");

    let mut server = AdapterServer::new();

    loop {
        let Some(msg) = server.read_message() else {
            log.line("stdin closed, exiting");
            break;
        };
        log.line(&format!("received: {:?}", msg.content));

        match msg.content {
            AdapterMessageContent::Request { command, arguments } => match command.as_str() {
                "initialize" => {
                    eprintln!("Handling initialize");
                    server.handle_initialize(msg.seq, command);
                }
                "toggleOnly" => {
                    server.handle_toggle_only(msg.seq, command, arguments);
                }
                "toggleTimes" => {
                    server.handle_toggle_times(msg.seq, command, arguments);
                }
                "disconnect" => {
                    server.send_response(msg.seq, command, true, None, None);
                    break;
                }
                _ => {
                    eprintln!("Unhandled adapter command: {}", command);
                    server.send_response(msg.seq, command, false, None, None);
                }
            },
            _ => {
                eprintln!("Ignoring non-request message");
            }
        }
    }

    log.line("adapter mode exiting");
    Ok(())
}
