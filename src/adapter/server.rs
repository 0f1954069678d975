use super::protocol::{AdapterMessage, AdapterMessageContent};
use crate::commands::{BLOCK_END_NOTICE, COUNT_PROMPT, NOT_FOUND_NOTICE, WRAPPER_END_NOTICE};
use crate::parser::{DEFAULT_INDENT_UNIT, DEFAULT_REPEAT_COUNT};
use crate::rewrite::{
    find_declaration, plan_toggle_only, plan_unwrap, plan_wrap, times_state, EditBatch, TimesState,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::{self, BufRead, Read, Write};

/// Arguments both commands carry: the live buffer and the cursor. The
/// editor keeps ownership of the document; it only ships a snapshot here
/// and applies the returned edits itself, in one transaction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentArgs {
    lines: Vec<String>,
    /// 0-indexed cursor line.
    cursor_line: usize,
    /// Repeat count for wrap; absent means the editor has not prompted yet.
    #[serde(default)]
    count: Option<u32>,
    #[serde(default)]
    indent_unit: Option<String>,
}

impl DocumentArgs {
    fn parse(args: Option<Value>) -> Option<Self> {
        serde_json::from_value(args?).ok()
    }

    fn indent_unit(&self) -> &str {
        self.indent_unit.as_deref().unwrap_or(DEFAULT_INDENT_UNIT)
    }
}

/// Outcome of one command request, ready to be sent back: the response
/// fields plus an optional `showMessage` event for the user.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandReply {
    pub success: bool,
    pub message: Option<String>,
    pub body: Option<Value>,
    pub notice: Option<String>,
}

impl CommandReply {
    fn applied(batch: &EditBatch) -> Self {
        Self {
            success: true,
            message: None,
            body: Some(json!({ "edits": batch.edits() })),
            notice: None,
        }
    }

    fn rejected(notice: &str) -> Self {
        Self {
            success: true,
            message: None,
            body: Some(json!({ "edits": [] })),
            notice: Some(notice.to_string()),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            body: None,
            notice: None,
        }
    }
}

/// Compute the reply for a `toggleOnly` request.
pub fn toggle_only_reply(args: Option<Value>) -> CommandReply {
    let Some(args) = DocumentArgs::parse(args) else {
        return CommandReply::invalid("invalid toggleOnly arguments");
    };
    match plan_toggle_only(&args.lines, args.cursor_line) {
        Ok(batch) => CommandReply::applied(&batch),
        Err(_) => CommandReply::rejected(NOT_FOUND_NOTICE),
    }
}

/// Compute the reply for a `toggleTimes` request. When the block is
/// unwrapped and no count was supplied, the reply asks the editor to prompt
/// and re-invoke; prompting stays on the host side.
pub fn toggle_times_reply(args: Option<Value>) -> CommandReply {
    let Some(args) = DocumentArgs::parse(args) else {
        return CommandReply::invalid("invalid toggleTimes arguments");
    };
    let Some(decl_line) = find_declaration(&args.lines, args.cursor_line) else {
        return CommandReply::rejected(NOT_FOUND_NOTICE);
    };

    match times_state(&args.lines, decl_line) {
        TimesState::Wrapped { wrapper_line } => {
            match plan_unwrap(&args.lines, wrapper_line, args.indent_unit()) {
                Ok(batch) => CommandReply::applied(&batch),
                Err(_) => CommandReply::rejected(WRAPPER_END_NOTICE),
            }
        }
        TimesState::Unwrapped => {
            let Some(count) = args.count else {
                return CommandReply {
                    success: true,
                    message: None,
                    body: Some(json!({
                        "needCount": true,
                        "prompt": COUNT_PROMPT,
                        "default": DEFAULT_REPEAT_COUNT,
                    })),
                    notice: None,
                };
            };
            if count == 0 {
                return CommandReply::invalid("repeat count must be a positive integer");
            }
            match plan_wrap(&args.lines, decl_line, count, args.indent_unit()) {
                Ok(batch) => CommandReply::applied(&batch),
                Err(_) => CommandReply::rejected(BLOCK_END_NOTICE),
            }
        }
    }
}

/// Encode one message with its `Content-Length` header. The framing must be
/// exactly `Content-Length: {len}\r\n\r\n{json}`.
pub fn encode_frame(msg: &AdapterMessage) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(msg)?;
    Ok(format!("Content-Length: {}\r\n\r\n{}", json.len(), json))
}

/// Read one framed message; `None` on EOF or an unparsable frame.
pub fn read_framed(reader: &mut impl BufRead) -> Option<AdapterMessage> {
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        let n = reader.read_line(&mut line).ok()?;
        if n == 0 {
            return None;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some(rest) = line.strip_prefix("Content-Length:") {
            content_length = rest.trim().parse().unwrap_or(0);
        }
    }
    if content_length == 0 {
        return None;
    }
    let mut buffer = vec![0u8; content_length];
    reader.read_exact(&mut buffer).ok()?;
    serde_json::from_slice(&buffer).ok()
}

/// Stdio server for the editor adapter protocol. Responses and events go to
/// stdout; status lines go to stderr so they never corrupt the framing.
pub struct AdapterServer {
    seq: u64,
}

impl AdapterServer {
    pub fn new() -> Self {
        Self { seq: 0 }
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    pub fn send_response(
        &mut self,
        request_seq: u64,
        command: String,
        success: bool,
        message: Option<String>,
        body: Option<Value>,
    ) {
        let msg = AdapterMessage {
            seq: self.next_seq(),
            msg_type: "response".to_string(),
            content: AdapterMessageContent::Response {
                request_seq,
                success,
                command,
                message,
                body,
            },
        };
        self.send_message(&msg);
    }

    pub fn send_event(&mut self, event: String, body: Option<Value>) {
        let msg = AdapterMessage {
            seq: self.next_seq(),
            msg_type: "event".to_string(),
            content: AdapterMessageContent::Event { event, body },
        };
        self.send_message(&msg);
    }

    fn send_message(&self, msg: &AdapterMessage) {
        match encode_frame(msg) {
            Ok(frame) => {
                print!("{frame}");
                let _ = io::stdout().flush();
            }
            Err(e) => eprintln!("failed to encode message: {e}"),
        }
    }

    pub fn read_message(&self) -> Option<AdapterMessage> {
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        read_framed(&mut handle)
    }

    pub fn handle_initialize(&mut self, seq: u64, command: String) {
        let body = json!({
            "commands": ["toggleOnly", "toggleTimes"],
            "defaultRepeatCount": DEFAULT_REPEAT_COUNT,
        });
        self.send_response(seq, command, true, None, Some(body));
        self.send_event("initialized".to_string(), None);
    }

    pub fn handle_toggle_only(&mut self, seq: u64, command: String, args: Option<Value>) {
        let reply = toggle_only_reply(args);
        self.finish(seq, command, reply);
    }

    pub fn handle_toggle_times(&mut self, seq: u64, command: String, args: Option<Value>) {
        let reply = toggle_times_reply(args);
        self.finish(seq, command, reply);
    }

    fn finish(&mut self, seq: u64, command: String, reply: CommandReply) {
        self.send_response(seq, command, reply.success, reply.message, reply.body);
        if let Some(notice) = reply.notice {
            self.send_event("showMessage".to_string(), Some(json!({ "message": notice })));
        }
    }
}

impl Default for AdapterServer {
    fn default() -> Self {
        Self::new()
    }
}
