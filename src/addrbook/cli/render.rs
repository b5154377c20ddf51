use addrbook::commands::{CmdMessage, CmdResult, MessageLevel};
use addrbook::error::AddrBookError;
use addrbook::model::Record;
use colored::Colorize;

pub(super) fn render_messages(messages: &[CmdMessage]) -> Vec<String> {
    messages
        .iter()
        .map(|message| {
            let content = message.content.as_str();
            match message.level {
                MessageLevel::Info => content.normal().to_string(),
                MessageLevel::Success => content.green().to_string(),
                MessageLevel::Warning => content.yellow().to_string(),
            }
        })
        .collect()
}

pub(super) fn render_records(records: &[Record]) -> Vec<String> {
    records.iter().map(Record::to_string).collect()
}

/// Records first, then messages.
pub(super) fn render_result(result: &CmdResult) -> Vec<String> {
    let mut lines = render_records(&result.listed_records);
    lines.extend(render_messages(&result.messages));
    lines
}

pub(super) fn render_error(error: &AddrBookError) -> String {
    error.to_string().red().to_string()
}
