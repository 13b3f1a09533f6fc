use std::io::{self, Write};

use helix_keys::HelixKeysPlugin;
use notekit::crossterm::{
    cursor::MoveTo,
    event::{read, Event, KeyCode, KeyEventKind},
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
    QueueableCommand,
};
use notekit::editor::EditorHandle;
use notekit::key::Keydown;
use notekit::memory::MemHost;

const SAMPLE: &str = "This little notepad hosts the helix-keys plugin.\n\
    Move around with the arrow keys and type away, then try the bindings:\n\
    Alt+w selects the word under the cursor, and d deletes the selection.\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut host = MemHost::new(SAMPLE);

    host.load_plugin(Box::new(HelixKeysPlugin::new()))?;

    terminal::enable_raw_mode()?;
    let res = run(&mut host);
    terminal::disable_raw_mode()?;

    return res;
}

fn run(host: &mut MemHost) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();

    loop {
        redraw(host, &mut stdout)?;

        match read()? {
            Event::Key(ke) if ke.kind != KeyEventKind::Release => {
                if ke.code == KeyCode::Esc {
                    return Ok(());
                }

                host.press(Keydown::from(ke));
            },
            _ => continue,
        }
    }
}

fn redraw(host: &MemHost, stdout: &mut io::Stdout) -> Result<(), Box<dyn std::error::Error>> {
    stdout.queue(Clear(ClearType::All))?;

    let editor = host.editor();
    let selection = editor.selection_span();
    let text = editor.text();

    for (y, line) in text.lines().enumerate() {
        stdout.queue(MoveTo(0, y as u16))?;

        // Highlight the selected part of the line, if any.
        match &selection {
            Some(span) if span.from.get_y() == y && span.to.get_y() == y => {
                let chars: Vec<char> = line.chars().collect();
                let a = span.from.get_x().min(chars.len());
                let b = span.to.get_x().min(chars.len());

                let head: String = chars[..a].iter().collect();
                let mid: String = chars[a..b].iter().collect();
                let tail: String = chars[b..].iter().collect();

                stdout.queue(Print(head))?;
                stdout.queue(SetAttribute(Attribute::Reverse))?;
                stdout.queue(Print(mid))?;
                stdout.queue(SetAttribute(Attribute::Reset))?;
                stdout.queue(Print(tail))?;
            },
            _ => {
                stdout.queue(Print(line))?;
            },
        }
    }

    let status = match host.notices().last() {
        Some(notice) => notice.to_string(),
        None => String::from("Alt+w selects the word under the cursor; Esc quits."),
    };

    let (_, rows) = terminal::size()?;

    stdout.queue(MoveTo(0, rows.saturating_sub(1)))?;
    stdout.queue(SetAttribute(Attribute::Bold))?;
    stdout.queue(Print(status))?;
    stdout.queue(SetAttribute(Attribute::Reset))?;

    // Park the terminal cursor on the editor cursor.
    let cursor = editor.cursor();
    stdout.queue(MoveTo(cursor.get_x() as u16, cursor.get_y() as u16))?;

    stdout.flush()?;

    return Ok(());
}
